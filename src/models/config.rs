//! Configuration model loaded from external sources.

use std::env;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::types::PageSize;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_items_per_page_choices() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the list services and the preview binary.
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: usize,
    /// The only page sizes the UI offers; anything else is ignored.
    #[serde(default = "default_items_per_page_choices")]
    pub items_per_page_choices: Vec<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            default_items_per_page: default_items_per_page(),
            items_per_page_choices: default_items_per_page_choices(),
        }
    }
}

impl ClientConfig {
    /// Loads `config/default`, the optional `config/{APP_ENV}` profile
    /// (defaults to `local`) and `APP_`-prefixed environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn default_page_size(&self) -> PageSize {
        PageSize::new(self.default_items_per_page).unwrap_or_default()
    }

    /// Resolves a requested page size against the offered choices, falling
    /// back to the default for anything not on the list.
    pub fn page_size(&self, requested: Option<usize>) -> PageSize {
        match requested {
            None => self.default_page_size(),
            Some(value) if self.items_per_page_choices.contains(&value) => {
                PageSize::new(value).unwrap_or_else(|_| self.default_page_size())
            }
            Some(value) => {
                log::warn!("Ignoring unsupported page size {value}");
                self.default_page_size()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_accepts_only_offered_choices() {
        let config = ClientConfig::default();

        assert_eq!(config.page_size(None).get(), 10);
        assert_eq!(config.page_size(Some(20)).get(), 20);
        assert_eq!(config.page_size(Some(7)).get(), 10);
        assert_eq!(config.page_size(Some(0)).get(), 10);
    }

    #[test]
    fn zero_default_falls_back_to_crate_default() {
        let config = ClientConfig {
            default_items_per_page: 0,
            ..ClientConfig::default()
        };

        assert_eq!(config.default_page_size().get(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url": "https://bands.example/api"}"#).unwrap();

        assert_eq!(config.default_items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.items_per_page_choices, vec![5, 10, 20, 50]);
    }
}
