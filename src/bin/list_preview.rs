//! Renders one page of a resource list from a JSON snapshot.
//!
//! Usage:
//! `list_preview <snapshot.json> <bands|vacancies|applications|reviews> [page] [per_page] [sort] [order] [key=value ...]`
//!
//! The list controls may also be given as `page=`, `per_page=`, `sort=` and
//! `order=`. `band=<id>` and `vacancy=<id>` select the parent record.

use std::env;
use std::process;

use dotenvy::dotenv;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use bandmate::domain::session::{AuthenticatedUser, BAND_ADMIN_ROLE, MUSICIAN_ROLE, Session};
use bandmate::domain::types::{BandId, UserId, Username, VacancyId};
use bandmate::dto::list::ListQuery;
use bandmate::models::config::ClientConfig;
use bandmate::repository::JsonSnapshotRepository;
use bandmate::services::applications::load_applications_page;
use bandmate::services::bands::load_bands_page;
use bandmate::services::reviews::load_reviews_page;
use bandmate::services::vacancies::load_vacancies_page;

const USAGE: &str =
    "usage: list_preview <snapshot.json> <resource> [page] [per_page] [sort] [order] [key=value ...]";

/// Positional list controls, in command-line order.
const POSITIONAL: [&str; 4] = ["page", "per_page", "sort", "order"];

#[derive(Debug)]
struct Options {
    resource: String,
    params: Map<String, Value>,
    band: Option<i32>,
    vacancy: Option<i32>,
}

impl Options {
    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "page" | "per_page" => {
                let number = value
                    .parse::<usize>()
                    .map_err(|_| format!("`{key}` must be a non-negative number, got `{value}`"))?;
                self.params.insert(key.to_string(), number.into());
            }
            "sort" | "order" => {
                self.params.insert(key.to_string(), value.into());
            }
            "band" => self.band = Some(parse_id(key, value)?),
            "vacancy" => self.vacancy = Some(parse_id(key, value)?),
            _ => return Err(format!("unknown option `{key}`")),
        }
        Ok(())
    }
}

fn parse_id(key: &str, value: &str) -> Result<i32, String> {
    value
        .parse::<i32>()
        .map_err(|err| format!("`{key}` must be a 32-bit id, got `{value}`: {err}"))
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let (resource, rest) = args.split_first().ok_or("missing resource name")?;
    let mut options = Options {
        resource: resource.clone(),
        params: Map::new(),
        band: None,
        vacancy: None,
    };

    let mut positional = POSITIONAL.iter();
    for arg in rest {
        match arg.split_once('=') {
            Some((key, value)) => options.set(key, value)?,
            None => {
                let key = positional
                    .next()
                    .ok_or_else(|| format!("unexpected argument `{arg}`"))?;
                options.set(key, arg)?;
            }
        }
    }

    Ok(options)
}

fn list_query<K: DeserializeOwned>(params: &Map<String, Value>) -> Result<ListQuery<K>, String> {
    serde_json::from_value(Value::Object(params.clone()))
        .map_err(|err| format!("invalid list options: {err}"))
}

fn render(
    repo: &JsonSnapshotRepository,
    session: &Session,
    config: &ClientConfig,
    options: &Options,
) -> Result<Value, String> {
    let page = match options.resource.as_str() {
        "bands" => serde_json::to_value(
            load_bands_page(repo, session, config, list_query(&options.params)?)
                .map_err(|err| err.to_string())?,
        ),
        "vacancies" => {
            let band_id = options
                .band
                .map(BandId::new)
                .transpose()
                .map_err(|err| format!("band: {err}"))?;
            serde_json::to_value(
                load_vacancies_page(repo, session, config, band_id, list_query(&options.params)?)
                    .map_err(|err| err.to_string())?,
            )
        }
        "applications" => {
            let vacancy_id = VacancyId::new(options.vacancy.ok_or("`vacancy=<id>` is required")?)
                .map_err(|err| format!("vacancy: {err}"))?;
            serde_json::to_value(
                load_applications_page(
                    repo,
                    session,
                    config,
                    vacancy_id,
                    list_query(&options.params)?,
                )
                .map_err(|err| err.to_string())?,
            )
        }
        "reviews" => {
            let band_id = BandId::new(options.band.ok_or("`band=<id>` is required")?)
                .map_err(|err| format!("band: {err}"))?;
            serde_json::to_value(
                load_reviews_page(repo, session, config, band_id, list_query(&options.params)?)
                    .map_err(|err| err.to_string())?,
            )
        }
        other => return Err(format!("unknown resource `{other}`")),
    };

    page.map_err(|err| format!("failed to encode page: {err}"))
}

fn local_session() -> Session {
    let mut session = Session::new();
    if let (Ok(id), Ok(username)) = (UserId::new(1), Username::new("preview")) {
        session.sign_in(AuthenticatedUser {
            id,
            username,
            roles: vec![MUSICIAN_ROLE.to_string(), BAND_ADMIN_ROLE.to_string()],
            token: String::new(),
        });
    }
    session
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((snapshot, rest)) = args.split_first() else {
        log::error!("{USAGE}");
        process::exit(2);
    };

    let options = match parse_options(rest) {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}\n{USAGE}");
            process::exit(2);
        }
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using built-in defaults, failed to load config: {err}");
            ClientConfig::default()
        }
    };

    let repo = JsonSnapshotRepository::new(snapshot);
    let session = local_session();

    match render(&repo, &session, &config, &options) {
        Ok(page) => match serde_json::to_string_pretty(&page) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                log::error!("Failed to encode page: {err}");
                process::exit(1);
            }
        },
        Err(err) => {
            log::error!("Failed to render {}: {err}", options.resource);
            process::exit(1);
        }
    }
}
