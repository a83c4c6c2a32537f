//! DTO modules that bridge services with the rendering layer.

pub mod list;
