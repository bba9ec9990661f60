//! Adapters for the Wildora client: REST API, configuration file, fonts.

pub mod config_service;
pub mod font_provider;
pub mod http_api;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::font_provider::StylesheetFontProvider;
pub use crate::http_api::HttpWildoraApi;
pub use crate::paths::WildoraPaths;
