#[allow(clippy::module_inception)]
mod config;

pub use config::{
    init_app_config, load_theme, parse_api_url, theme_from_json, AppConfig, ConfigError,
    DEFAULT_API_URL, DEFAULT_LOG_FILE,
};
