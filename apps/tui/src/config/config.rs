use dotenv::dotenv;
use film_stats_core::{StyleError, StyleOverrides};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILE: &str = "film-stats.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API URL '{0}' must start with http:// or https://")]
    InvalidApiUrl(String),

    #[error("Could not read theme file {path}: {source}")]
    ThemeRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Theme file {path} is invalid: {source}")]
    Theme { path: PathBuf, source: StyleError },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub theme: StyleOverrides,
    pub log_file: PathBuf,
    pub debug: bool,
}

/// Loads `.env`, then reads the `FILM_STATS_*` variables.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();

    let api_url = parse_api_url(
        &env::var("FILM_STATS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
    )?;

    let theme = match env::var_os("FILM_STATS_THEME") {
        Some(path) => load_theme(Path::new(&path))?,
        None => StyleOverrides::dashboard_theme(),
    };

    let log_file = env::var_os("FILM_STATS_LOG_FILE")
        .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

    let debug = env::var("DEBUG").is_ok_and(|value| value == "1" || value == "true");

    Ok(AppConfig {
        api_url,
        theme,
        log_file,
        debug,
    })
}

pub fn parse_api_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(value.to_string()));
    }
    Ok(trimmed.to_string())
}

/// The dashboard theme with the file's keys layered on top.
pub fn load_theme(path: &Path) -> Result<StyleOverrides, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ThemeRead {
        path: path.to_path_buf(),
        source,
    })?;
    theme_from_json(&text).map_err(|source| ConfigError::Theme {
        path: path.to_path_buf(),
        source,
    })
}

pub fn theme_from_json(text: &str) -> Result<StyleOverrides, StyleError> {
    let overrides = StyleOverrides::from_json(text)?;
    Ok(StyleOverrides::dashboard_theme().layered(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use film_stats_core::Rgba;

    #[test]
    fn api_url_must_be_http() {
        assert_eq!(
            parse_api_url(" http://localhost:3000/ ").ok().as_deref(),
            Some("http://localhost:3000")
        );
        assert!(parse_api_url("https://stats.example.org").is_ok());
        assert!(matches!(
            parse_api_url("localhost:3000"),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }

    #[test]
    fn theme_file_layers_over_dashboard_theme() -> Result<(), StyleError> {
        let theme = theme_from_json(r##"{"textColor":"#ffffff"}"##)?;
        assert_eq!(theme.text_color, Some(Rgba::rgb(255, 255, 255)));
        assert!(theme.pie.is_some());
        Ok(())
    }

    #[test]
    fn missing_theme_file_is_reported() {
        let result = load_theme(Path::new("/definitely/not/here/theme.json"));
        assert!(matches!(result, Err(ConfigError::ThemeRead { .. })));
    }
}
