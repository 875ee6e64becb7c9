use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "film-stats", version, about = "Film log statistics dashboard")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the statistics API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// JSON theme layered over the dashboard theme
    #[arg(long, value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// Where interactive mode writes its log
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("FILM_STATS_API_URL", url);
        }
        if let Some(path) = &self.theme {
            std::env::set_var("FILM_STATS_THEME", path);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("FILM_STATS_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
