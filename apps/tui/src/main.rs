mod app;
mod event;
mod terminal;
mod ui;

use std::rc::Rc;

use app::App;
use clap::Parser;
use color_eyre::Result;
use film_stats_core::{ApiClient, Dashboard};
use film_stats_tui::cli::CliArgs;
use film_stats_tui::config::init_app_config;
use film_stats_tui::logging::{init_logging, LogTarget};
use film_stats_tui::ReqwestTransport;
use tokio::task::LocalSet;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Setup error handling
    color_eyre::install()?;

    let config = init_app_config()?;
    let headless = args.headless || args.json || !is_terminal();

    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(&config.log_file)
    };
    init_logging(target, config.debug)?;
    log::info!("film stats starting against {}", config.api_url);

    let transport = ReqwestTransport::new()?;
    let client = ApiClient::new(Rc::new(transport), config.api_url.as_str());
    let dashboard = Dashboard::new(client, &config.theme)?;

    // Widget fetches share the page through Rc, so they run as local tasks
    LocalSet::new()
        .run_until(async move {
            if headless {
                return event::run_headless(&dashboard, args.json).await;
            }

            let mut app = App::new(dashboard);
            let mut terminal = terminal::setup()?;
            let result = event::run(&mut terminal, &mut app).await;
            terminal::cleanup(true, true);
            result
        })
        .await
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
