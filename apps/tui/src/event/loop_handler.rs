use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use film_stats_core::{Dashboard, RenderOutcome, WidgetReport, WidgetState};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Time handed to spawned fetches between frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Run the dashboard without a UI: load every widget once and print what
/// each one shows.
pub async fn run_headless(dashboard: &Dashboard, json: bool) -> Result<()> {
    let outcomes = dashboard.load_all().await;
    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, RenderOutcome::Failed(_)))
        .count();
    if failed > 0 {
        log::warn!("{failed} of {} widgets failed to load", outcomes.len());
    }

    let widgets = dashboard.snapshot();
    if json {
        let report = HeadlessReport {
            api_url: dashboard.client().base_url(),
            widgets,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&widgets));
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    api_url: &'a str,
    widgets: Vec<WidgetReport>,
}

/// Plain-text rendering of a snapshot.
pub fn format_report(widgets: &[WidgetReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nFilm Stats");
    let _ = writeln!(out, "==========");

    for report in widgets {
        if let Some(value) = &report.value {
            let _ = writeln!(out, "{}: {value}", report.title);
        } else {
            let _ = writeln!(out, "\n{}:", report.title);
        }

        for series in &report.series {
            for (label, value) in &series.points {
                let _ = writeln!(out, "- {label}: {value}");
            }
        }
        for card in &report.cards {
            let _ = writeln!(out, "- {} | {}", card.title, card.caption);
        }

        if let Some(notice) = &report.notice {
            let _ = writeln!(out, "  ({})", notice.text);
        }
        if report.state == WidgetState::Failed {
            let reason = report.error.as_deref().unwrap_or("failed to load");
            let _ = writeln!(out, "  ! {reason}");
        }
    }

    out
}

/// Run the main application event loop
///
/// Widget fetches run as local tasks on the same thread; the loop never
/// blocks on terminal input so they can make progress between frames.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    app.refresh_all();

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| {
            app.viewport = f.area();
            ui::ui(app, f);
        }) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(event::poll(Duration::ZERO), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
                Ok(Event::Resize(_, _)) => {
                    // Next iteration redraws at the new size
                }
                Ok(_) => {}
                Err(e) => log::warn!("failed to read terminal event: {e}"),
            }
            continue;
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use film_stats_core::dashboard::Series;
    use film_stats_core::surface::Card;

    fn report(id: &'static str, title: &'static str, state: WidgetState) -> WidgetReport {
        WidgetReport {
            id,
            title,
            state,
            value: None,
            series: Vec::new(),
            cards: Vec::new(),
            notice: None,
            error: None,
        }
    }

    #[test]
    fn report_lists_values_series_and_cards() {
        let mut total = report("total-watched", "Total Films Watched", WidgetState::Rendered);
        total.value = Some("1,234".to_string());

        let mut genres = report("genre", "Films by Genre", WidgetState::Rendered);
        genres.series.push(Series {
            label: "Films".to_string(),
            points: vec![("Drama".to_string(), 12.0), ("Horror".to_string(), 4.0)],
        });

        let mut rewatched = report(
            "most-rewatched",
            "Most Rewatched Movies",
            WidgetState::Rendered,
        );
        rewatched.cards.push(Card {
            title: "Heat".to_string(),
            image_url: None,
            caption: "Rewatched 3 times".to_string(),
            link: None,
            tooltip: None,
        });

        let text = format_report(&[total, genres, rewatched]);
        assert!(text.contains("Total Films Watched: 1,234"));
        assert!(text.contains("- Drama: 12"));
        assert!(text.contains("- Heat | Rewatched 3 times"));
    }

    #[test]
    fn report_flags_failed_widgets() {
        let mut failed = report("top-actors", "Top Actors", WidgetState::Failed);
        failed.error = Some("Could not load Top Actors.".to_string());

        let text = format_report(&[failed]);
        assert!(text.contains("Top Actors:"));
        assert!(text.contains("! Could not load Top Actors."));
    }
}
