use film_stats_core::{Dashboard, OverlayPhase, WidgetSpec};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// Panels are laid out three to a row.
pub const PANEL_COLUMNS: usize = 3;

const SPINNER_STEP: Duration = Duration::from_millis(100);

pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub selected_panel: usize,
    pub show_help: bool,
    pub status_message: String,
    pub throbber: ThrobberState,
    pub last_frame: Instant,
    spinner_elapsed: Duration,
    /// Frame area of the last draw, used to hit-test mouse clicks.
    pub viewport: Rect,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            running: true,
            dashboard,
            selected_panel: 0,
            show_help: false,
            status_message: String::new(),
            throbber: ThrobberState::default(),
            last_frame: Instant::now(),
            spinner_elapsed: Duration::ZERO,
            viewport: Rect::default(),
        }
    }

    /// Advance the loading spinner.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.spinner_elapsed += now.duration_since(self.last_frame);
        self.last_frame = now;

        while self.spinner_elapsed >= SPINNER_STEP {
            self.throbber.calc_next();
            self.spinner_elapsed -= SPINNER_STEP;
        }
    }

    /// Chart and list widgets, in grid order. Stat tiles are not selectable.
    pub fn panels(&self) -> Vec<&WidgetSpec> {
        self.dashboard
            .widgets()
            .iter()
            .filter(|spec| spec.is_expandable())
            .collect()
    }

    pub fn stat_tiles(&self) -> Vec<&WidgetSpec> {
        self.dashboard
            .widgets()
            .iter()
            .filter(|spec| !spec.is_expandable())
            .collect()
    }

    pub fn selected(&self) -> Option<&WidgetSpec> {
        self.panels().get(self.selected_panel).copied()
    }

    /// Move the selection by `delta` panels, wrapping around.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.panels().len();
        if count == 0 {
            return;
        }
        let count = count as isize;
        self.selected_panel = (self.selected_panel as isize + delta).rem_euclid(count) as usize;
    }

    pub fn overlay_phase(&self) -> OverlayPhase {
        self.dashboard.surface().borrow().overlay().phase()
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_phase() != OverlayPhase::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::offline_app;

    #[test]
    fn only_charts_and_lists_are_panels() {
        let app = offline_app();
        assert_eq!(app.panels().len(), 6);
        assert_eq!(app.stat_tiles().len(), 4);
        assert_eq!(app.selected().map(|spec| spec.id()), Some("release-year"));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = offline_app();
        app.move_selection(-1);
        assert_eq!(app.selected_panel, 5);
        app.move_selection(PANEL_COLUMNS as isize);
        assert_eq!(app.selected_panel, 2);
        app.move_selection(1);
        assert_eq!(app.selected_panel, 3);
    }
}
