// UI module for the film stats dashboard
// Handles all UI rendering functions

pub mod dashboard;
pub mod overlay;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    dashboard::render_dashboard(app, f);

    if app.overlay_active() && !app.show_help {
        overlay::render_overlay(app, f);
    }
}
