//! User actions that start asynchronous work.
//!
//! Each one spawns onto the current `LocalSet`; the dashboard state is shared
//! through `Rc<RefCell<_>>`, so the tasks report back simply by updating the
//! surface the next frame draws.

use film_stats_core::{CloseTrigger, OpenOutcome, RenderOutcome};
use tokio::task::spawn_local;

use crate::app::App;

impl App {
    pub fn refresh_all(&mut self) {
        for task in self.dashboard.render_tasks() {
            spawn_local(task);
        }
        self.status_message = "Refreshing all widgets...".to_string();
    }

    pub fn refresh_selected(&mut self) {
        let Some(spec) = self.selected().cloned() else {
            return;
        };
        let task = self.dashboard.render_task(&spec);
        self.status_message = format!("Refreshing {}...", spec.title());
        spawn_local(async move {
            if let RenderOutcome::Failed(error) = task.await {
                log::warn!("refresh of {} failed: {error}", spec.id());
            }
        });
    }

    pub fn expand_selected(&mut self) {
        let Some(spec) = self.selected().cloned() else {
            return;
        };
        let dashboard = self.dashboard.clone();
        self.status_message = format!("Opening {} fullscreen...", spec.title());
        spawn_local(async move {
            if let OpenOutcome::Failed(error) = dashboard.fullscreen().open(spec.id()).await {
                log::warn!("fullscreen view of {} failed: {error}", spec.id());
            }
        });
    }

    pub fn close_overlay(&mut self, trigger: CloseTrigger) {
        if !self.overlay_active() {
            return;
        }
        self.dashboard.fullscreen().handle_trigger(trigger);
        self.status_message.clear();
    }
}
