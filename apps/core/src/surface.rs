//! The page model every widget renders into.
//!
//! Containers hold at most one [`WidgetHandle`]. Error elements sit beside
//! them. Request tokens and widget states are tracked per container id, and
//! the overlay (its view flags and its [`OverlayState`]) lives here as well
//! so one `RefCell` guards the whole page.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::chart::{ChartConfig, ChartEngine, ChartError, ChartId, ChartInstance};
use crate::error::WidgetError;
use crate::overlay::OverlayState;
use crate::widget::WidgetState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub image_url: Option<String>,
    pub caption: String,
    pub link: Option<String>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardGrid {
    pub header: Option<String>,
    pub cards: Vec<Card>,
}

/// Live rendering resource of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetHandle {
    Chart(ChartId),
    Cards(CardGrid),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    Muted,
    Error,
}

/// A message drawn inside a container in place of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Muted,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: NoticeTone::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub handle: Option<WidgetHandle>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ErrorElement {
    visible: bool,
    text: String,
}

#[derive(Debug, Default)]
pub struct Surface {
    slots: BTreeMap<String, Slot>,
    errors: BTreeMap<String, ErrorElement>,
    tokens: HashMap<String, u64>,
    states: HashMap<String, WidgetState>,
    charts: ChartEngine,
    overlay: OverlayState,
    overlay_visible: bool,
    scroll_locked: bool,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self, id: &str) {
        self.slots.entry(id.to_string()).or_default();
    }

    pub fn add_error_element(&mut self, id: &str) {
        self.errors.entry(id.to_string()).or_default();
    }

    pub fn contains(&self, container: &str) -> bool {
        self.slots.contains_key(container)
    }

    pub fn has_error_element(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }

    pub fn slot(&self, container: &str) -> Option<&Slot> {
        self.slots.get(container)
    }

    pub fn handle(&self, container: &str) -> Option<&WidgetHandle> {
        self.slots.get(container).and_then(|slot| slot.handle.as_ref())
    }

    pub fn notice(&self, container: &str) -> Option<&Notice> {
        self.slots.get(container).and_then(|slot| slot.notice.as_ref())
    }

    /// Destroy whatever the container holds. Returns `true` if a handle was
    /// released.
    pub fn release(&mut self, container: &str) -> bool {
        let Some(slot) = self.slots.get_mut(container) else {
            return false;
        };
        slot.notice = None;
        match slot.handle.take() {
            Some(WidgetHandle::Chart(id)) => {
                self.charts.destroy(id);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Release the prior handle and store a new one.
    pub fn install(&mut self, container: &str, handle: WidgetHandle) -> Result<(), WidgetError> {
        if !self.contains(container) {
            return Err(WidgetError::container_not_found(container));
        }
        self.release(container);
        if let Some(slot) = self.slots.get_mut(container) {
            slot.handle = Some(handle);
        }
        Ok(())
    }

    pub fn install_chart(
        &mut self,
        container: &str,
        config: ChartConfig,
    ) -> Result<ChartId, WidgetError> {
        if !self.contains(container) {
            return Err(WidgetError::container_not_found(container));
        }
        self.release(container);
        let id = self.charts.create(container, config)?;
        if let Some(slot) = self.slots.get_mut(container) {
            slot.handle = Some(WidgetHandle::Chart(id));
        }
        Ok(id)
    }

    pub fn set_notice(&mut self, container: &str, notice: Notice) {
        if let Some(slot) = self.slots.get_mut(container) {
            slot.notice = Some(notice);
        }
    }

    /// Returns `false` when the element does not exist.
    pub fn show_error(&mut self, element: &str, text: &str) -> bool {
        let Some(error) = self.errors.get_mut(element) else {
            return false;
        };
        error.visible = true;
        error.text = text.to_string();
        true
    }

    pub fn hide_error(&mut self, element: &str) {
        if let Some(error) = self.errors.get_mut(element) {
            error.visible = false;
            error.text.clear();
        }
    }

    /// Text of a visible error element.
    pub fn error_text(&self, element: &str) -> Option<&str> {
        self.errors
            .get(element)
            .filter(|error| error.visible)
            .map(|error| error.text.as_str())
    }

    /// Issue the next request token for a container and mark it loading.
    pub fn begin_request(&mut self, container: &str) -> u64 {
        let token = self.tokens.entry(container.to_string()).or_insert(0);
        *token += 1;
        let issued = *token;
        self.states.insert(container.to_string(), WidgetState::Loading);
        issued
    }

    pub fn is_current(&self, container: &str, token: u64) -> bool {
        self.tokens.get(container) == Some(&token)
    }

    pub fn state(&self, container: &str) -> WidgetState {
        self.states.get(container).copied().unwrap_or_default()
    }

    pub fn set_state(&mut self, container: &str, state: WidgetState) {
        self.states.insert(container.to_string(), state);
    }

    pub const fn charts(&self) -> &ChartEngine {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut ChartEngine {
        &mut self.charts
    }

    pub fn chart_in(&self, container: &str) -> Option<&ChartInstance> {
        self.charts.get_by_container(container)
    }

    pub const fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut OverlayState {
        &mut self.overlay
    }

    pub const fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub const fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Showing the overlay locks page scroll; hiding it unlocks.
    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        self.scroll_locked = visible;
    }

    /// Rough count of drawn nodes in a container: one per chart, text,
    /// notice, header and card.
    pub fn node_count(&self, container: &str) -> usize {
        let Some(slot) = self.slots.get(container) else {
            return 0;
        };
        let content = match &slot.handle {
            Some(WidgetHandle::Cards(grid)) => {
                usize::from(grid.header.is_some()) + grid.cards.len()
            }
            Some(_) => 1,
            None => 0,
        };
        content + usize::from(slot.notice.is_some())
    }

    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

impl From<ChartError> for WidgetError {
    fn from(error: ChartError) -> Self {
        Self::Dom(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, ChartOptions};
    use crate::model::ChartPayload;

    fn config() -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartPayload {
                labels: Vec::new(),
                datasets: Vec::new(),
            },
            options: ChartOptions::default(),
        }
    }

    fn page() -> Surface {
        let mut surface = Surface::new();
        surface.add_container("chart");
        surface.add_error_element("chartErrorMessage");
        surface
    }

    #[test]
    fn installing_a_chart_destroys_the_previous_one() -> Result<(), WidgetError> {
        let mut surface = page();
        let first = surface.install_chart("chart", config())?;
        let second = surface.install_chart("chart", config())?;

        assert_ne!(first, second);
        assert!(surface.charts().get(first).is_none());
        assert_eq!(surface.charts().live_count(), 1);
        assert_eq!(surface.handle("chart"), Some(&WidgetHandle::Chart(second)));
        Ok(())
    }

    #[test]
    fn replacing_a_chart_with_cards_releases_the_chart() -> Result<(), WidgetError> {
        let mut surface = page();
        surface.install_chart("chart", config())?;
        surface.install("chart", WidgetHandle::Cards(CardGrid::default()))?;
        assert_eq!(surface.charts().live_count(), 0);
        Ok(())
    }

    #[test]
    fn missing_container_is_a_dom_error() {
        let mut surface = page();
        let result = surface.install("nope", WidgetHandle::Text("1".to_string()));
        assert_eq!(result, Err(WidgetError::container_not_found("nope")));
    }

    #[test]
    fn error_elements_toggle() {
        let mut surface = page();
        assert!(surface.show_error("chartErrorMessage", "boom"));
        assert_eq!(surface.error_text("chartErrorMessage"), Some("boom"));
        surface.hide_error("chartErrorMessage");
        assert_eq!(surface.error_text("chartErrorMessage"), None);
        assert!(!surface.show_error("missing", "boom"));
    }

    #[test]
    fn tokens_are_monotonic_per_container() {
        let mut surface = page();
        let first = surface.begin_request("chart");
        let second = surface.begin_request("chart");
        let other = surface.begin_request("elsewhere");

        assert!(second > first);
        assert!(!surface.is_current("chart", first));
        assert!(surface.is_current("chart", second));
        assert!(surface.is_current("elsewhere", other));
        assert_eq!(surface.state("chart"), WidgetState::Loading);
    }

    #[test]
    fn node_count_covers_header_cards_and_notice() -> Result<(), WidgetError> {
        let mut surface = page();
        let card = Card {
            title: "Heat".to_string(),
            image_url: None,
            caption: "2 rewatches".to_string(),
            link: None,
            tooltip: None,
        };
        surface.install(
            "chart",
            WidgetHandle::Cards(CardGrid {
                header: Some("Most Rewatched".to_string()),
                cards: vec![card.clone(), card],
            }),
        )?;
        assert_eq!(surface.node_count("chart"), 3);

        surface.release("chart");
        surface.set_notice("chart", Notice::muted("No movies found."));
        assert_eq!(surface.node_count("chart"), 1);
        surface.release("chart");
        assert_eq!(surface.node_count("chart"), 0);
        Ok(())
    }
}
