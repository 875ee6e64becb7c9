//! Fullscreen view orchestration.
//!
//! The overlay is a single modal surface with two regions: a chart surface
//! for enlarged charts and a content host for enlarged card grids. Opening
//! re-fetches the widget's data at the larger size; closing tears the
//! regions down. Both bump the overlay token, so a response that arrives
//! after the overlay moved on is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::catalog::{self, Expansion, OVERLAY_CHART_SURFACE, OVERLAY_CONTENT_HOST, OVERLAY_ERROR};
use crate::client::ApiClient;
use crate::error::WidgetError;
use crate::model::ChartPayload;
use crate::surface::Surface;
use crate::widget::{self, Fetched, WidgetSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Chart,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// A click on the backdrop, not on the overlay content.
    Backdrop,
    EscapeKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    phase: OverlayPhase,
    kind: Option<OverlayKind>,
    source_widget: Option<String>,
    token: u64,
}

impl OverlayState {
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub const fn kind(&self) -> Option<OverlayKind> {
        self.kind
    }

    pub fn source_widget(&self) -> Option<&str> {
        self.source_widget.as_deref()
    }

    pub const fn token(&self) -> u64 {
        self.token
    }

    pub fn is_closed(&self) -> bool {
        self.phase == OverlayPhase::Closed
    }

    fn begin(&mut self, widget_id: &str, kind: OverlayKind) -> u64 {
        self.token += 1;
        self.phase = OverlayPhase::Opening;
        self.kind = Some(kind);
        self.source_widget = Some(widget_id.to_string());
        self.token
    }

    fn reset(&mut self) {
        self.token += 1;
        self.phase = OverlayPhase::Closed;
        self.kind = None;
        self.source_widget = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The overlay is open but shows an inline error instead of content.
    Failed(WidgetError),
    /// Closed or re-opened while the enlarged data was in flight.
    Discarded,
    UnknownWidget,
}

#[derive(Debug, Clone)]
pub struct FullscreenOrchestrator {
    client: ApiClient,
    surface: Rc<RefCell<Surface>>,
}

impl FullscreenOrchestrator {
    pub const fn new(client: ApiClient, surface: Rc<RefCell<Surface>>) -> Self {
        Self { client, surface }
    }

    pub async fn open(&self, widget_id: &str) -> OpenOutcome {
        {
            let mut page = self.surface.borrow_mut();
            if !page.overlay().is_closed() {
                close_overlay(&mut page);
            }
        }

        let Some(expansion) = catalog::expansion(widget_id) else {
            log::warn!("no fullscreen view for widget '{widget_id}'");
            return OpenOutcome::UnknownWidget;
        };

        match expansion {
            Expansion::Chart {
                source_container,
                endpoint,
                limit,
            } => {
                let (token, template) = {
                    let mut page = self.surface.borrow_mut();
                    let token = page.overlay_mut().begin(widget_id, OverlayKind::Chart);
                    let template = page
                        .chart_in(source_container)
                        .map(|chart| chart.config.clone());
                    (token, template)
                };
                log::info!("opening fullscreen chart for {widget_id}");

                let Some(template) = template else {
                    let error = WidgetError::Dom(format!(
                        "No chart on '{source_container}' to enlarge"
                    ));
                    let mut page = self.surface.borrow_mut();
                    return finish(&mut page, token, widget_id, Err(error));
                };

                let fetched = self
                    .client
                    .fetch_json::<ChartPayload>(endpoint, limit)
                    .await
                    .map_err(WidgetError::from)
                    .and_then(|payload| {
                        payload.validate().map_err(WidgetError::Shape)?;
                        Ok(payload)
                    });

                let mut page = self.surface.borrow_mut();
                let result = fetched.and_then(|payload| {
                    if page.overlay().token() != token {
                        return Ok(());
                    }
                    let config = template.with_data(payload).enlarged();
                    page.install_chart(OVERLAY_CHART_SURFACE, config).map(|_| ())
                });
                finish(&mut page, token, widget_id, result)
            }
            Expansion::List(list) => {
                let token = self
                    .surface
                    .borrow_mut()
                    .overlay_mut()
                    .begin(widget_id, OverlayKind::List);
                log::info!("opening fullscreen list for {widget_id}");

                let fetched = widget::fetch_cards(&self.client, &list, list.limit).await;

                let mut page = self.surface.borrow_mut();
                let result = fetched.and_then(|grid| {
                    if page.overlay().token() != token {
                        return Ok(());
                    }
                    let spec = WidgetSpec::List(list);
                    widget::install_content(&mut page, &spec, Fetched::Cards(grid))
                });
                finish(&mut page, token, widget_id, result)
            }
        }
    }

    /// Tear the overlay down. Safe to call in any phase.
    pub fn close(&self) {
        close_overlay(&mut self.surface.borrow_mut());
    }

    pub fn handle_trigger(&self, trigger: CloseTrigger) {
        log::debug!("overlay close requested by {trigger:?}");
        self.close();
    }

    pub fn state(&self) -> OverlayState {
        self.surface.borrow().overlay().clone()
    }
}

/// Reveal the overlay with either the content or an inline error.
fn finish(
    page: &mut Surface,
    token: u64,
    widget_id: &str,
    result: Result<(), WidgetError>,
) -> OpenOutcome {
    if page.overlay().token() != token {
        log::debug!("discarding fullscreen response for {widget_id} (token {token})");
        return OpenOutcome::Discarded;
    }

    let outcome = match result {
        Ok(()) => {
            page.hide_error(OVERLAY_ERROR);
            OpenOutcome::Opened
        }
        Err(error) => {
            page.release(OVERLAY_CHART_SURFACE);
            page.release(OVERLAY_CONTENT_HOST);
            page.show_error(OVERLAY_ERROR, &error.user_message("the fullscreen view"));
            log::error!("fullscreen view for {widget_id} failed: {error}");
            OpenOutcome::Failed(error)
        }
    };

    page.set_overlay_visible(true);
    page.overlay_mut().phase = OverlayPhase::Open;
    outcome
}

fn close_overlay(page: &mut Surface) {
    let was_open = !page.overlay().is_closed();
    page.release(OVERLAY_CHART_SURFACE);
    page.release(OVERLAY_CONTENT_HOST);
    page.hide_error(OVERLAY_ERROR);
    page.set_overlay_visible(false);
    page.overlay_mut().reset();
    if was_open {
        log::info!("fullscreen view closed");
    }
}
