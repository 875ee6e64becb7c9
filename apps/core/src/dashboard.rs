//! Dashboard controller: one client, one page, one overlay.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;
use serde::Serialize;

use crate::catalog;
use crate::client::ApiClient;
use crate::overlay::FullscreenOrchestrator;
use crate::style::{StyleError, StyleOverrides};
use crate::surface::{Card, Notice, Surface, WidgetHandle};
use crate::widget::{self, RenderOutcome, WidgetSpec, WidgetState};

#[derive(Debug, Clone)]
pub struct Dashboard {
    client: ApiClient,
    surface: Rc<RefCell<Surface>>,
    widgets: Rc<[WidgetSpec]>,
    fullscreen: FullscreenOrchestrator,
}

impl Dashboard {
    /// Build the page and merge `theme` into the chart defaults before any
    /// chart exists.
    pub fn new(client: ApiClient, theme: &StyleOverrides) -> Result<Self, StyleError> {
        let mut page = catalog::page();
        page.charts_mut().apply_defaults(theme)?;

        let surface = Rc::new(RefCell::new(page));
        Ok(Self {
            fullscreen: FullscreenOrchestrator::new(client.clone(), surface.clone()),
            client,
            surface,
            widgets: catalog::widgets().into(),
        })
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub const fn surface(&self) -> &Rc<RefCell<Surface>> {
        &self.surface
    }

    pub fn widgets(&self) -> &[WidgetSpec] {
        &self.widgets
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetSpec> {
        self.widgets.iter().find(|spec| spec.id() == id)
    }

    pub const fn fullscreen(&self) -> &FullscreenOrchestrator {
        &self.fullscreen
    }

    /// Layer another theme on top. Fails once a chart has been created.
    pub fn apply_defaults(&self, theme: &StyleOverrides) -> Result<(), StyleError> {
        self.surface.borrow_mut().charts_mut().apply_defaults(theme)
    }

    /// A self-contained render of one widget, ready to be spawned.
    pub fn render_task(&self, spec: &WidgetSpec) -> LocalBoxFuture<'static, RenderOutcome> {
        let client = self.client.clone();
        let surface = self.surface.clone();
        let spec = spec.clone();
        async move { widget::render(&client, &surface, &spec).await }.boxed_local()
    }

    pub fn render_tasks(&self) -> Vec<LocalBoxFuture<'static, RenderOutcome>> {
        self.widgets.iter().map(|spec| self.render_task(spec)).collect()
    }

    /// Re-render one widget by id; `None` for an unknown id.
    pub async fn refresh(&self, id: &str) -> Option<RenderOutcome> {
        let spec = self.widget(id)?.clone();
        Some(widget::render(&self.client, &self.surface, &spec).await)
    }

    /// Render every widget concurrently and wait for all of them.
    pub async fn load_all(&self) -> Vec<RenderOutcome> {
        log::info!("loading {} widgets from {}", self.widgets.len(), self.client.base_url());
        join_all(self.render_tasks()).await
    }

    pub fn state_of(&self, id: &str) -> WidgetState {
        self.widget(id)
            .map(|spec| self.surface.borrow().state(spec.container()))
            .unwrap_or_default()
    }

    /// What every widget currently shows, in page order.
    pub fn snapshot(&self) -> Vec<WidgetReport> {
        let page = self.surface.borrow();
        self.widgets
            .iter()
            .map(|spec| WidgetReport::capture(&page, spec))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetReport {
    pub id: &'static str,
    pub title: &'static str,
    pub state: WidgetState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WidgetReport {
    fn capture(page: &Surface, spec: &WidgetSpec) -> Self {
        let container = spec.container();
        let mut report = Self {
            id: spec.id(),
            title: spec.title(),
            state: page.state(container),
            value: None,
            series: Vec::new(),
            cards: Vec::new(),
            notice: page.notice(container).cloned(),
            error: spec
                .error_element()
                .and_then(|element| page.error_text(element))
                .map(ToString::to_string),
        };

        match page.handle(container) {
            Some(WidgetHandle::Chart(id)) => {
                if let Some(chart) = page.charts().get(*id) {
                    let data = &chart.config.data;
                    report.series = data
                        .datasets
                        .iter()
                        .map(|dataset| Series {
                            label: dataset.label.clone(),
                            points: data
                                .labels
                                .iter()
                                .cloned()
                                .zip(dataset.data.iter().copied())
                                .collect(),
                        })
                        .collect();
                }
            }
            Some(WidgetHandle::Cards(grid)) => report.cards.clone_from(&grid.cards),
            Some(WidgetHandle::Text(text)) => report.value = Some(text.clone()),
            None => {}
        }
        report
    }
}
