//! Platform-neutral core of the film statistics dashboard.
//!
//! Fetching, validation, the page model, widget rendering and the
//! fullscreen overlay all live here; the terminal and browser front ends
//! only supply an [`HttpTransport`] and draw the [`Surface`].

pub mod catalog;
pub mod chart;
pub mod client;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod model;
pub mod overlay;
pub mod style;
pub mod surface;
pub mod widget;

#[cfg(test)]
mod test_support;

pub use chart::{ChartConfig, ChartEngine, ChartError, ChartId, ChartInstance, ChartKind};
pub use client::{ApiClient, HttpTransport, RawResponse};
pub use dashboard::{Dashboard, WidgetReport};
pub use endpoints::Endpoint;
pub use error::{FetchError, WidgetError};
pub use overlay::{CloseTrigger, FullscreenOrchestrator, OpenOutcome, OverlayPhase, OverlayState};
pub use style::{ChartDefaults, Rgba, StyleError, StyleOverrides};
pub use surface::{Surface, WidgetHandle};
pub use widget::{RenderOutcome, WidgetSpec, WidgetState};
