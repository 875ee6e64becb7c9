//! Error types shared by the data client, the renderers and the overlay.

use thiserror::Error;

/// Failure of a single request against the statistics API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a status outside 200-299.
    #[error("HTTP error with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response.
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The body was not JSON, or lacked required keys.
    #[error("Invalid response payload: {issue}")]
    Decode { issue: String },
}

impl FetchError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Shape,
    Dom,
}

/// Everything that can stop a widget from rendering.
///
/// All variants are handled the same way at the boundary: logged and
/// written into the widget's error element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Network(FetchError),

    #[error("Unexpected data: {0}")]
    Shape(String),

    #[error("{0}")]
    Dom(String),
}

impl WidgetError {
    pub fn container_not_found(container: &str) -> Self {
        Self::Dom(format!("Container '{container}' not found"))
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Shape(_) => ErrorKind::Shape,
            Self::Dom(_) => ErrorKind::Dom,
        }
    }

    /// Text shown next to the widget, e.g. `Could not load Top Actors: ...`.
    pub fn user_message(&self, title: &str) -> String {
        format!("Could not load {title}: {self}")
    }
}

impl From<FetchError> for WidgetError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Decode { issue } => Self::Shape(issue),
            other => Self::Network(other),
        }
    }
}
