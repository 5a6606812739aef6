use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::Decode(e.to_string())
    }
}
