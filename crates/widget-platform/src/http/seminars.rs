//! Seminar listing/registration client. Used by the seminar page, not by
//! the chat widget itself.

use async_trait::async_trait;
use serde::Deserialize;

use widget_core::ports::{SeminarPort, SEMINARS_REGISTER_PATH, SEMINARS_UPCOMING_PATH};
use widget_types::{
    Result, WidgetError,
    config::ApiConfig,
    seminar::{RegistrationReceipt, SeminarList, SeminarRegistration},
};

use super::{get_json, post_json, with_timeout};

pub struct HttpSeminarClient {
    api: ApiConfig,
}

impl HttpSeminarClient {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    pub fn upcoming_url(&self, limit: u32) -> String {
        format!("{}?limit={}", self.api.endpoint(SEMINARS_UPCOMING_PATH), limit)
    }
}

#[async_trait(?Send)]
impl SeminarPort for HttpSeminarClient {
    async fn upcoming(&self, limit: u32) -> Result<SeminarList> {
        let url = self.upcoming_url(limit);
        with_timeout(self.api.request_timeout_ms, get_json(&url)).await
    }

    async fn register(&self, registration: &SeminarRegistration) -> Result<RegistrationReceipt> {
        let url = self.api.endpoint(SEMINARS_REGISTER_PATH);
        with_timeout(self.api.request_timeout_ms, post_json(&url, registration))
            .await
            .map_err(with_server_detail)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Pull FastAPI's `{"detail": "..."}` out of an error body, if present.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.detail)
}

fn with_server_detail(err: WidgetError) -> WidgetError {
    match err {
        WidgetError::Http { status, body } => WidgetError::Http {
            status,
            body: error_detail(&body).unwrap_or(body),
        },
        other => other,
    }
}
