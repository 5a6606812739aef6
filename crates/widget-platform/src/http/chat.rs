use async_trait::async_trait;

use widget_core::ports::{ChatPort, ChatReply, ChatRequest, CHAT_PATH};
use widget_types::{Result, config::ApiConfig};

use super::{post_json, with_timeout};

/// `POST {base_url}/api/chat` over browser fetch.
pub struct HttpChatClient {
    url: String,
    timeout_ms: u64,
}

impl HttpChatClient {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            url: api.endpoint(CHAT_PATH),
            timeout_ms: api.request_timeout_ms,
        }
    }
}

#[async_trait(?Send)]
impl ChatPort for HttpChatClient {
    async fn send(&self, req: ChatRequest) -> Result<ChatReply> {
        with_timeout(self.timeout_ms, post_json(&self.url, &req)).await
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
