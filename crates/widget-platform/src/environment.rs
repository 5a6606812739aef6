//! Backend selection from the hosting page.
//! Called once by the composition root; the result is passed down explicitly.

use widget_types::{Result, WidgetError, config::ApiConfig};

/// Hostname of the page the widget is embedded in.
/// Panics outside a browser window (gloo-utils).
pub fn page_hostname() -> Result<String> {
    gloo_utils::window()
        .location()
        .hostname()
        .map_err(|e| WidgetError::JsInterop(format!("{:?}", e)))
}

pub fn detect_api_config() -> ApiConfig {
    match page_hostname() {
        Ok(host) => {
            let api = ApiConfig::for_hostname(&host);
            log::info!("API base URL: {} (host {})", api.base_url, host);
            api
        }
        Err(e) => {
            log::warn!("Could not read page hostname ({}), using hosted API", e);
            ApiConfig::default()
        }
    }
}
