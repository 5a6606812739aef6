//! Chat widget, WASM entry point.
//!
//! This crate is the composition root. It reads the mount contract from the
//! host canvas, resolves the backend once, and hands the HTTP adapter to the
//! egui app.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use widget_types::config::{MountOptions, WidgetConfig, ATTR_WIDGET_CONFIG};

const CANVAS_ID: &str = "chat_widget_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget starting...");

    let canvas = find_canvas(CANVAS_ID)?;
    let config = read_config(&canvas);
    let api = config
        .api
        .unwrap_or_else(widget_platform::environment::detect_api_config);
    let mount = config.mount;

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::WidgetApp::new(cc, api, mount)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}

fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{id}'")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))
}

/// A malformed JSON config falls back to the individual attributes.
fn read_config(canvas: &web_sys::HtmlCanvasElement) -> WidgetConfig {
    let attr = |name: &str| canvas.get_attribute(name);
    WidgetConfig::from_attributes(attr).unwrap_or_else(|e| {
        log::warn!("Ignoring {}: {}", ATTR_WIDGET_CONFIG, e);
        WidgetConfig {
            api: None,
            mount: MountOptions::from_attributes(attr),
        }
    })
}
