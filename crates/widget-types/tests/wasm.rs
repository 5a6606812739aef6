//! WASM-target tests for widget-types.
//!
//! Covers the parts that touch the JS environment (clock, RNG) under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use widget_types::message::*;
use widget_types::channel::*;
use widget_types::config::*;
use widget_types::session::*;

#[wasm_bindgen_test]
fn session_id_uses_js_clock_and_rng() {
    let a = generate_session_id("widget");
    let b = generate_session_id("widget");
    assert!(a.starts_with("widget_"));
    assert_ne!(a, b);
}

#[wasm_bindgen_test]
fn stamped_message_has_timestamp() {
    let msg = ChatMessage::agent(AGENT_SENDER, "hello").stamped();
    assert!(msg.timestamp.is_some());
}

#[wasm_bindgen_test]
fn channel_round_trips_through_json() {
    let json = serde_json::to_string(&Channel::NeuralApps).unwrap();
    assert_eq!(json, r#""neuralapps""#);
    let back: Channel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Channel::NeuralApps);
}

#[wasm_bindgen_test]
fn mount_options_from_empty_json() {
    let opts: MountOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, MountOptions::default());
}

#[wasm_bindgen_test]
fn api_config_localhost() {
    let api = ApiConfig::for_hostname("localhost");
    assert_eq!(api.endpoint("/api/chat"), "http://localhost:8000/api/chat");
}
