//! Browser platform adapters for the chat widget.

pub mod environment;
pub mod http;
