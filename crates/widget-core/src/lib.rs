//! Chat widget core: session reducer, exchange protocol and port traits.
//! No platform dependencies: everything here runs natively under `cargo test`.

pub mod event_bus;
pub mod exchange;
pub mod ports;
pub mod session;
