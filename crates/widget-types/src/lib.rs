pub mod message;
pub mod channel;
pub mod config;
pub mod error;
pub mod event;
pub mod session;
pub mod seminar;

#[cfg(test)]
mod tests;

pub use error::WidgetError;
pub type Result<T> = std::result::Result<T, WidgetError>;
