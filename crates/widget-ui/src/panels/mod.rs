pub mod channel_toggle;
pub mod chat;
