pub mod panels;
pub mod presentation;
pub mod state;
pub mod theme;
