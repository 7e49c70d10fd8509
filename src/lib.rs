//! Movie recommendation dashboard: trending movie cards, a search and
//! filter bar, and a statistics panel over mock or file-backed data.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
pub mod util;
