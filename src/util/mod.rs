//! Pure helpers used by the views: display formatting, colour/label
//! classification, series statistics, API error messages and debouncing.

pub mod classify;
pub mod debounce;
pub mod error;
pub mod format;
pub mod stats;
