pub mod card;
pub mod dashboard;
pub mod panels;
pub mod plot;
