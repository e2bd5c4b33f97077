//! Reusable UI components shared across pages.

pub mod quote;
pub mod status_bar;
pub mod tab_bar;
