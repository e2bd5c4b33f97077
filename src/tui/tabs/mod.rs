//! Page layouts.

pub mod chart;
pub mod overview;
