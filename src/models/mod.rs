//! Shared models for synthetic market data.
//!
//! [`Bar`] and [`Series`] are produced by the generator; [`RangeSummary`]
//! and [`ChangeResult`] are derived from a series on demand and never cached.

pub mod bar;
pub mod summary;

pub use bar::{Bar, Series};
pub use summary::{ChangeResult, RangeSummary};
