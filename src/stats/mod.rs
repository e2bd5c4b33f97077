//! Summary statistics derived from a [`Series`](crate::models::Series).

pub mod change;
pub mod range;

pub use change::compute_change;
pub use range::{DEFAULT_RANGE_WINDOW, compute_range_summary};
