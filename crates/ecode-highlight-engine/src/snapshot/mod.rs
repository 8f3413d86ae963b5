//! # Snapshot Testing Support
//!
//! Helpers for checking rendered documents in tests.
//!
//! - **`normalize`**: a stable, line-per-item text description of a
//!   [`Rendered`](crate::highlight::Rendered) for `insta` snapshots
//! - **`invariants`**: runtime checks that hold for every render (spans
//!   sorted and disjoint, markup fully escaped, stripped markup equal to the
//!   document)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::describe;
