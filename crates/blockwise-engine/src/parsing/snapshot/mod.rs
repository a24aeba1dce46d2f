//! Normalized parse views and invariant checks for tests.

pub mod invariants;
pub mod normalize;

pub use invariants::check_invariants;
pub use normalize::{BlockSnap, normalize};
