//! Pure geometric helpers used by the scene emitter.
//!
//! - [`bounds`] – Origin-seeded axis-aligned bounding box.
//! - [`centroid`] – Arithmetic mean of atom positions.
//! - [`bond`] – Bond length and the two rotation angles that align the
//!   canonical x-axis bond primitive with an arbitrary bond direction.

pub mod bond;
pub mod bounds;
pub mod centroid;

/// Magnitudes below this are treated as zero when deciding whether a scale or
/// rotation statement is needed.
pub const EPSILON: f64 = 1e-4;
