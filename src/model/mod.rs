//! Molecular input model consumed by the scene emitter.
//!
//! - [`atom`] – Element, Cartesian position and optional type label.
//! - [`types`] – Periodic table elements and bond order classifications.
//! - [`molecule`] – Titled collection of atoms and directed bonds.

pub mod atom;
pub mod molecule;
pub mod types;
