//! A pure Rust library for turning 3D molecular structures into POV-Ray scene
//! descriptions that ray-trace as ball-and-stick, space-filling or
//! capped-sticks models.
//!
//! # Features
//!
//! - **Three model styles in one file** - Every style's geometry is written,
//!   each behind a `#declare`d flag, so switching style only edits the header
//! - **Bond placement** - Bonds are instances of a canonical x-axis primitive
//!   placed by a scale, two rotations and a translation
//! - **Scene decorations** - Optional sky sphere, checkerboard floor, mirror
//!   sphere and transparent atoms
//! - **Multi-molecule streams** - A [`SceneSession`] appends molecules to one
//!   output, each under its own `mol_<n>` identifier prefix
//!
//! # Quick Start
//!
//! ```
//! use pov_forge::{Atom, Bond, BondOrder, Element, Molecule};
//! use pov_forge::{ModelStyle, RenderOptions, SceneSession, SceneError};
//!
//! // Water, H-O-H
//! let mut water = Molecule::with_title("water");
//! water.atoms.push(Atom::new(Element::O, [0.000, 0.000, 0.000]));
//! water.atoms.push(Atom::new(Element::H, [0.957, 0.000, 0.000]));
//! water.atoms.push(Atom::new(Element::H, [-0.240, 0.927, 0.000]));
//! water.bonds.push(Bond::new(0, 1, BondOrder::Single));
//! water.bonds.push(Bond::new(0, 2, BondOrder::Single));
//!
//! let options = RenderOptions::new(ModelStyle::CappedSticks).sky(true);
//! let mut session = SceneSession::new(Vec::new());
//! session.emit_scene(&water, &options)?;
//!
//! let scene = String::from_utf8(session.into_inner()).unwrap();
//! assert!(scene.contains("#declare CST = true;"));
//! assert!(scene.contains("#declare mol_0_atoms = merge {"));
//! assert!(scene.ends_with("mol_0\n"));
//! # Ok::<(), SceneError>(())
//! ```
//!
//! The generated file includes `babel_povray3.inc`, which must define
//! `Atom_<Element>`, `bond_<order>` and `Color_<type>` objects.
//!
//! # Module Organization
//!
//! - [`geometry`] - Bounding box, centroid and bond orientation math
//! - [`SceneSession`] - Output stream and molecule sequence numbering
//! - [`RenderOptions`] - Model style and scene decoration switches
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`Molecule`] - Titled set of atoms and bonds
//! - [`Atom`] - Element, Cartesian coordinates and optional type label
//! - [`Bond`] - Directed bond between two atoms with bond order
//! - [`Element`] - Chemical element (H through Og)
//! - [`BondOrder`] - Bond order (Single, Double, Triple, Quadruple, Aromatic)
//!
//! ## Configuration
//!
//! - [`ModelStyle`] - Ball-and-stick, space-fill or capped sticks
//! - [`load_options`] - Render options from TOML, or the embedded defaults

mod model;
mod scene;

pub mod geometry;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::types::{BondOrder, Element, ParseBondOrderError, ParseElementError};

pub use geometry::bond::BondGeometry;
pub use geometry::bounds::{BoundingBox, MAX_ATOM_RADIUS};
pub use geometry::centroid::centroid;

pub use scene::number::{Real, Vector};
pub use scene::{
    INCLUDE_FILE, ModelStyle, ParseModelStyleError, RenderOptions, SceneSession, color_name,
    default_options, emit_scene, load_options,
};

pub use scene::Error as SceneError;
