//! POV-Ray scene emission.
//!
//! A [`SceneSession`] wraps an output sink. Each call to
//! [`SceneSession::emit_scene`] appends one molecule in this order:
//!
//! 1. the scene header (first molecule only): display flags, light,
//!    background, camera, optional decorations, include and version
//!    directives,
//! 2. atom position and object declarations,
//! 3. bond declarations for ball-and-stick and capped-sticks styles,
//! 4. atom and bond unions,
//! 5. the molecule object with a commented bounding box,
//! 6. the recentering vector and the molecule reference.
//!
//! The display flags (`BAS`, `SPF`, `CST`, `TRANS`) are resolved by POV-Ray
//! when rendering, not here, so one file can be re-rendered in another style
//! by editing a single declaration.

mod atoms;
mod bonds;
mod compose;
mod header;

pub mod error;
pub mod number;
pub mod options;
pub mod session;

pub use bonds::color_name;
pub use error::Error;
pub use header::INCLUDE_FILE;
pub use options::{ModelStyle, ParseModelStyleError, RenderOptions, default_options, load_options};
pub use session::SceneSession;

use crate::model::molecule::Molecule;
use std::io::Write;

/// Appends `molecule` to `session`. See [`SceneSession::emit_scene`].
pub fn emit_scene<W: Write>(
    molecule: &Molecule,
    options: &RenderOptions,
    session: &mut SceneSession<W>,
) -> Result<(), Error> {
    session.emit_scene(molecule, options)
}
