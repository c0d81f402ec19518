//! Bond declarations in the two stick styles.
//!
//! Both blocks are always written, each guarded by its style flag, so a scene
//! can be re-rendered as ball-and-stick or capped sticks by flipping the flag
//! declared in the header.

use super::number::Real;
use crate::geometry::bond::BondGeometry;
use crate::geometry::EPSILON;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule};
use log::trace;
use std::io::{self, Write};

/// Transform statements placing a bond primitive, in emission order.
struct Placement {
    scale: Option<f64>,
    z_rotation: Option<f64>,
    y_rotation: Option<f64>,
    anchor: usize,
}

impl Placement {
    fn write<W: Write>(&self, w: &mut W, indent: &str, prefix: &str) -> io::Result<()> {
        if let Some(s) = self.scale {
            writeln!(w, "{indent}scale <{},1.0000,1.0000>", Real(s))?;
        }
        if let Some(z) = self.z_rotation {
            writeln!(w, "{indent}rotate <0.0000,0.0000,{}>", Real(z))?;
        }
        if let Some(y) = self.y_rotation {
            writeln!(w, "{indent}rotate <0.0000,{},0.0000>", Real(y))?;
        }
        writeln!(w, "{indent}translate {prefix}_pos_{}", self.anchor + 1)
    }
}

/// Writes the `#if (BAS)` and `#if (CST)` bond blocks, declaring
/// `<prefix>_bond<i>` for every bond index.
///
/// A bond whose endpoints are not in `molecule` fails with
/// [`io::ErrorKind::InvalidInput`]; the session rejects such molecules before
/// emission starts.
pub fn write_bonds<W: Write>(w: &mut W, molecule: &Molecule, prefix: &str) -> io::Result<()> {
    writeln!(w, "//Povray-description of bonds 1 - {}", molecule.bond_count())?;

    writeln!(w, "#if (BAS)")?;
    for (i, bond) in molecule.bonds.iter().enumerate() {
        let (begin, end) = endpoints(molecule, i, bond)?;
        write_ball_and_stick(w, prefix, i, bond, begin, end)?;
    }
    writeln!(w, "#end //(BAS-Bonds)")?;
    writeln!(w)?;

    writeln!(w, "#if (CST)")?;
    for (i, bond) in molecule.bonds.iter().enumerate() {
        let (begin, end) = endpoints(molecule, i, bond)?;
        write_capped_sticks(w, prefix, i, bond, begin, end)?;
    }
    writeln!(w, "#end // (CST-Bonds)")?;
    writeln!(w)?;

    Ok(())
}

fn endpoints<'a>(molecule: &'a Molecule, index: usize, bond: &Bond) -> io::Result<(&'a Atom, &'a Atom)> {
    molecule.endpoints(bond).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("bond {index} references an atom outside the molecule"),
        )
    })
}

fn write_ball_and_stick<W: Write>(
    w: &mut W,
    prefix: &str,
    index: usize,
    bond: &Bond,
    begin: &Atom,
    end: &Atom,
) -> io::Result<()> {
    let geom = BondGeometry::between(begin.position, end.position);
    if geom.dist < EPSILON {
        trace!("{prefix}_bond{index}: zero-length bond, scale omitted");
    }

    writeln!(w, "#declare {prefix}_bond{index} = object {{")?;
    writeln!(w, "\t  bond_{}", bond.order.code())?;
    Placement {
        scale: geom.full_scale(),
        z_rotation: geom.z_rotation(),
        y_rotation: geom.y_rotation(),
        anchor: bond.begin,
    }
    .write(w, "\t  ", prefix)?;
    writeln!(w, "\t }}")
}

fn write_capped_sticks<W: Write>(
    w: &mut W,
    prefix: &str,
    index: usize,
    bond: &Bond,
    begin: &Atom,
    end: &Atom,
) -> io::Result<()> {
    let geom = BondGeometry::between(begin.position, end.position);
    let halves = [
        (
            begin,
            Placement {
                scale: geom.half_scale(),
                z_rotation: geom.z_rotation(),
                y_rotation: geom.y_rotation(),
                anchor: bond.begin,
            },
        ),
        (
            end,
            Placement {
                scale: geom.half_scale(),
                z_rotation: geom.z_rotation_reversed(),
                y_rotation: geom.y_rotation(),
                anchor: bond.end,
            },
        ),
    ];

    writeln!(w, "#declare {prefix}_bond{index} = object {{")?;
    writeln!(w, "\t  union {{")?;
    for (atom, placement) in &halves {
        writeln!(w, "\t   object {{")?;
        writeln!(w, "\t    bond_{}", bond.order.code())?;
        writeln!(w, "\t    pigment{{color {}}}", color_name(atom))?;
        placement.write(w, "\t    ", prefix)?;
        writeln!(w, "\t   }}")?;
    }
    writeln!(w, "\t  }}")?;
    writeln!(w, "\t }}")?;
    writeln!(w)
}

/// Include-file color for an atom's type label, e.g. `C.ar` -> `Color_Car`.
pub fn color_name(atom: &Atom) -> String {
    let label: String = atom
        .type_label()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    format!("Color_{label}")
}
