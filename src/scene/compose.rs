//! Union and molecule composition, plus the trailing per-molecule declarations.

use super::number::{Real, Vector};
use crate::geometry::bounds::{BoundingBox, MAX_ATOM_RADIUS};
use crate::model::molecule::Molecule;
use std::io::{self, Write};

/// Declares `<prefix>_atoms` (merge under `TRANS`, else union) and, when the
/// molecule has bonds, `<prefix>_bonds` inside `#if (BAS | CST)`.
pub fn write_unions<W: Write>(w: &mut W, molecule: &Molecule, prefix: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "//All atoms of molecule {prefix}")?;
    writeln!(w, "#if (TRANS)")?;
    writeln!(w, "#declare {prefix}_atoms = merge {{")?;
    writeln!(w, "#else")?;
    writeln!(w, "#declare {prefix}_atoms = union {{")?;
    writeln!(w, "#end //(End of TRANS)")?;
    for i in 1..=molecule.atom_count() {
        writeln!(w, "\t  object{{{prefix}_atom{i}}}")?;
    }
    writeln!(w, "\t }}")?;
    writeln!(w)?;

    if molecule.has_bonds() {
        writeln!(w, "//Bonds only needed for ball and sticks or capped sticks models")?;
        writeln!(w, "#if (BAS | CST)")?;
        writeln!(w, "#declare {prefix}_bonds = union {{")?;
        for i in 0..molecule.bond_count() {
            writeln!(w, "\t  object{{{prefix}_bond{i}}}")?;
        }
        writeln!(w, "\t }}")?;
        writeln!(w, "#end")?;
        writeln!(w)?;
    }

    Ok(())
}

/// Declares the molecule object itself, closing with a commented bounding box.
pub fn write_molecule<W: Write>(
    w: &mut W,
    molecule: &Molecule,
    prefix: &str,
    bbox: &BoundingBox,
) -> io::Result<()> {
    writeln!(w)?;
    if molecule.has_bonds() {
        writeln!(w, "//Definition of molecule {prefix}")?;
        writeln!(w, "#if (SPF)")?;
        writeln!(w, "#declare {prefix} = object{{")?;
        writeln!(w, "\t  {prefix}_atoms")?;
        writeln!(w, "#else")?;
        writeln!(w, "#declare {prefix} = union {{")?;
        writeln!(w, "\t  object{{{prefix}_atoms}}")?;
        writeln!(w, "#if (BAS | CST)")?;
        writeln!(w, "#if (TRANS)")?;
        writeln!(w, "\t  difference {{")?;
        writeln!(w, "\t   object{{{prefix}_bonds}}")?;
        writeln!(w, "\t   object{{{prefix}_atoms}}")?;
        writeln!(w, "\t  }}")?;
        writeln!(w, "#else")?;
        writeln!(w, "\t  object{{{prefix}_bonds}}")?;
        writeln!(w, "#end //(End of TRANS)")?;
        writeln!(w, "#end //(End of (BAS|CST))")?;
        writeln!(w, "#end //(End of SPF)")?;
    } else {
        writeln!(w, "//Definition of molecule {prefix} (no bonds)")?;
        writeln!(w, "#declare {prefix} = object {{")?;
        writeln!(w, "\t  {prefix}_atoms")?;
    }

    let bounds = bbox.expanded(MAX_ATOM_RADIUS);
    writeln!(w, "//\t  bounded_by {{")?;
    writeln!(w, "//\t   box {{")?;
    writeln!(w, "//\t    {}", Vector(bounds.min))?;
    writeln!(w, "//\t    {}", Vector(bounds.max))?;
    writeln!(w, "//\t   }}")?;
    writeln!(w, "//\t  }}")?;
    writeln!(w, "\t }}")?;
    writeln!(w)
}

/// Declares `<prefix>_center`, the translation that centers the bounding box.
pub fn write_center<W: Write>(w: &mut W, prefix: &str, bbox: &BoundingBox) -> io::Result<()> {
    let [x, y, z] = bbox.recentering();
    writeln!(w, "//Center of molecule {prefix} (bounding box)")?;
    writeln!(
        w,
        "#declare {prefix}_center = <{},{},{}>;",
        Real(x),
        Real(y),
        Real(z)
    )?;
    writeln!(w)
}
