use super::number::Vector;
use crate::model::molecule::Molecule;
use std::io::Write;

/// Declares a position vector and a placed atom object for every atom.
///
/// Names use the 1-based atom index: `<prefix>_pos_<i>` and `<prefix>_atom<i>`.
pub fn write_atoms<W: Write>(w: &mut W, molecule: &Molecule, prefix: &str) -> std::io::Result<()> {
    let n = molecule.atom_count();

    writeln!(w, "//Coordinates of atoms 1 - {n}")?;
    for (i, atom) in molecule.atoms.iter().enumerate() {
        writeln!(w, "#declare {prefix}_pos_{} = {};", i + 1, Vector(atom.position))?;
    }

    writeln!(w)?;
    writeln!(w, "//Povray-description of atoms 1 - {n}")?;
    for (i, atom) in molecule.atoms.iter().enumerate() {
        let idx = i + 1;
        writeln!(w, "#declare {prefix}_atom{idx} = object {{")?;
        writeln!(w, "\t  Atom_{}", atom.element.symbol())?;
        writeln!(w, "\t  translate {prefix}_pos_{idx}")?;
        writeln!(w, "\t }}")?;
    }

    writeln!(w)?;
    Ok(())
}
