use super::error::Error;
use super::options::RenderOptions;
use super::{atoms, bonds, compose, header};
use crate::geometry::bounds::BoundingBox;
use crate::model::molecule::Molecule;
use chrono::{DateTime, FixedOffset, Local};
use log::debug;
use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// An output stream receiving one or more molecules.
///
/// The session owns the sink and the molecule sequence number. Each molecule
/// gets the identifier prefix `mol_<n>`; only molecule 0 is preceded by the
/// scene header. Emission takes `&mut self`, so molecules are always written
/// one after another.
#[derive(Debug)]
pub struct SceneSession<W: Write> {
    writer: W,
    next_sequence: u64,
    timestamp: Option<DateTime<FixedOffset>>,
}

impl<W: Write> SceneSession<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_sequence: 0,
            timestamp: None,
        }
    }

    /// Creates a session whose header carries `timestamp` instead of the
    /// current local time.
    pub fn with_timestamp(writer: W, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Self::new(writer)
        }
    }

    /// Number of molecules successfully written so far.
    pub fn molecules_written(&self) -> u64 {
        self.next_sequence
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Appends `molecule` to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMolecule`] without writing anything if a bond
    /// references a missing atom, or [`Error::Io`] if the sink fails. The
    /// sequence number only advances on success.
    pub fn emit_scene(&mut self, molecule: &Molecule, options: &RenderOptions) -> Result<(), Error> {
        validate(molecule)?;

        let prefix = format!("mol_{}", self.next_sequence);
        debug!(
            "writing {prefix} ({} atoms, {} bonds, style {})",
            molecule.atom_count(),
            molecule.bond_count(),
            options.model
        );

        let w = &mut self.writer;
        if self.next_sequence == 0 {
            let stamp = match &self.timestamp {
                Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
                None => Local::now().format(TIMESTAMP_FORMAT).to_string(),
            };
            header::write_header(w, molecule, options, &stamp)?;
        }

        atoms::write_atoms(w, molecule, &prefix)?;
        if molecule.has_bonds() {
            bonds::write_bonds(w, molecule, &prefix)?;
        }
        compose::write_unions(w, molecule, &prefix)?;

        let bbox = BoundingBox::from_positions(molecule.positions());
        compose::write_molecule(w, molecule, &prefix, &bbox)?;
        compose::write_center(w, &prefix, &bbox)?;

        writeln!(w, "{prefix}")?;
        w.flush()?;

        self.next_sequence += 1;
        Ok(())
    }
}

fn validate(molecule: &Molecule) -> Result<(), Error> {
    let n = molecule.atom_count();
    for (i, bond) in molecule.bonds.iter().enumerate() {
        for atom in [bond.begin, bond.end] {
            if atom >= n {
                return Err(Error::invalid_bond(i, atom, n));
            }
        }
    }
    Ok(())
}
