//! Error type for scene emission and render option loading.

use thiserror::Error;

/// Errors that can occur while writing a scene.
///
/// Emission either completes or fails with one of these. Output already handed
/// to the sink before an I/O failure is not rolled back; the caller owns the
/// stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink failed.
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A bond points at an atom the molecule does not have. Detected before
    /// anything is written.
    #[error("bond {bond} references atom index {atom}, but the molecule has {atom_count} atoms")]
    InvalidMolecule {
        /// Index of the offending bond.
        bond: usize,
        /// The out-of-range atom index.
        atom: usize,
        /// Number of atoms in the molecule.
        atom_count: usize,
    },

    /// Render options TOML could not be parsed.
    #[error("failed to parse render options: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`InvalidMolecule`](Error::InvalidMolecule) error.
    ///
    /// # Arguments
    ///
    /// * `bond` - Index of the bond with the dangling reference
    /// * `atom` - The atom index that does not exist
    /// * `atom_count` - Number of atoms in the molecule
    pub fn invalid_bond(bond: usize, atom: usize, atom_count: usize) -> Self {
        Self::InvalidMolecule {
            bond,
            atom,
            atom_count,
        }
    }
}
