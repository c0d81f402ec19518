use super::atom::Atom;
use super::types::BondOrder;

/// A directed bond. `begin` and `end` are indices into [`Molecule::atoms`] and
/// keep their given order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(begin: usize, end: usize, order: BondOrder) -> Self {
        Self { begin, end, order }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub title: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn has_bonds(&self) -> bool {
        !self.bonds.is_empty()
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = [f64; 3]> + '_ {
        self.atoms.iter().map(|a| a.position)
    }

    /// Returns the begin and end atoms of `bond`, or `None` if either index is
    /// out of range.
    pub fn endpoints(&self, bond: &Bond) -> Option<(&Atom, &Atom)> {
        Some((self.atoms.get(bond.begin)?, self.atoms.get(bond.end)?))
    }
}
