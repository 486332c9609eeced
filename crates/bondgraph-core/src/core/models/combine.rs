use super::bond::Bond;
use super::bond_list::BondList;
use super::error::BondListError;
use super::redundancy;
use std::ops::Add;
use tracing::debug;

impl BondList {
    /// Combines two lists that share one index space.
    ///
    /// The result spans the larger of both atom counts and contains the union
    /// of both bond sets. If both lists bond the same pair, the order from
    /// `self` is kept. No indices are shifted, so the caller is responsible for
    /// both lists referring to the same atoms.
    pub fn merge(&self, other: &BondList) -> Result<BondList, BondListError> {
        let atom_count = self.atom_count().max(other.atom_count());
        let mut bonds: Vec<Bond> = Vec::new();
        bonds.try_reserve_exact(self.bond_count() + other.bond_count())?;
        bonds.extend_from_slice(self.bonds());
        bonds.extend_from_slice(other.bonds());
        redundancy::remove_redundant(&mut bonds, atom_count)?;
        debug!(atom_count, bonds = bonds.len(), "Merged bond lists");
        Ok(BondList::from_parts(atom_count, bonds))
    }

    /// Appends the atoms of `other` after the atoms of `self`.
    ///
    /// Bonds of `other` are shifted by `self.atom_count()`, so the result
    /// annotates the concatenation of both atom collections. The degree cache
    /// is the larger of both caches.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::AtomCountOverflow`] if the combined atom count
    /// does not fit in `usize`.
    pub fn concatenate(&self, other: &BondList) -> Result<BondList, BondListError> {
        let offset = self.atom_count();
        let atom_count = shifted_atom_count(other.atom_count(), offset)?;
        let mut bonds = Vec::with_capacity(self.bond_count() + other.bond_count());
        bonds.extend_from_slice(self.bonds());
        bonds.extend(other.bonds().iter().map(|b| b.shifted(offset)));
        Ok(BondList::from_parts_with_cache(
            atom_count,
            bonds,
            self.max_bonds_per_atom().max(other.max_bonds_per_atom()),
        ))
    }

    /// Shifts every atom index by `offset` and grows the atom count by the
    /// same amount.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::NegativeOffset`] if `offset` is negative and
    /// [`BondListError::AtomCountOverflow`] if the shifted atom count does not
    /// fit in `usize`; the list is left unchanged in both cases.
    pub fn offset_indices(&mut self, offset: isize) -> Result<(), BondListError> {
        if offset < 0 {
            return Err(BondListError::NegativeOffset(offset));
        }
        let offset = offset as usize;
        let atom_count = shifted_atom_count(self.atom_count(), offset)?;
        for bond in self.bonds_mut() {
            *bond = bond.shifted(offset);
        }
        self.set_atom_count(atom_count);
        Ok(())
    }
}

// Every index is below the atom count, so a valid shifted count means no
// shifted index can overflow either.
fn shifted_atom_count(atom_count: usize, offset: usize) -> Result<usize, BondListError> {
    atom_count
        .checked_add(offset)
        .ok_or(BondListError::AtomCountOverflow { atom_count, offset })
}

/// Concatenation as an operator.
///
/// # Panics
///
/// Panics if the combined atom count overflows `usize`, like integer `+`.
/// Use [`BondList::concatenate`] to handle that case.
impl Add for &BondList {
    type Output = BondList;

    fn add(self, rhs: &BondList) -> BondList {
        match self.concatenate(rhs) {
            Ok(list) => list,
            Err(e) => panic!("{}", e),
        }
    }
}

/// See the `&BondList` implementation; the same overflow panic applies.
impl Add for BondList {
    type Output = BondList;

    fn add(self, rhs: BondList) -> BondList {
        &self + &rhs
    }
}
