use super::bond::Bond;
use super::bond_list::{BondList, resolve_atom_index};
use super::error::BondListError;
use std::ops::Range;
use tracing::{debug, instrument};

/// Describes which atoms of the annotated atom collection survive a slice.
///
/// Applying the same selection to the atom collection and to its
/// [`BondList`] keeps the bond indices pointing at the right atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One flag per atom; `true` keeps the atom.
    Mask(Vec<bool>),
    /// Atom indices to keep. Negative indices count from the end; duplicates
    /// and ordering are irrelevant.
    Indices(Vec<isize>),
    /// A contiguous run of atoms. The end is clamped to the atom count.
    Range(Range<usize>),
}

impl Selection {
    /// Resolves the selection into a keep mask of length `atom_count`.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::MaskLengthMismatch`] for a mask of the wrong
    /// length and [`BondListError::IndexOutOfRange`] for an index that does
    /// not resolve to an atom.
    pub fn to_mask(&self, atom_count: usize) -> Result<Vec<bool>, BondListError> {
        match self {
            Selection::Mask(mask) => {
                if mask.len() != atom_count {
                    return Err(BondListError::MaskLengthMismatch {
                        expected: atom_count,
                        found: mask.len(),
                    });
                }
                Ok(mask.clone())
            }
            Selection::Indices(indices) => {
                let mut mask = vec![false; atom_count];
                for &index in indices {
                    mask[resolve_atom_index(index, atom_count)?] = true;
                }
                Ok(mask)
            }
            Selection::Range(range) => {
                let end = range.end.min(atom_count);
                let start = range.start.min(end);
                let mut mask = vec![false; atom_count];
                mask[start..end].fill(true);
                Ok(mask)
            }
        }
    }
}

impl From<Vec<bool>> for Selection {
    fn from(mask: Vec<bool>) -> Self {
        Selection::Mask(mask)
    }
}

impl From<Vec<isize>> for Selection {
    fn from(indices: Vec<isize>) -> Self {
        Selection::Indices(indices)
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Selection::Range(range)
    }
}

/// For every atom, the number of dropped atoms that precede it.
fn dropped_before(keep: &[bool]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(keep.len());
    let mut dropped = 0;
    for &kept in keep {
        offsets.push(dropped);
        if !kept {
            dropped += 1;
        }
    }
    offsets
}

impl BondList {
    /// Restricts the list to the selected atoms and renumbers the survivors.
    ///
    /// A bond survives only if both of its atoms are kept; its indices are
    /// shifted down by the number of dropped atoms in front of each of them.
    /// The new atom count is the number of kept atoms.
    #[instrument(skip_all, name = "bond_list_selection")]
    pub fn select(&self, selection: &Selection) -> Result<BondList, BondListError> {
        let keep = selection.to_mask(self.atom_count())?;
        let offsets = dropped_before(&keep);
        let kept_atoms = keep.iter().filter(|&&k| k).count();

        let bonds: Vec<Bond> = self
            .bonds()
            .iter()
            .filter(|b| keep[b.atom1()] && keep[b.atom2()])
            .map(|b| b.remapped(b.atom1() - offsets[b.atom1()], b.atom2() - offsets[b.atom2()]))
            .collect();

        debug!(
            atoms = kept_atoms,
            bonds = bonds.len(),
            dropped_bonds = self.bond_count() - bonds.len(),
            "Selected bond list subset"
        );
        Ok(BondList::from_parts(kept_atoms, bonds))
    }
}
