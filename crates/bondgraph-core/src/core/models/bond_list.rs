use super::bond::{Bond, BondOrder};
use super::error::BondListError;
use super::redundancy;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, instrument};

/// A set of bonds between atoms of an external atom collection.
///
/// Atoms are referred to by their position in that collection, and
/// `atom_count` is the length of the collection the list annotates. Every
/// stored bond is canonical (`atom1 < atom2`) and no canonical pair occurs
/// twice.
///
/// The list keeps a pessimistic cache of the highest per-atom bond count. It
/// is recomputed whenever a bond is added or the index space is rebuilt, but
/// not on removal, so it never understates the true maximum.
#[derive(Debug, Clone)]
pub struct BondList {
    /// Exclusive upper bound of all atom indices.
    atom_count: usize,
    /// Canonical bond records.
    bonds: Vec<Bond>,
    /// Upper bound of the number of bonds of any single atom.
    max_bonds_per_atom: usize,
}

impl BondList {
    /// Creates a bond list without any bonds.
    pub fn new(atom_count: usize) -> Self {
        Self {
            atom_count,
            bonds: Vec::new(),
            max_bonds_per_atom: 0,
        }
    }

    /// Creates a bond list from `(atom, atom, order)` triples.
    ///
    /// Pairs may be given in any order; they are canonicalized and duplicate
    /// pairs are collapsed onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::IndexOutOfRange`] if an index is not below
    /// `atom_count`, [`BondListError::SelfBond`] for a bond of an atom to
    /// itself, and [`BondListError::Allocation`] if the deduplication buffers
    /// cannot grow.
    #[instrument(skip_all, name = "bond_list_construction", fields(atom_count = atom_count))]
    pub fn from_bonds<I>(atom_count: usize, rows: I) -> Result<Self, BondListError>
    where
        I: IntoIterator<Item = (usize, usize, BondOrder)>,
    {
        let mut bonds = Vec::new();
        for (i, j, order) in rows {
            check_index(i, atom_count)?;
            check_index(j, atom_count)?;
            bonds.push(Bond::canonical(i, j, order)?);
        }
        let removed = redundancy::remove_redundant(&mut bonds, atom_count)?;
        debug!(
            bonds = bonds.len(),
            redundant = removed,
            "Constructed bond list"
        );
        Ok(Self::from_parts(atom_count, bonds))
    }

    /// Creates a bond list from atom pairs, all with [`BondOrder::Any`].
    pub fn from_pairs<I>(atom_count: usize, pairs: I) -> Result<Self, BondListError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_bonds(
            atom_count,
            pairs.into_iter().map(|(i, j)| (i, j, BondOrder::Any)),
        )
    }

    /// Creates a bond list from untyped integer rows.
    ///
    /// Each row holds two atom indices and optionally a bond order code as
    /// its third column. This is the entry point for tabular sources that
    /// have not been validated yet.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`BondList::from_bonds`], returns
    /// [`BondListError::InvalidRowWidth`] for rows that have neither two nor
    /// three columns and [`BondListError::InvalidBondOrder`] for unknown
    /// order codes. Negative indices are out of range here.
    pub fn from_raw_rows<R: AsRef<[i64]>>(
        atom_count: usize,
        rows: &[R],
    ) -> Result<Self, BondListError> {
        let mut triples = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let order = match row.len() {
                2 => BondOrder::Any,
                3 => BondOrder::try_from(row[2])?,
                width => {
                    return Err(BondListError::InvalidRowWidth {
                        row: row_index,
                        width,
                    });
                }
            };
            let i = non_negative(row[0], atom_count)?;
            let j = non_negative(row[1], atom_count)?;
            triples.push((i, j, order));
        }
        Self::from_bonds(atom_count, triples)
    }

    /// Assembles a list from bonds that are already canonical, unique and in
    /// range, recomputing the degree cache.
    pub(crate) fn from_parts(atom_count: usize, bonds: Vec<Bond>) -> Self {
        let mut list = Self {
            atom_count,
            bonds,
            max_bonds_per_atom: 0,
        };
        list.recompute_max_bonds_per_atom();
        list
    }

    /// Assembles a list with an explicit degree cache, which must not be
    /// lower than the true maximum degree.
    pub(crate) fn from_parts_with_cache(
        atom_count: usize,
        bonds: Vec<Bond>,
        max_bonds_per_atom: usize,
    ) -> Self {
        Self {
            atom_count,
            bonds,
            max_bonds_per_atom,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Returns a slice of all bonds in storage order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Cached upper bound of the number of bonds any atom takes part in.
    pub fn max_bonds_per_atom(&self) -> usize {
        self.max_bonds_per_atom
    }

    pub(crate) fn set_atom_count(&mut self, atom_count: usize) {
        self.atom_count = atom_count;
    }

    pub(crate) fn bonds_mut(&mut self) -> &mut [Bond] {
        &mut self.bonds
    }

    /// Copies all bonds out as `(atom1, atom2, order)` rows.
    pub fn as_array(&self) -> Vec<(usize, usize, BondOrder)> {
        self.bonds.iter().map(Bond::as_tuple).collect()
    }

    /// Copies all bonds out as a set of `(atom1, atom2, order)` tuples.
    pub fn as_set(&self) -> HashSet<(usize, usize, BondOrder)> {
        self.bonds.iter().map(Bond::as_tuple).collect()
    }

    /// Resolves a possibly negative atom index against `atom_count`.
    ///
    /// Negative values count from the end, so `-1` is the last atom.
    pub fn resolve_index(&self, index: isize) -> Result<usize, BondListError> {
        resolve_atom_index(index, self.atom_count)
    }

    /// Adds a bond between two atoms, or updates the order of an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::IndexOutOfRange`] if an index cannot be
    /// resolved and [`BondListError::SelfBond`] if both indices resolve to
    /// the same atom.
    pub fn add_bond(&mut self, i: isize, j: isize, order: BondOrder) -> Result<(), BondListError> {
        let bond = Bond::canonical(self.resolve_index(i)?, self.resolve_index(j)?, order)?;
        if let Some(existing) = self.bonds.iter_mut().find(|b| b.pair() == bond.pair()) {
            existing.set_order(order);
            return Ok(());
        }
        self.bonds.push(bond);
        // A new bond may raise the maximum degree.
        self.recompute_max_bonds_per_atom();
        Ok(())
    }

    /// Removes the bond between two atoms. Removing a missing bond is a no-op.
    ///
    /// The degree cache is left untouched.
    pub fn remove_bond(&mut self, i: isize, j: isize) -> Result<(), BondListError> {
        let (i, j) = (self.resolve_index(i)?, self.resolve_index(j)?);
        let pair = (i.min(j), i.max(j));
        if let Some(position) = self.bonds.iter().position(|b| b.pair() == pair) {
            self.bonds.remove(position);
        }
        Ok(())
    }

    /// Removes every bond whose atom pair also occurs in `other`, regardless
    /// of bond order.
    ///
    /// The degree cache is left untouched.
    pub fn remove_bonds(&mut self, other: &BondList) {
        let pairs: HashSet<(usize, usize)> = other.bonds.iter().map(Bond::pair).collect();
        let before = self.bonds.len();
        self.bonds.retain(|b| !pairs.contains(&b.pair()));
        debug!(removed = before - self.bonds.len(), "Removed bonds");
    }

    /// Checks whether the two atoms are bonded, irrespective of argument order.
    pub fn contains(&self, i: isize, j: isize) -> Result<bool, BondListError> {
        let (i, j) = (self.resolve_index(i)?, self.resolve_index(j)?);
        let pair = (i.min(j), i.max(j));
        Ok(self.bonds.iter().any(|b| b.pair() == pair))
    }

    /// Returns the bonding partners of an atom and the orders of these bonds.
    ///
    /// The two vectors are parallel. Negative indices count from the end.
    pub fn get_bonds(&self, atom: isize) -> Result<(Vec<usize>, Vec<BondOrder>), BondListError> {
        let atom = self.resolve_index(atom)?;
        let mut partners = Vec::with_capacity(self.max_bonds_per_atom);
        let mut orders = Vec::with_capacity(self.max_bonds_per_atom);
        for bond in &self.bonds {
            if let Some(partner) = bond.partner(atom) {
                partners.push(partner);
                orders.push(bond.order());
            }
        }
        Ok((partners, orders))
    }

    /// Exact number of bonds of every atom.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.atom_count];
        for bond in &self.bonds {
            degrees[bond.atom1()] += 1;
            degrees[bond.atom2()] += 1;
        }
        degrees
    }

    /// Sets the order of every bond to [`BondOrder::Any`].
    pub fn remove_bond_orders(&mut self) {
        for bond in &mut self.bonds {
            bond.set_order(BondOrder::Any);
        }
    }

    /// Replaces [`BondOrder::Aromatic`] by [`BondOrder::Any`].
    pub fn remove_aromaticity(&mut self) {
        for bond in self
            .bonds
            .iter_mut()
            .filter(|b| b.order() == BondOrder::Aromatic)
        {
            bond.set_order(BondOrder::Any);
        }
    }

    pub(crate) fn recompute_max_bonds_per_atom(&mut self) {
        self.max_bonds_per_atom = self.degrees().into_iter().max().unwrap_or(0);
    }
}

impl PartialEq for BondList {
    fn eq(&self, other: &Self) -> bool {
        self.atom_count == other.atom_count
            && self.bonds.len() == other.bonds.len()
            && self.as_set() == other.as_set()
    }
}

impl Eq for BondList {}

impl fmt::Display for BondList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BondList(atom_count={}, bonds={})",
            self.atom_count,
            self.bonds.len()
        )
    }
}

pub(crate) fn resolve_atom_index(index: isize, atom_count: usize) -> Result<usize, BondListError> {
    let resolved = if index < 0 {
        atom_count as i64 + index as i64
    } else {
        index as i64
    };
    if resolved < 0 || resolved >= atom_count as i64 {
        return Err(BondListError::IndexOutOfRange {
            index: index as i64,
            atom_count,
        });
    }
    Ok(resolved as usize)
}

fn check_index(index: usize, atom_count: usize) -> Result<(), BondListError> {
    if index >= atom_count {
        return Err(BondListError::IndexOutOfRange {
            index: index as i64,
            atom_count,
        });
    }
    Ok(())
}

fn non_negative(index: i64, atom_count: usize) -> Result<usize, BondListError> {
    usize::try_from(index).map_err(|_| BondListError::IndexOutOfRange { index, atom_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(atom_count: usize) -> BondList {
        BondList::from_pairs(atom_count, (1..atom_count).map(|i| (i - 1, i))).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn from_bonds_canonicalizes_every_pair() {
            let list = BondList::from_bonds(
                4,
                [
                    (1, 0, BondOrder::Single),
                    (3, 2, BondOrder::Double),
                    (1, 2, BondOrder::Any),
                ],
            )
            .unwrap();
            for bond in list.bonds() {
                assert!(bond.atom1() < bond.atom2());
            }
            assert_eq!(
                list.as_array(),
                vec![
                    (0, 1, BondOrder::Single),
                    (2, 3, BondOrder::Double),
                    (1, 2, BondOrder::Any)
                ]
            );
        }

        #[test]
        fn duplicate_pairs_collapse_to_one_record() {
            let list = BondList::from_bonds(
                3,
                [
                    (0, 1, BondOrder::Single),
                    (1, 0, BondOrder::Double),
                    (0, 1, BondOrder::Single),
                    (2, 1, BondOrder::Any),
                ],
            )
            .unwrap();
            assert_eq!(list.bond_count(), 2);
            assert!(list.as_set().contains(&(0, 1, BondOrder::Single)));
            assert!(list.as_set().contains(&(1, 2, BondOrder::Any)));
        }

        #[test]
        fn out_of_range_index_is_rejected() {
            let result = BondList::from_pairs(3, [(0, 1), (1, 3)]);
            assert_eq!(
                result,
                Err(BondListError::IndexOutOfRange {
                    index: 3,
                    atom_count: 3
                })
            );
        }

        #[test]
        fn self_bond_is_rejected() {
            assert_eq!(
                BondList::from_pairs(3, [(2, 2)]),
                Err(BondListError::SelfBond(2))
            );
        }

        #[test]
        fn raw_rows_accept_two_and_three_columns() {
            let rows: Vec<Vec<i64>> = vec![vec![0, 1], vec![2, 1, 2], vec![3, 2, 5]];
            let list = BondList::from_raw_rows(4, &rows).unwrap();
            assert_eq!(
                list.as_array(),
                vec![
                    (0, 1, BondOrder::Any),
                    (1, 2, BondOrder::Double),
                    (2, 3, BondOrder::Aromatic)
                ]
            );
        }

        #[test]
        fn raw_rows_with_wrong_width_fail_with_shape_error() {
            let rows: Vec<Vec<i64>> = vec![vec![0, 1], vec![1, 2, 1, 0]];
            assert_eq!(
                BondList::from_raw_rows(3, &rows),
                Err(BondListError::InvalidRowWidth { row: 1, width: 4 })
            );
            let rows: Vec<Vec<i64>> = vec![vec![0]];
            assert_eq!(
                BondList::from_raw_rows(3, &rows),
                Err(BondListError::InvalidRowWidth { row: 0, width: 1 })
            );
        }

        #[test]
        fn raw_rows_reject_negative_indices_and_unknown_orders() {
            let rows = [[0_i64, -1]];
            assert_eq!(
                BondList::from_raw_rows(3, &rows),
                Err(BondListError::IndexOutOfRange {
                    index: -1,
                    atom_count: 3
                })
            );
            let rows = [[0_i64, 1, 9]];
            assert_eq!(
                BondList::from_raw_rows(3, &rows),
                Err(BondListError::InvalidBondOrder(9))
            );
        }

        #[test]
        fn degree_cache_is_exact_after_construction() {
            let list = BondList::from_pairs(5, [(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
            assert_eq!(list.max_bonds_per_atom(), 3);
            assert_eq!(list.degrees(), vec![3, 1, 1, 2, 1]);
        }

        #[test]
        fn empty_list_reports_zero_counts() {
            let list = BondList::new(10);
            assert_eq!(list.atom_count(), 10);
            assert_eq!(list.bond_count(), 0);
            assert!(list.is_empty());
            assert_eq!(list.max_bonds_per_atom(), 0);
            assert_eq!(list.to_string(), "BondList(atom_count=10, bonds=0)");
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn add_then_remove_returns_to_empty() {
            let mut list = BondList::new(5);
            list.add_bond(1, 0, BondOrder::Any).unwrap();
            assert_eq!(list.bond_count(), 1);
            list.remove_bond(0, 1).unwrap();
            assert!(list.as_set().is_empty());
        }

        #[test]
        fn add_existing_pair_overwrites_order() {
            let mut list = chain(3);
            list.add_bond(2, 1, BondOrder::Triple).unwrap();
            assert_eq!(list.bond_count(), 2);
            let (partners, orders) = list.get_bonds(2).unwrap();
            assert_eq!(partners, vec![1]);
            assert_eq!(orders, vec![BondOrder::Triple]);
        }

        #[test]
        fn add_bond_resolves_negative_indices() {
            let mut list = BondList::new(4);
            list.add_bond(-1, 0, BondOrder::Single).unwrap();
            assert!(list.as_set().contains(&(0, 3, BondOrder::Single)));
            assert!(list.contains(3, -4).unwrap());
        }

        #[test]
        fn add_bond_rejects_out_of_range_and_self_bonds() {
            let mut list = BondList::new(4);
            assert_eq!(
                list.add_bond(0, 4, BondOrder::Any),
                Err(BondListError::IndexOutOfRange {
                    index: 4,
                    atom_count: 4
                })
            );
            assert_eq!(
                list.add_bond(-5, 0, BondOrder::Any),
                Err(BondListError::IndexOutOfRange {
                    index: -5,
                    atom_count: 4
                })
            );
            assert_eq!(
                list.add_bond(-1, 3, BondOrder::Any),
                Err(BondListError::SelfBond(3))
            );
            assert!(list.is_empty());
        }

        #[test]
        fn adding_raises_cache_but_removing_keeps_it() {
            let mut list = chain(4);
            assert_eq!(list.max_bonds_per_atom(), 2);
            list.add_bond(1, 3, BondOrder::Any).unwrap();
            assert_eq!(list.max_bonds_per_atom(), 3);
            list.remove_bond(1, 3).unwrap();
            list.remove_bond(0, 1).unwrap();
            assert_eq!(list.max_bonds_per_atom(), 3);
            let true_max = list.degrees().into_iter().max().unwrap();
            assert!(list.max_bonds_per_atom() >= true_max);
        }

        #[test]
        fn removing_missing_bond_is_noop() {
            let mut list = chain(4);
            list.remove_bond(0, 3).unwrap();
            assert_eq!(list, chain(4));
        }

        #[test]
        fn remove_bonds_ignores_bond_order() {
            let mut list = BondList::from_bonds(
                4,
                [
                    (0, 1, BondOrder::Single),
                    (1, 2, BondOrder::Double),
                    (2, 3, BondOrder::Single),
                ],
            )
            .unwrap();
            let other =
                BondList::from_bonds(6, [(2, 1, BondOrder::Aromatic), (4, 5, BondOrder::Any)])
                    .unwrap();
            list.remove_bonds(&other);
            assert_eq!(
                list.as_array(),
                vec![(0, 1, BondOrder::Single), (2, 3, BondOrder::Single)]
            );
        }

        #[test]
        fn remove_bond_resolves_negative_and_rejects_out_of_range_indices() {
            let mut list = BondList::from_pairs(4, [(0, 3), (1, 2)]).unwrap();
            list.remove_bond(-1, 0).unwrap();
            assert_eq!(list.as_array(), vec![(1, 2, BondOrder::Any)]);
            assert_eq!(
                list.remove_bond(0, 4),
                Err(BondListError::IndexOutOfRange {
                    index: 4,
                    atom_count: 4
                })
            );
            assert_eq!(
                list.remove_bond(-5, 1),
                Err(BondListError::IndexOutOfRange {
                    index: -5,
                    atom_count: 4
                })
            );
            assert_eq!(list.bond_count(), 1);
        }

        #[test]
        fn remove_bonds_keeps_degree_cache() {
            let mut star = BondList::from_pairs(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
            assert_eq!(star.max_bonds_per_atom(), 3);
            let all = star.clone();
            star.remove_bonds(&all);
            assert!(star.is_empty());
            assert_eq!(star.max_bonds_per_atom(), 3);
        }

        #[test]
        fn order_stripping_helpers_rewrite_tags() {
            let mut list = BondList::from_bonds(
                3,
                [(0, 1, BondOrder::Aromatic), (1, 2, BondOrder::Double)],
            )
            .unwrap();
            list.remove_aromaticity();
            assert_eq!(
                list.as_array(),
                vec![(0, 1, BondOrder::Any), (1, 2, BondOrder::Double)]
            );
            list.remove_bond_orders();
            assert!(list.bonds().iter().all(|b| b.order() == BondOrder::Any));
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn get_bonds_returns_parallel_partners_and_orders() {
            let list = BondList::from_bonds(
                4,
                [
                    (0, 1, BondOrder::Single),
                    (1, 2, BondOrder::Double),
                    (3, 1, BondOrder::Aromatic),
                ],
            )
            .unwrap();
            let (partners, orders) = list.get_bonds(1).unwrap();
            let mut pairs: Vec<_> = partners.into_iter().zip(orders).collect();
            pairs.sort();
            assert_eq!(
                pairs,
                vec![
                    (0, BondOrder::Single),
                    (2, BondOrder::Double),
                    (3, BondOrder::Aromatic)
                ]
            );
            assert_eq!(list.get_bonds(-1).unwrap().0, vec![1]);
        }

        #[test]
        fn get_bonds_of_isolated_atom_is_empty() {
            let list = BondList::from_pairs(5, [(0, 1)]).unwrap();
            let (partners, orders) = list.get_bonds(4).unwrap();
            assert!(partners.is_empty());
            assert!(orders.is_empty());
            assert!(list.get_bonds(5).is_err());
        }

        #[test]
        fn contains_is_order_insensitive() {
            let list = chain(3);
            assert!(list.contains(0, 1).unwrap());
            assert!(list.contains(1, 0).unwrap());
            assert!(!list.contains(0, 2).unwrap());
            assert!(list.contains(0, 3).is_err());
        }

        #[test]
        fn exports_are_independent_copies() {
            let mut list = chain(3);
            let array = list.as_array();
            let set = list.as_set();
            list.add_bond(0, 2, BondOrder::Any).unwrap();
            assert_eq!(array.len(), 2);
            assert_eq!(set.len(), 2);
            assert_eq!(list.bond_count(), 3);
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn insertion_order_does_not_matter() {
            let mut a = BondList::new(4);
            a.add_bond(0, 1, BondOrder::Single).unwrap();
            a.add_bond(2, 3, BondOrder::Double).unwrap();
            let mut b = BondList::new(4);
            b.add_bond(3, 2, BondOrder::Double).unwrap();
            b.add_bond(1, 0, BondOrder::Single).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn order_tags_and_atom_count_are_compared() {
            let a = BondList::from_bonds(3, [(0, 1, BondOrder::Single)]).unwrap();
            let b = BondList::from_bonds(3, [(0, 1, BondOrder::Double)]).unwrap();
            let c = BondList::from_bonds(4, [(0, 1, BondOrder::Single)]).unwrap();
            assert_ne!(a, b);
            assert_ne!(a, c);
        }
    }
}
