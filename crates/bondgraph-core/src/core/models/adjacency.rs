use super::bond::BondOrder;
use super::bond_list::BondList;

/// Bonding partners of every atom, built in a single pass over a [`BondList`].
///
/// This is a read-only snapshot; it does not follow later edits of the list
/// it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<(usize, BondOrder)>>,
}

impl Adjacency {
    pub fn atom_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Partners of `atom` with the order of the connecting bond.
    ///
    /// Returns an empty slice for atoms outside the list.
    pub fn neighbors(&self, atom: usize) -> &[(usize, BondOrder)] {
        self.neighbors.get(atom).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, atom: usize) -> usize {
        self.neighbors(atom).len()
    }
}

impl BondList {
    /// Collects the bonding partners of all atoms at once.
    ///
    /// Prefer this over repeated [`BondList::get_bonds`] calls when many atoms
    /// are queried, since it scans the bonds only once.
    pub fn get_all_bonds(&self) -> Adjacency {
        let mut neighbors: Vec<Vec<(usize, BondOrder)>> = self
            .degrees()
            .into_iter()
            .map(Vec::with_capacity)
            .collect();
        for bond in self.bonds() {
            neighbors[bond.atom1()].push((bond.atom2(), bond.order()));
            neighbors[bond.atom2()].push((bond.atom1(), bond.order()));
        }
        Adjacency { neighbors }
    }

    /// Symmetric `atom_count × atom_count` matrix, `true` where two atoms are bonded.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.atom_count();
        let mut matrix = vec![vec![false; n]; n];
        for bond in self.bonds() {
            let (i, j) = bond.pair();
            matrix[i][j] = true;
            matrix[j][i] = true;
        }
        matrix
    }

    /// Symmetric matrix holding the bond order of every bonded atom pair.
    pub fn bond_order_matrix(&self) -> Vec<Vec<Option<BondOrder>>> {
        let n = self.atom_count();
        let mut matrix = vec![vec![None; n]; n];
        for bond in self.bonds() {
            let (i, j) = bond.pair();
            matrix[i][j] = Some(bond.order());
            matrix[j][i] = Some(bond.order());
        }
        matrix
    }
}
