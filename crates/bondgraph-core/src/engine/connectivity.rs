use crate::core::models::adjacency::Adjacency;
use crate::core::models::bond_list::BondList;
use crate::core::models::error::BondListError;
use tracing::{instrument, trace};

/// Marks every atom reachable from `root` through any number of bonds.
///
/// The returned mask has one entry per atom of `bond_list`; `root` is always
/// marked.
///
/// # Errors
///
/// Returns [`BondListError::RootOutOfRange`] if `root` is not an atom of the
/// list.
#[instrument(skip_all, fields(root = root))]
pub fn find_connected_mask(bond_list: &BondList, root: usize) -> Result<Vec<bool>, BondListError> {
    let atom_count = bond_list.atom_count();
    if root >= atom_count {
        return Err(BondListError::RootOutOfRange { root, atom_count });
    }
    let adjacency = bond_list.get_all_bonds();
    let mut visited = vec![false; atom_count];
    flood_fill(&adjacency, root, &mut visited);
    Ok(visited)
}

/// Ascending indices of every atom reachable from `root`, including `root`.
///
/// # Errors
///
/// Returns [`BondListError::RootOutOfRange`] if `root` is not an atom of the
/// list.
pub fn find_connected(bond_list: &BondList, root: usize) -> Result<Vec<usize>, BondListError> {
    let mask = find_connected_mask(bond_list, root)?;
    Ok(mask_to_indices(&mask))
}

/// Splits the atoms into connected components.
///
/// Each component is sorted ascending and components are ordered by their
/// smallest atom. Atoms without bonds form components of their own.
#[instrument(skip_all)]
pub fn connected_components(bond_list: &BondList) -> Vec<Vec<usize>> {
    let adjacency = bond_list.get_all_bonds();
    let mut visited = vec![false; bond_list.atom_count()];
    let mut components = Vec::new();

    for root in 0..bond_list.atom_count() {
        if visited[root] {
            continue;
        }
        let mut component = flood_fill(&adjacency, root, &mut visited);
        component.sort_unstable();
        components.push(component);
    }

    trace!(components = components.len(), "Collected connected components");
    components
}

/// Iterative depth-first walk from `root`, marking `visited` and returning
/// the newly reached atoms in visiting order.
fn flood_fill(adjacency: &Adjacency, root: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut reached = Vec::new();
    let mut stack = vec![root];
    visited[root] = true;

    while let Some(atom) = stack.pop() {
        reached.push(atom);
        for &(partner, _) in adjacency.neighbors(atom) {
            if !visited[partner] {
                visited[partner] = true;
                stack.push(partner);
            }
        }
    }
    reached
}

fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}
