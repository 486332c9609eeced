use super::bond::Bond;
use super::error::BondListError;
use tracing::trace;

/// Computes which bonds to keep so that every canonical pair occurs once.
///
/// The scan keeps the first occurrence of each pair in input order, so the
/// surviving record carries the bond order that was seen first. Partner lists
/// are keyed by the lower atom of each canonical pair and grown fallibly; an
/// allocation failure is reported instead of aborting.
pub(crate) fn redundancy_mask(
    bonds: &[Bond],
    atom_count: usize,
) -> Result<Vec<bool>, BondListError> {
    let mut partners: Vec<Vec<usize>> = Vec::new();
    partners.try_reserve_exact(atom_count)?;
    partners.resize_with(atom_count, Vec::new);

    let mut keep = Vec::new();
    keep.try_reserve_exact(bonds.len())?;

    for bond in bonds {
        let (source, target) = bond.pair();
        let seen = &mut partners[source];
        if seen.contains(&target) {
            keep.push(false);
        } else {
            seen.try_reserve(1)?;
            seen.push(target);
            keep.push(true);
        }
    }

    Ok(keep)
}

/// Drops every redundant bond from `bonds` in place.
///
/// Returns the number of removed records.
pub(crate) fn remove_redundant(
    bonds: &mut Vec<Bond>,
    atom_count: usize,
) -> Result<usize, BondListError> {
    let keep = redundancy_mask(bonds, atom_count)?;
    let before = bonds.len();
    let mut flags = keep.into_iter();
    bonds.retain(|_| flags.next().unwrap_or(false));
    let removed = before - bonds.len();
    if removed > 0 {
        trace!(removed, "Removed redundant bonds");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;

    fn bond(i: usize, j: usize, order: BondOrder) -> Bond {
        Bond::canonical(i, j, order).unwrap()
    }

    #[test]
    fn mask_flags_repeated_pairs_after_first_occurrence() {
        let bonds = vec![
            bond(0, 1, BondOrder::Single),
            bond(1, 2, BondOrder::Single),
            bond(1, 0, BondOrder::Double),
            bond(2, 1, BondOrder::Single),
            bond(0, 2, BondOrder::Single),
        ];
        let mask = redundancy_mask(&bonds, 3).unwrap();
        assert_eq!(mask, vec![true, true, false, false, true]);
    }

    #[test]
    fn remove_redundant_keeps_first_seen_order_tag() {
        let mut bonds = vec![
            bond(3, 1, BondOrder::Aromatic),
            bond(1, 3, BondOrder::Single),
            bond(0, 3, BondOrder::Double),
        ];
        let removed = remove_redundant(&mut bonds, 4).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(
            bonds.iter().map(Bond::as_tuple).collect::<Vec<_>>(),
            vec![(1, 3, BondOrder::Aromatic), (0, 3, BondOrder::Double)]
        );
    }

    #[test]
    fn remove_redundant_is_noop_on_unique_bonds() {
        let mut bonds = vec![bond(0, 1, BondOrder::Any), bond(1, 2, BondOrder::Any)];
        assert_eq!(remove_redundant(&mut bonds, 3).unwrap(), 0);
        assert_eq!(bonds.len(), 2);
    }

    #[test]
    fn empty_input_produces_empty_mask() {
        assert!(redundancy_mask(&[], 0).unwrap().is_empty());
    }
}
