use crate::cli::ConnectedArgs;
use crate::error::Result;
use bondgraph::core::models::bond_list::BondList;
use bondgraph::engine::connectivity::{find_connected, find_connected_mask};
use tracing::info;

pub fn run(args: ConnectedArgs) -> Result<()> {
    let list = super::read_bond_list(&args.input)?;
    println!("{}", render(&list, args.root, args.mask)?);
    Ok(())
}

fn render(list: &BondList, root: usize, as_mask: bool) -> Result<String> {
    if as_mask {
        let mask = find_connected_mask(list, root)?;
        info!(
            "{} atoms connected to atom {}",
            mask.iter().filter(|&&m| m).count(),
            root
        );
        Ok(mask.iter().map(|&m| if m { '1' } else { '0' }).collect())
    } else {
        let atoms = find_connected(list, root)?;
        info!("{} atoms connected to atom {}", atoms.len(), root);
        Ok(atoms
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use bondgraph::core::models::error::BondListError;

    fn chain() -> BondList {
        BondList::from_pairs(4, [(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn renders_index_lists_and_masks() {
        assert_eq!(render(&chain(), 0, false).unwrap(), "0,1,2");
        assert_eq!(render(&chain(), 0, true).unwrap(), "1110");
        assert_eq!(render(&chain(), 3, false).unwrap(), "3");
    }

    #[test]
    fn root_outside_the_table_fails() {
        assert!(matches!(
            render(&chain(), 4, false),
            Err(CliError::Graph(BondListError::RootOutOfRange { root: 4, .. }))
        ));
    }
}
