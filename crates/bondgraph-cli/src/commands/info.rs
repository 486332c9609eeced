use crate::cli::InfoArgs;
use crate::error::Result;
use bondgraph::core::models::bond_list::BondList;
use bondgraph::engine::connectivity::connected_components;
use tracing::info;

pub fn run(args: InfoArgs) -> Result<()> {
    let list = super::read_bond_list(&args.input)?;
    info!("Summarizing {}", list);
    print!("{}", render(&list));
    Ok(())
}

fn render(list: &BondList) -> String {
    let degrees = list.degrees();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let isolated = degrees.iter().filter(|&&d| d == 0).count();
    let components = connected_components(list).len();

    format!(
        "Atoms:                {}\n\
         Bonds:                {}\n\
         Max degree:           {}\n\
         Max bonds per atom:   {}\n\
         Isolated atoms:       {}\n\
         Connected components: {}\n",
        list.atom_count(),
        list.bond_count(),
        max_degree,
        list.max_bonds_per_atom(),
        isolated,
        components
    )
}
