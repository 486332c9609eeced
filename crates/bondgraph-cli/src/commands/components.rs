use crate::cli::ComponentsArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use bondgraph::core::models::bond_list::BondList;
use bondgraph::engine::connectivity::connected_components;
use tracing::info;

pub fn run(args: ComponentsArgs, config: &AppConfig) -> Result<()> {
    let list = super::read_bond_list(&args.input)?;
    print!("{}", render(&list, config.report_isolated));
    Ok(())
}

/// One line per component, `<n>: <atom>,<atom>,...`.
fn render(list: &BondList, report_isolated: bool) -> String {
    let components = connected_components(list);
    info!("Found {} connected components", components.len());
    components
        .iter()
        .filter(|c| report_isolated || c.len() > 1)
        .enumerate()
        .map(|(n, atoms)| {
            let atoms: Vec<String> = atoms.iter().map(usize::to_string).collect();
            format!("{}: {}\n", n, atoms.join(","))
        })
        .collect()
}
