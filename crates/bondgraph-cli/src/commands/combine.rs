use crate::cli::{CombineArgs, CombineMode};
use crate::config::models::AppConfig;
use crate::error::Result;
use bondgraph::core::models::bond_list::BondList;
use tracing::info;

pub fn run(args: CombineArgs, config: &AppConfig) -> Result<()> {
    let first = super::read_bond_list(&args.first)?;
    let second = super::read_bond_list(&args.second)?;
    let combined = combine(&first, &second, args.mode)?;
    info!("Combined tables ({:?}): {}", args.mode, combined);
    super::write_bond_list(&combined, &args.output, config)
}

fn combine(first: &BondList, second: &BondList, mode: CombineMode) -> Result<BondList> {
    Ok(match mode {
        CombineMode::Merge => first.merge(second)?,
        CombineMode::Concat => first.concatenate(second)?,
    })
}
