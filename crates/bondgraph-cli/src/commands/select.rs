use crate::cli::{SelectArgs, SelectionArgs};
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use bondgraph::core::models::selection::Selection;
use tracing::info;

pub fn run(args: SelectArgs, config: &AppConfig) -> Result<()> {
    let list = super::read_bond_list(&args.input)?;
    let selection = build_selection(&args.selection)?;
    let selected = list.select(&selection)?;
    info!(
        "Selected {} of {} atoms, keeping {} of {} bonds",
        selected.atom_count(),
        list.atom_count(),
        selected.bond_count(),
        list.bond_count()
    );
    super::write_bond_list(&selected, &args.output, config)
}

fn build_selection(args: &SelectionArgs) -> Result<Selection> {
    let to_arg_error = |e: parser::ParseError| CliError::Argument(e.to_string());
    if let Some(indices) = &args.indices {
        Ok(Selection::Indices(
            parser::parse_indices(indices).map_err(to_arg_error)?,
        ))
    } else if let Some(range) = &args.range {
        Ok(Selection::Range(
            parser::parse_range(range).map_err(to_arg_error)?,
        ))
    } else if let Some(mask) = &args.mask {
        Ok(Selection::Mask(parser::parse_mask(mask).map_err(to_arg_error)?))
    } else {
        Err(CliError::Argument(
            "One of --indices, --range or --mask is required".to_string(),
        ))
    }
}
