pub mod combine;
pub mod components;
pub mod connect;
pub mod connected;
pub mod info;
pub mod select;

use crate::cli::OutputArgs;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use bondgraph::core::io::table::{CsvBondFile, CsvWriteOptions};
use bondgraph::core::io::traits::BondFile;
use bondgraph::core::models::bond_list::BondList;
use std::path::Path;
use tracing::{debug, info};

pub(crate) fn read_bond_list(path: &Path) -> Result<BondList> {
    debug!("Reading bond table from {:?}", path);
    CsvBondFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Command flags only ever switch a behaviour on top of the resolved config.
pub(crate) fn write_options(output: &OutputArgs, config: &AppConfig) -> CsvWriteOptions {
    let mut options = config.write_options;
    if output.sort_bonds {
        options.sort_bonds = true;
    }
    if output.no_orders {
        options.include_orders = false;
    }
    options
}

pub(crate) fn write_bond_list(
    bond_list: &BondList,
    output: &OutputArgs,
    config: &AppConfig,
) -> Result<()> {
    let options = write_options(output, config);
    CsvBondFile::write_to_path(bond_list, &options, &output.output).map_err(|e| {
        CliError::Other(anyhow::anyhow!(
            "Failed to write bond table to '{}': {}",
            output.output.display(),
            e
        ))
    })?;
    info!(
        "Wrote {} bonds over {} atoms to {:?}",
        bond_list.bond_count(),
        bond_list.atom_count(),
        output.output
    );
    Ok(())
}
