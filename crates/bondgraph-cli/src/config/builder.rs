use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::error::{CliError, Result};
use bondgraph::core::io::table::CsvWriteOptions;
use std::path::Path;
use tracing::debug;

pub fn build_config(config_path: Option<&Path>, set_values: &[String]) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };
    let file_config = apply_set_values(file_config, set_values)?;

    let output = file_config.output.unwrap_or_default();
    let traversal = file_config.traversal.unwrap_or_default();

    let config = AppConfig {
        write_options: CsvWriteOptions {
            sort_bonds: output.sort_bonds.unwrap_or(defaults.sort_bonds),
            include_orders: output.include_orders.unwrap_or(defaults.include_orders),
        },
        report_isolated: traversal
            .report_isolated
            .unwrap_or(defaults.report_isolated),
    };
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid boolean value for {}: {}", key, value))
    })
}

fn apply_set_values(mut file_config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "output.sort-bonds" => {
                file_config
                    .output
                    .get_or_insert_with(Default::default)
                    .sort_bonds = Some(parse_bool(key, value)?);
            }
            "output.include-orders" => {
                file_config
                    .output
                    .get_or_insert_with(Default::default)
                    .include_orders = Some(parse_bool(key, value)?);
            }
            "traversal.report-isolated" => {
                file_config
                    .traversal
                    .get_or_insert_with(Default::default)
                    .report_isolated = Some(parse_bool(key, value)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(file_config)
}
