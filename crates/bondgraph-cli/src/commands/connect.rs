use crate::cli::ConnectArgs;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use bondgraph::core::topology::registry::{BondTemplateRegistry, ResidueSpan};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The residue layout of an atom collection.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ResidueLayout {
    atom_count: usize,
    #[serde(rename = "residue", default)]
    residues: Vec<ResidueSpan>,
}

impl ResidueLayout {
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

pub fn run(args: ConnectArgs, config: &AppConfig) -> Result<()> {
    let registry =
        BondTemplateRegistry::load(&args.templates).map_err(|e| CliError::FileParsing {
            path: args.templates.clone(),
            source: e.into(),
        })?;
    info!("Loaded bond templates for {} residue types", registry.len());

    let layout = ResidueLayout::from_file(&args.residues)?;
    let list = registry.connect_via_residue_names(layout.atom_count, &layout.residues)?;
    info!(
        "Connected {} residues: {}",
        layout.residues.len(),
        list
    );
    super::write_bond_list(&list, &args.output, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::read_bond_list;
    use crate::commands::test_utils::*;
    use bondgraph::core::models::bond::BondOrder;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATES: &str = r#"
        [HOH]
        bonds = [["O", "H1", "single"], ["O", "H2", "single"]]
    "#;

    const RESIDUES: &str = r#"
        atom-count = 7

        [[residue]]
        name = "HOH"
        start = 0
        atom-names = ["O", "H1", "H2"]

        [[residue]]
        name = "HOH"
        start = 3
        atom-names = ["O", "H1", "H2"]

        [[residue]]
        name = "NA"
        start = 6
        atom-names = ["NA"]
    "#;

    #[test]
    fn builds_bonds_for_every_templated_residue() {
        let dir = tempdir().unwrap();
        let templates = dir.path().join("templates.toml");
        let residues = dir.path().join("residues.toml");
        fs::write(&templates, TEMPLATES).unwrap();
        fs::write(&residues, RESIDUES).unwrap();

        let args = ConnectArgs {
            residues,
            templates,
            output: output_to(dir.path().join("out.csv")),
        };
        run(args, &default_config()).unwrap();

        let list = read_bond_list(&dir.path().join("out.csv")).unwrap();
        assert_eq!(list.atom_count(), 7);
        assert_eq!(
            list.as_array(),
            vec![
                (0, 1, BondOrder::Single),
                (0, 2, BondOrder::Single),
                (3, 4, BondOrder::Single),
                (3, 5, BondOrder::Single),
            ]
        );
    }

    #[test]
    fn layout_without_residues_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("residues.toml");
        fs::write(&path, "atom-count = 2\n").unwrap();
        let layout = ResidueLayout::from_file(&path).unwrap();
        assert_eq!(layout.atom_count, 2);
        assert!(layout.residues.is_empty());
    }

    #[test]
    fn malformed_layout_is_a_parsing_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("residues.toml");
        fs::write(&path, "atoms = 2\n").unwrap();
        assert!(matches!(
            ResidueLayout::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }
}
