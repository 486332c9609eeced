use crate::core::models::bond::{BondOrder, ParseBondOrderError};
use crate::core::models::bond_list::BondList;
use crate::core::models::error::BondListError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
enum TemplateBondEntry {
    Pair(String, String),
    WithOrder(String, String, String),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RawResidueTemplate {
    bonds: Vec<TemplateBondEntry>,
}

/// An intra-residue bond between two named atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBond {
    pub atom_name1: String,
    pub atom_name2: String,
    pub order: BondOrder,
}

/// The atoms of one residue inside the annotated atom collection.
///
/// Residue boundaries are supplied by the caller; `start` is the index of the
/// residue's first atom and `atom_names` lists its atoms in collection order.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ResidueSpan {
    pub name: String,
    pub start: usize,
    pub atom_names: Vec<String>,
}

/// Reference bonds of each residue type, keyed by residue name.
#[derive(Debug, Clone, Default)]
pub struct BondTemplateRegistry {
    registry: HashMap<String, Vec<TemplateBond>>,
}

impl BondTemplateRegistry {
    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: HashMap<String, RawResidueTemplate> =
            toml::from_str(&content).map_err(|e| TemplateLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, RawResidueTemplate>) -> Result<Self, TemplateLoadError> {
        let mut registry = HashMap::with_capacity(raw.len());
        for (residue_name, template) in raw {
            let mut bonds = Vec::with_capacity(template.bonds.len());
            for entry in template.bonds {
                let (atom_name1, atom_name2, order) = match entry {
                    TemplateBondEntry::Pair(a, b) => (a, b, BondOrder::Any),
                    TemplateBondEntry::WithOrder(a, b, order) => {
                        let order = order.parse::<BondOrder>().map_err(|source| {
                            TemplateLoadError::InvalidBondOrder {
                                residue: residue_name.clone(),
                                source,
                            }
                        })?;
                        (a, b, order)
                    }
                };
                bonds.push(TemplateBond {
                    atom_name1,
                    atom_name2,
                    order,
                });
            }
            registry.insert(residue_name, bonds);
        }
        debug!(residues = registry.len(), "Loaded bond templates");
        Ok(Self { registry })
    }

    pub fn get(&self, residue_name: &str) -> Option<&[TemplateBond]> {
        self.registry.get(residue_name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Builds the intra-residue bonds of an atom collection from the templates.
    ///
    /// Template bonds whose atoms are missing from a residue are skipped, as
    /// are residues without a template.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::AtomCountMismatch`] if a residue extends past
    /// `atom_count`, and the construction errors of [`BondList::from_bonds`].
    pub fn connect_via_residue_names(
        &self,
        atom_count: usize,
        residues: &[ResidueSpan],
    ) -> Result<BondList, BondListError> {
        let mut triples = Vec::new();
        for residue in residues {
            let end = residue.start + residue.atom_names.len();
            if end > atom_count {
                return Err(BondListError::AtomCountMismatch {
                    expected: atom_count,
                    found: end,
                });
            }
            let Some(template) = self.get(&residue.name) else {
                warn!(
                    residue = %residue.name,
                    start = residue.start,
                    "No bond template for residue, skipping"
                );
                continue;
            };

            let mut positions: HashMap<&str, usize> = HashMap::new();
            for (offset, name) in residue.atom_names.iter().enumerate() {
                positions.entry(name.as_str()).or_insert(residue.start + offset);
            }
            for bond in template {
                if let (Some(&i), Some(&j)) = (
                    positions.get(bond.atom_name1.as_str()),
                    positions.get(bond.atom_name2.as_str()),
                ) {
                    triples.push((i, j, bond.order));
                }
            }
        }
        BondList::from_bonds(atom_count, triples)
    }
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid bond order in template '{residue}': {source}")]
    InvalidBondOrder {
        residue: String,
        source: ParseBondOrderError,
    },
}
