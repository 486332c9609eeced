//! # Topology Module
//!
//! Residue bond templates: a reference of which named atoms are bonded within
//! each residue type, and the conversion of a named atom collection into a
//! [`BondList`](crate::core::models::bond_list::BondList).
//!
//! ## Usage
//!
//! Templates are loaded from TOML files. Residue boundaries are computed by
//! the caller and passed in as spans.
//!
//! ```ignore
//! use bondgraph::core::topology::registry::{BondTemplateRegistry, ResidueSpan};
//!
//! let registry = BondTemplateRegistry::load(Path::new("templates.toml"))?;
//! let bonds = registry.connect_via_residue_names(atom_count, &spans)?;
//! ```

pub mod registry;
