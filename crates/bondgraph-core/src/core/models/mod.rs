//! # Core Models Module
//!
//! Data structures representing the bonds of an atom collection.
//!
//! ## Key Components
//!
//! - [`bond`] - Bond orders and canonical bond records
//! - [`bond_list`] - The bond table with its queries and single-bond edits
//! - [`redundancy`] - Collapsing duplicate atom pairs after bulk construction
//! - [`adjacency`] - Per-atom partner lists and adjacency matrices
//! - [`selection`] - Slicing a bond list alongside its atom collection
//! - [`combine`] - Merging, concatenating and shifting bond lists
//! - [`error`] - Errors raised by bond list operations
//!
//! ## Usage
//!
//! ```ignore
//! use bondgraph::core::models::{bond::BondOrder, bond_list::BondList, selection::Selection};
//!
//! let mut bonds = BondList::from_pairs(4, [(0, 1), (1, 2)])?;
//! bonds.add_bond(2, 3, BondOrder::Double)?;
//! let head = bonds.select(&Selection::Range(0..3))?;
//! assert_eq!(head.bond_count(), 2);
//! ```

pub mod adjacency;
pub mod bond;
pub mod bond_list;
pub mod combine;
pub mod error;
pub(crate) mod redundancy;
pub mod selection;
