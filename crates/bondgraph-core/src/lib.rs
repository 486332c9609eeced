//! # bondgraph
//!
//! A compact, index-based representation of the chemical bonds of an atom
//! collection, together with the structural edits and connectivity queries
//! built on top of it.
//!
//! ## Architectural Philosophy
//!
//! Atoms are never stored here. A [`BondList`](core::models::bond_list::BondList)
//! only knows how many atoms the external collection holds and refers to them
//! by position, so every edit of the list mirrors an edit of that collection:
//! selecting atoms, appending a second collection, or shifting indices.
//!
//! - **[`core`]: The Foundation.** The bond list and its invariants
//!   (`models`), tabular persistence of bond rows (`io`), and residue bond
//!   templates that turn named atoms into bond rows (`topology`).
//!
//! - **[`engine`]: Graph Algorithms.** Traversals that only read a bond list,
//!   such as finding the connected component of an atom.

pub mod core;
pub mod engine;
