//! # Core Module
//!
//! Fundamental data structures for describing which atoms of an external atom
//! collection are bonded.
//!
//! ## Architecture
//!
//! - **Bond Representation** ([`models`]) - Canonical bond records, the bond list and its edits
//! - **File I/O** ([`io`]) - Reading and writing bond tables
//! - **Structural Knowledge** ([`topology`]) - Residue bond templates as a source of bond rows
//!
//! ## Invariants
//!
//! Every bond stores its lower atom index first, no atom pair is stored
//! twice, and every index is below the atom count of its list. All mutation
//! goes through [`models::bond_list::BondList`], which enforces these rules.

pub mod io;
pub mod models;
pub mod topology;
