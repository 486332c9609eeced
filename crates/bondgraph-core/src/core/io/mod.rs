//! Provides input/output functionality for bond tables.
//!
//! A bond list owns no file format; this module contains the trait-based
//! interface for persisting exported bond rows and its comma separated
//! implementation.

pub mod table;
pub mod traits;
