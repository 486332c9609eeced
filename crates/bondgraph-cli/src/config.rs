//! Configuration layering for the CLI.
//!
//! Values are resolved in this order, later sources winning: built-in
//! defaults, the TOML file given with `--config`, `-S key=value` overrides,
//! and finally per-command flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
