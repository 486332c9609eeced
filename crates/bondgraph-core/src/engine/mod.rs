//! # Engine Module
//!
//! Read-only graph algorithms over a bond list.
//!
//! - [`connectivity`] - Connected components and reachability from a root atom

pub mod connectivity;
