use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BondListError {
    #[error("Atom index {index} is out of range for a bond list of {atom_count} atoms")]
    IndexOutOfRange { index: i64, atom_count: usize },

    #[error("Index offset must be non-negative, got {0}")]
    NegativeOffset(isize),

    #[error("Atom count overflow: shifting {atom_count} atoms by {offset} exceeds the index range")]
    AtomCountOverflow { atom_count: usize, offset: usize },

    #[error("Root atom {root} is out of range for a bond list of {atom_count} atoms")]
    RootOutOfRange { root: usize, atom_count: usize },

    #[error("Atom count mismatch: expected {expected}, found {found}")]
    AtomCountMismatch { expected: usize, found: usize },

    #[error("Bond row {row} has {width} columns, expected 2 or 3")]
    InvalidRowWidth { row: usize, width: usize },

    #[error("Selection mask has length {found}, expected {expected}")]
    MaskLengthMismatch { expected: usize, found: usize },

    #[error("Atom {0} cannot be bonded to itself")]
    SelfBond(usize),

    #[error("Invalid bond order code: {0}")]
    InvalidBondOrder(i64),

    #[error("Failed to allocate bond buffers: {0}")]
    Allocation(#[from] TryReserveError),
}
