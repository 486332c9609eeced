use super::error::BondListError;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The multiplicity or class of a chemical bond.
///
/// The discriminants are the integer codes used by every tabular export of a
/// [`BondList`](super::bond_list::BondList), so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum BondOrder {
    /// The order is unknown or irrelevant.
    #[default]
    Any = 0,
    Single = 1,
    Double = 2,
    Triple = 3,
    Quadruple = 4,
    Aromatic = 5,
}

static BOND_ORDER_ALIASES: Map<&'static str, BondOrder> = phf_map! {
    "0" => BondOrder::Any, "any" => BondOrder::Any, "unspecified" => BondOrder::Any,
    "1" => BondOrder::Single, "s" => BondOrder::Single, "single" => BondOrder::Single,
    "2" => BondOrder::Double, "d" => BondOrder::Double, "double" => BondOrder::Double,
    "3" => BondOrder::Triple, "t" => BondOrder::Triple, "triple" => BondOrder::Triple,
    "4" => BondOrder::Quadruple, "q" => BondOrder::Quadruple, "quadruple" => BondOrder::Quadruple,
    "5" => BondOrder::Aromatic, "ar" => BondOrder::Aromatic, "aromatic" => BondOrder::Aromatic,
};

impl BondOrder {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for BondOrder {
    type Error = BondListError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Any),
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            4 => Ok(Self::Quadruple),
            5 => Ok(Self::Aromatic),
            other => Err(BondListError::InvalidBondOrder(other)),
        }
    }
}

impl From<BondOrder> for i64 {
    fn from(order: BondOrder) -> Self {
        order.code()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(pub String);

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BOND_ORDER_ALIASES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseBondOrderError(s.to_string()))
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Any => "Any",
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Quadruple => "Quadruple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

/// A single bond record in canonical form (`atom1 < atom2`).
///
/// Fields are private so the canonical ordering cannot be broken from outside;
/// use [`Bond::canonical`] to build one from an arbitrary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bond {
    atom1: usize,
    atom2: usize,
    order: BondOrder,
}

impl Bond {
    /// Builds a bond from two atom indices in any order.
    ///
    /// # Errors
    ///
    /// Returns [`BondListError::SelfBond`] if both indices are equal.
    pub fn canonical(i: usize, j: usize, order: BondOrder) -> Result<Self, BondListError> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Ok(Self {
                atom1: i,
                atom2: j,
                order,
            }),
            std::cmp::Ordering::Greater => Ok(Self {
                atom1: j,
                atom2: i,
                order,
            }),
            std::cmp::Ordering::Equal => Err(BondListError::SelfBond(i)),
        }
    }

    pub fn atom1(&self) -> usize {
        self.atom1
    }

    pub fn atom2(&self) -> usize {
        self.atom2
    }

    pub fn order(&self) -> BondOrder {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: BondOrder) {
        self.order = order;
    }

    /// The canonical `(lower, higher)` key of this bond.
    pub fn pair(&self) -> (usize, usize) {
        (self.atom1, self.atom2)
    }

    pub fn as_tuple(&self) -> (usize, usize, BondOrder) {
        (self.atom1, self.atom2, self.order)
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }

    /// Returns the bonding partner of `atom`, if `atom` takes part in this bond.
    pub fn partner(&self, atom: usize) -> Option<usize> {
        if self.atom1 == atom {
            Some(self.atom2)
        } else if self.atom2 == atom {
            Some(self.atom1)
        } else {
            None
        }
    }

    // Shifting both indices by the same amount keeps the pair canonical.
    pub(crate) fn shifted(&self, offset: usize) -> Self {
        Self {
            atom1: self.atom1 + offset,
            atom2: self.atom2 + offset,
            order: self.order,
        }
    }

    pub(crate) fn remapped(&self, atom1: usize, atom2: usize) -> Self {
        debug_assert!(atom1 < atom2);
        Self {
            atom1,
            atom2,
            order: self.order,
        }
    }
}
