//! Table capacity and its supported range

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of seats at a table, always within [`TableCapacity::MIN`]..=[`TableCapacity::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TableCapacity(u8);

impl TableCapacity {
    /// Smallest supported table (heads-up)
    pub const MIN: Self = Self(2);
    /// Largest supported table
    pub const MAX: Self = Self(8);

    /// Exact capacity, `None` when outside the supported range
    pub fn new(seats: i64) -> Option<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&seats) {
            Some(Self(seats as u8))
        } else {
            None
        }
    }

    /// Clamp any raw seat count into the supported range
    pub fn clamped(seats: i64) -> Self {
        let clamped = seats.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8;
        if clamped as i64 != seats {
            tracing::debug!(requested = seats, used = clamped, "table capacity clamped");
        }
        Self(clamped)
    }

    /// Seat count as an index bound
    pub fn seats(&self) -> usize {
        self.0 as usize
    }

    /// Every supported capacity, smallest first
    pub fn all() -> impl Iterator<Item = TableCapacity> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<i64> for TableCapacity {
    type Error = String;

    fn try_from(seats: i64) -> Result<Self, Self::Error> {
        Self::new(seats).ok_or_else(|| {
            format!(
                "table capacity {} outside supported range {}..={}",
                seats,
                Self::MIN.0,
                Self::MAX.0
            )
        })
    }
}

impl From<TableCapacity> for u8 {
    fn from(capacity: TableCapacity) -> Self {
        capacity.0
    }
}

impl fmt::Display for TableCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-max", self.0)
    }
}
