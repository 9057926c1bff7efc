// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Derived status labels and the classification rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, ParseStatusError};
use crate::record::{Record, RecordKind};

/// Categorical status derived from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Quantity at or below the threshold.
    LowStock,
    /// Quantity above the threshold.
    Sufficient,
    /// Binary resource in use.
    Occupied,
    /// Binary resource free.
    Available,
}

impl Status {
    /// All statuses, quantity-style first.
    pub const ALL: [Self; 4] = [
        Self::LowStock,
        Self::Sufficient,
        Self::Occupied,
        Self::Available,
    ];

    /// Human-facing label, as shown in dashboard tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowStock => "Low Stock",
            Self::Sufficient => "Sufficient",
            Self::Occupied => "Occupied",
            Self::Available => "Available",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Accepts the label (`Low Stock`), the variant name (`LowStock`) or the
    /// kebab form (`low-stock`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "lowstock" => Ok(Self::LowStock),
            "sufficient" => Ok(Self::Sufficient),
            "occupied" => Ok(Self::Occupied),
            "available" => Ok(Self::Available),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// Derive the status of a single record.
///
/// Quantity-style records are `LowStock` when `quantity <= threshold`; the
/// boundary is inclusive. Binary records mirror their occupancy flag.
pub fn classify(record: &Record) -> EngineResult<Status> {
    Ok(match record.kind()? {
        RecordKind::Stock {
            quantity,
            threshold,
        } => {
            if quantity <= threshold {
                Status::LowStock
            } else {
                Status::Sufficient
            }
        }
        RecordKind::Binary { occupied: true } => Status::Occupied,
        RecordKind::Binary { occupied: false } => Status::Available,
    })
}
