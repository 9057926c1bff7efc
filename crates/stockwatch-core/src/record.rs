// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dashboard records and their validated kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::{EngineError, EngineResult, InvalidReason};

/// One row of dashboard data (a medicine, bed, patient or equipment entry).
///
/// The struct mirrors the loose shape a loader hands over: every mode field is
/// optional, and [`Record::kind`] decides whether the combination is valid.
/// Well-formed records are easiest to build through [`Record::stock`] and
/// [`Record::binary`].
///
/// Invariants
/// - `identity` is non-empty; it need not be unique within a collection.
/// - Exactly one mode is present: `quantity` + `threshold`, or `occupied`.
/// - `quantity` and `threshold` are finite and non-negative.
/// - Status is never stored; it is derived on demand by [`crate::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name or id of the entity.
    pub identity: String,
    /// Units on hand (quantity-style records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Minimum sufficient quantity (quantity-style records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Occupancy flag (binary-resource-style records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied: Option<bool>,
    /// Free-form classification such as a ward or resource type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Expiry date for perishable stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Date>,
    /// Extra numeric columns (patient age, priority, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, f64>,
}

/// Validated view of a record's mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordKind {
    /// Inventory-style record compared against a threshold.
    Stock {
        /// Units on hand.
        quantity: f64,
        /// Minimum sufficient quantity.
        threshold: f64,
    },
    /// Binary resource such as a bed or a device.
    Binary {
        /// Whether the resource is in use.
        occupied: bool,
    },
}

impl Record {
    /// Build a quantity-style record.
    pub fn stock(identity: impl Into<String>, quantity: f64, threshold: f64) -> Self {
        Self {
            quantity: Some(quantity),
            threshold: Some(threshold),
            ..Self::bare(identity)
        }
    }

    /// Build a binary-resource-style record.
    pub fn binary(identity: impl Into<String>, occupied: bool) -> Self {
        Self {
            occupied: Some(occupied),
            ..Self::bare(identity)
        }
    }

    fn bare(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            quantity: None,
            threshold: None,
            occupied: None,
            category: None,
            expiry: None,
            metrics: BTreeMap::new(),
        }
    }

    /// Attach a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach an expiry date.
    pub fn with_expiry(mut self, expiry: Date) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Attach (or overwrite) a named metric.
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Look up a named metric.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Validate the record and return its kind.
    pub fn kind(&self) -> EngineResult<RecordKind> {
        let fail = |reason| Err(EngineError::invalid_record(&self.identity, reason));

        if self.identity.is_empty() {
            return fail(InvalidReason::EmptyIdentity);
        }

        match (self.quantity, self.threshold, self.occupied) {
            (None, None, None) => fail(InvalidReason::MissingMode),
            (None, None, Some(occupied)) => Ok(RecordKind::Binary { occupied }),
            (_, _, Some(_)) => fail(InvalidReason::MixedModes),
            (Some(quantity), Some(threshold), None) => {
                if !is_non_negative(quantity) {
                    return fail(InvalidReason::BadQuantity);
                }
                if !is_non_negative(threshold) {
                    return fail(InvalidReason::BadThreshold);
                }
                Ok(RecordKind::Stock {
                    quantity,
                    threshold,
                })
            }
            (Some(_), None, None) | (None, Some(_), None) => fail(InvalidReason::IncompleteStock),
        }
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
