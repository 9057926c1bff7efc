// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types surfaced by the classification and filter engine.

use thiserror::Error;

/// Validation failures reported by engine operations.
///
/// Every variant is a local contract violation; nothing here is transient and
/// the engine never retries or repairs input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A record is malformed (missing or contradictory fields, negative
    /// numbers, empty identity).
    #[error("invalid record `{identity}`: {reason}")]
    InvalidRecord {
        /// Identity of the offending record (may be empty).
        identity: String,
        /// What is wrong with it.
        reason: InvalidReason,
    },
    /// A range filter was given bounds that do not describe an interval.
    #[error("invalid range: low {low} is not <= high {high}")]
    InvalidRange {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },
}

/// Why a record failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Identity string is empty.
    #[error("identity is empty")]
    EmptyIdentity,
    /// Neither quantity/threshold nor occupancy is present.
    #[error("record has neither quantity/threshold nor occupancy")]
    MissingMode,
    /// Both quantity-style and binary-style fields are present.
    #[error("record mixes quantity/threshold with occupancy")]
    MixedModes,
    /// Only one of quantity and threshold is present.
    #[error("quantity and threshold must be given together")]
    IncompleteStock,
    /// Quantity is negative or not a number.
    #[error("quantity must be a non-negative number")]
    BadQuantity,
    /// Threshold is negative or not a number.
    #[error("threshold must be a non-negative number")]
    BadThreshold,
}

impl EngineError {
    pub(crate) fn invalid_record(identity: &str, reason: InvalidReason) -> Self {
        Self::InvalidRecord {
            identity: identity.to_owned(),
            reason,
        }
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure to parse a [`crate::Status`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status `{0}` (expected one of: low-stock, sufficient, occupied, available)")]
pub struct ParseStatusError(pub String);
