// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stockwatch core: status classification and filtering for dashboard records.
//!
//! The engine is a stateless function library. Callers own their collections
//! and pass them in per query:
//! - [`classify`] derives `LowStock`/`Sufficient` or `Occupied`/`Available`
//! - [`filter_by_status`], [`filter_by_range`], [`filter_by_category`] and
//!   [`filter_by_name`] return the kept records in input order
//! - [`summarize`] produces value counts per status
#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod record;
pub mod status;
pub mod summary;

pub use error::{EngineError, EngineResult, InvalidReason, ParseStatusError};
pub use filter::{
    distinct_names, expiring_within, filter_by_category, filter_by_name, filter_by_range,
    filter_by_status, Field, FieldAccessor, TextFilter, ALL,
};
pub use record::{Record, RecordKind};
pub use status::{classify, Status};
pub use summary::{summarize, StatusCounts};
