// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Predicate filters over record collections.
//!
//! Every filter borrows its input and returns the kept records in their
//! original relative order. Nothing is cached between calls and the input is
//! never mutated, so filters compose by feeding one result into the next.

use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::record::Record;
use crate::status::{classify, Status};

/// Literal sentinel that disables a text filter.
pub const ALL: &str = "All";

/// Text filter applied to names and categories.
///
/// `"All"` is matched literally and never compared against data. Any other
/// value keeps fields that contain it as a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextFilter {
    /// Keep everything.
    #[default]
    All,
    /// Keep fields containing this needle (case-insensitive).
    Contains(String),
}

impl TextFilter {
    /// Whether a field value passes the filter. Absent fields only pass `All`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Contains(needle) => value.is_some_and(|v| {
                v.to_lowercase().contains(&needle.to_lowercase())
            }),
        }
    }
}

impl From<&str> for TextFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Contains(value.to_owned())
        }
    }
}

impl From<String> for TextFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Contains(value)
        }
    }
}

impl From<TextFilter> for String {
    fn from(value: TextFilter) -> Self {
        match value {
            TextFilter::All => ALL.to_owned(),
            TextFilter::Contains(needle) => needle,
        }
    }
}

/// Numeric column a range filter reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// `Record::quantity`.
    Quantity,
    /// `Record::threshold`.
    Threshold,
    /// A named entry of `Record::metrics`.
    Metric(String),
}

/// Reads a numeric value out of a record for range filtering.
pub trait FieldAccessor {
    /// The field value, or `None` when the record does not carry it.
    fn value_of(&self, record: &Record) -> Option<f64>;
}

impl FieldAccessor for Field {
    fn value_of(&self, record: &Record) -> Option<f64> {
        match self {
            Self::Quantity => record.quantity,
            Self::Threshold => record.threshold,
            Self::Metric(name) => record.metric(name),
        }
    }
}

impl<F> FieldAccessor for F
where
    F: Fn(&Record) -> Option<f64>,
{
    fn value_of(&self, record: &Record) -> Option<f64> {
        self(record)
    }
}

/// Keep records whose derived status equals `status`.
pub fn filter_by_status<'a, I>(records: I, status: Status) -> EngineResult<Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = 0usize;
    let mut kept = Vec::new();
    for record in records {
        seen += 1;
        if classify(record)? == status {
            kept.push(record);
        }
    }
    debug!(%status, seen, kept = kept.len(), "filter_by_status");
    Ok(kept)
}

/// Keep records with `low <= field <= high`; both bounds inclusive.
///
/// Every record is validated first, like [`filter_by_status`]; records that
/// are valid but do not carry the field are dropped.
pub fn filter_by_range<'a, I, A>(
    records: I,
    field: A,
    low: f64,
    high: f64,
) -> EngineResult<Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
    A: FieldAccessor,
{
    if low.is_nan() || high.is_nan() || low > high {
        return Err(EngineError::InvalidRange { low, high });
    }
    let mut kept = Vec::new();
    for record in records {
        record.kind()?;
        if field
            .value_of(record)
            .is_some_and(|v| low <= v && v <= high)
        {
            kept.push(record);
        }
    }
    debug!(low, high, kept = kept.len(), "filter_by_range");
    Ok(kept)
}

/// Keep records whose category passes `filter`.
pub fn filter_by_category<'a, I>(records: I, filter: &TextFilter) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| filter.matches(r.category.as_deref()))
        .collect()
}

/// Keep records whose identity passes `filter`.
pub fn filter_by_name<'a, I>(records: I, filter: &TextFilter) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| filter.matches(Some(&r.identity)))
        .collect()
}

/// Distinct identities in first-seen order.
pub fn distinct_names<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        if !names.contains(&record.identity.as_str()) {
            names.push(&record.identity);
        }
    }
    names
}

/// Keep records that expire on or before `as_of + horizon_days`.
///
/// Records already past their expiry are kept; records without an expiry
/// date are dropped.
pub fn expiring_within<'a, I>(records: I, as_of: Date, horizon_days: u16) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let cutoff = as_of.saturating_add(Duration::days(i64::from(horizon_days)));
    records
        .into_iter()
        .filter(|r| r.expiry.is_some_and(|e| e <= cutoff))
        .collect()
}
