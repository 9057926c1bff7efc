// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Status value counts.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::EngineResult;
use crate::record::Record;
use crate::status::{classify, Status};

/// Count of records per derived status. Statuses with no records are absent.
pub type StatusCounts = BTreeMap<Status, usize>;

/// Group records by [`classify`] and count each group.
pub fn summarize<'a, I>(records: I) -> EngineResult<StatusCounts>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = StatusCounts::new();
    for record in records {
        *counts.entry(classify(record)?).or_insert(0) += 1;
    }
    debug!(groups = counts.len(), "summarize");
    Ok(counts)
}
