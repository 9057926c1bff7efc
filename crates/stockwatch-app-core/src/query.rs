// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Request/response queries for one dashboard interaction.
//!
//! A front end builds a [`DashboardQuery`] from its widget state every time
//! the user touches a control and renders the returned [`DashboardView`].
//! Nothing is remembered between runs.

use serde::{Deserialize, Serialize};
use stockwatch_core::{
    filter_by_category, filter_by_name, filter_by_range, filter_by_status, summarize,
    EngineResult, Field, Record, Status, StatusCounts, TextFilter,
};
use tracing::debug;

use crate::prefs::{DashboardPrefs, QuantitySlider};

/// Widget state for one dashboard render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    /// Name select box.
    pub name: TextFilter,
    /// Category select box.
    pub category: TextFilter,
    /// Status select box; `None` keeps every status.
    pub status: Option<Status>,
    /// Optional slider over a named metric (age, priority, ...).
    pub metric_range: Option<MetricRange>,
    /// "At or below" quantity slider, applied to the whole collection.
    pub quantity_ceiling: Option<f64>,
}

/// Inclusive range over one record metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    /// Metric name as stored in `Record::metrics`.
    pub metric: String,
    /// Inclusive lower bound.
    pub low: f64,
    /// Inclusive upper bound.
    pub high: f64,
}

/// Everything a dashboard renders for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Rows passing the name, category, status and metric filters.
    pub rows: Vec<Record>,
    /// Status value counts of `rows`.
    pub summary: StatusCounts,
    /// Records with `0 <= quantity <= ceiling`, when a ceiling was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_or_below: Option<Vec<Record>>,
}

impl DashboardQuery {
    /// Seed a query from saved preferences.
    pub fn from_prefs(prefs: &DashboardPrefs) -> Self {
        Self {
            name: prefs.name_filter.clone(),
            category: prefs.category_filter.clone(),
            status: prefs.status,
            metric_range: None,
            quantity_ceiling: None,
        }
        .with_slider(&prefs.quantity_slider, prefs.quantity_slider.default)
    }

    /// Set the quantity ceiling from a slider position, clamped into the
    /// slider's bounds.
    pub fn with_slider(mut self, slider: &QuantitySlider, value: u32) -> Self {
        self.quantity_ceiling = Some(f64::from(slider.clamp(value)));
        self
    }

    /// Run the query against a caller-owned collection.
    ///
    /// Filters apply in order: name, category, status, metric range. The
    /// quantity ceiling reads the unfiltered collection, like the standalone
    /// low-stock table it feeds.
    pub fn run(&self, records: &[Record]) -> EngineResult<DashboardView> {
        let named = filter_by_name(records, &self.name);
        let in_category = filter_by_category(named, &self.category);
        let mut rows = match self.status {
            Some(status) => filter_by_status(in_category, status)?,
            None => in_category,
        };
        if let Some(range) = &self.metric_range {
            rows = filter_by_range(
                rows,
                Field::Metric(range.metric.clone()),
                range.low,
                range.high,
            )?;
        }
        let summary = summarize(rows.iter().copied())?;

        let at_or_below = match self.quantity_ceiling {
            Some(ceiling) => Some(
                filter_by_range(records, Field::Quantity, 0.0, ceiling)?
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            None => None,
        };

        debug!(
            total = records.len(),
            rows = rows.len(),
            "dashboard query complete"
        );
        Ok(DashboardView {
            rows: rows.into_iter().cloned().collect(),
            summary,
            at_or_below,
        })
    }
}
