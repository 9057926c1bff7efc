// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Stockwatch front ends (config, prefs, queries).
//! Keeps presentation adapters thin and framework-agnostic.

pub mod config;
pub mod prefs;
pub mod query;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use prefs::{DashboardPrefs, PrefsError, QuantitySlider, PREFS_KEY};
pub use query::{DashboardQuery, DashboardView, MetricRange};
