// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved dashboard preferences (default filters + quantity slider).

use serde::{Deserialize, Serialize};
use stockwatch_core::{Status, TextFilter};
use thiserror::Error;

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key under which [`DashboardPrefs`] are stored.
pub const PREFS_KEY: &str = "dashboard";

/// Default filter values a dashboard starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardPrefs {
    /// Initial name filter (`"All"` disables it).
    pub name_filter: TextFilter,
    /// Initial category filter (`"All"` disables it).
    pub category_filter: TextFilter,
    /// Initial status filter; `None` shows every status.
    pub status: Option<Status>,
    /// Bounds and start value of the "at or below quantity" slider.
    pub quantity_slider: QuantitySlider,
}

/// Integer slider over stock quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySlider {
    /// Smallest selectable value.
    pub min: u32,
    /// Largest selectable value.
    pub max: u32,
    /// Value selected on load.
    pub default: u32,
}

impl Default for QuantitySlider {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            default: 10,
        }
    }
}

/// Invalid or unreadable preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Underlying store failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Slider bounds are inverted.
    #[error("quantity slider min {min} exceeds max {max}")]
    SliderBounds {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
    /// Slider start value lies outside its bounds.
    #[error("quantity slider default {default} outside [{min}, {max}]")]
    SliderDefault {
        /// Configured start value.
        default: u32,
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
}

impl QuantitySlider {
    /// Check `min <= default <= max`.
    pub fn validate(&self) -> Result<(), PrefsError> {
        let Self { min, max, default } = *self;
        if min > max {
            return Err(PrefsError::SliderBounds { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(PrefsError::SliderDefault { default, min, max });
        }
        Ok(())
    }

    /// Clamp a requested value into the slider's bounds, as dragging the
    /// slider past either end would.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

impl DashboardPrefs {
    /// Validate every field that has constraints.
    pub fn validate(&self) -> Result<(), PrefsError> {
        self.quantity_slider.validate()
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load dashboard prefs, falling back to defaults when none are saved.
    pub fn load_prefs(&self) -> Result<DashboardPrefs, PrefsError> {
        let prefs = self.load::<DashboardPrefs>(PREFS_KEY)?.unwrap_or_default();
        prefs.validate()?;
        Ok(prefs)
    }

    /// Validate and persist dashboard prefs.
    pub fn save_prefs(&self, prefs: &DashboardPrefs) -> Result<(), PrefsError> {
        prefs.validate()?;
        self.save(PREFS_KEY, prefs)?;
        Ok(())
    }
}
