// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Stockwatch crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Fixed literal record collections (medicines, beds, ...)

pub mod config;
pub mod fixtures;

pub use config::InMemoryConfigStore;
pub use fixtures::{
    abc_inventory, equipment_inventory, medicine_inventory, patients, ward_beds,
};
