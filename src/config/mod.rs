//! Configuration loading and management for the shift pay engine.
//!
//! This module provides functionality to load rate tables and the rate
//! policy from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shift_rates").unwrap();
//! println!("Slot size: {} minutes", config.policy().slot_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PremiumWindow, RateDiscrepancy, RatePolicy, RateTable, RatesConfig};
