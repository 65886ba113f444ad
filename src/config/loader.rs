//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate tables
//! and the rate policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::{RateDiscrepancy, RatePolicy, RateTable, RatesConfig};

/// Loads and provides access to the pay configuration.
///
/// # Directory Structure
///
/// ```text
/// config/shift_rates/
/// ├── policy.yaml   # Slot size and Morning-Premium window
/// └── rates.yaml    # shift_pay and period_summary rate tables
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shift_rates").unwrap();
/// println!("Saturday rate: {}", loader.shift_pay_rates().saturday);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: RatePolicy,
    rates: RatesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Both tables are loaded as written. If they price any bucket
    /// differently, a warning is logged for every such bucket; see
    /// [`ConfigLoader::rate_discrepancies`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a file is missing
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML for its type
    /// - [`EngineError::InvalidConfig`] if a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<RatePolicy>(&path.join("policy.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        let loader = Self::from_parts(policy, rates)?;
        for discrepancy in loader.rate_discrepancies() {
            warn!(
                bucket = %discrepancy.bucket,
                shift_pay = %discrepancy.shift_pay,
                period_summary = %discrepancy.period_summary,
                "Rate tables disagree; per-shift pay and period totals will not reconcile"
            );
        }

        Ok(loader)
    }

    /// Builds a loader from already-constructed parts, validating them.
    pub fn from_parts(policy: RatePolicy, rates: RatesConfig) -> EngineResult<Self> {
        policy.validate()?;
        rates.shift_pay.validate("shift_pay")?;
        rates.period_summary.validate("period_summary")?;
        Ok(Self { policy, rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the slot size and premium window.
    pub fn policy(&self) -> &RatePolicy {
        &self.policy
    }

    /// Returns both rate tables.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }

    /// Returns the table used to price a single shift.
    pub fn shift_pay_rates(&self) -> &RateTable {
        &self.rates.shift_pay
    }

    /// Returns the table used for reporting-period totals.
    pub fn period_summary_rates(&self) -> &RateTable {
        &self.rates.period_summary
    }

    /// Returns every bucket the two tables price differently.
    pub fn rate_discrepancies(&self) -> Vec<RateDiscrepancy> {
        self.rates.discrepancies()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            policy: RatePolicy::default(),
            rates: RatesConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateBucket;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/shift_rates"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &RatePolicy::default());
        assert_eq!(loader.rates(), &RatesConfig::default());
    }

    #[test]
    fn test_shipped_tables_match_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.shift_pay_rates(), &RateTable::shift_pay());
        assert_eq!(loader.period_summary_rates(), &RateTable::period_summary());
    }

    #[test]
    fn test_shipped_saturday_rates_are_reported_as_discrepancy() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let discrepancies = loader.rate_discrepancies();
        assert_eq!(discrepancies.len(), 1);
        assert_eq!(discrepancies[0].bucket, RateBucket::Saturday);
        assert_eq!(discrepancies[0].shift_pay, dec("16.0"));
        assert_eq!(discrepancies[0].period_summary, dec("16.5"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_parts_rejects_invalid_policy() {
        let policy = RatePolicy {
            slot_minutes: 0,
            ..RatePolicy::default()
        };

        let result = ConfigLoader::from_parts(policy, RatesConfig::default());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_from_parts_rejects_negative_rate() {
        let rates = RatesConfig {
            period_summary: RateTable {
                saturday: dec("-1"),
                ..RateTable::period_summary()
            },
            ..RatesConfig::default()
        };

        match ConfigLoader::from_parts(RatePolicy::default(), rates) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("period_summary"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_matches_shipped_config() {
        let loaded = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::default();

        assert_eq!(loaded.policy(), builtin.policy());
        assert_eq!(loaded.rates(), builtin.rates());
    }
}
