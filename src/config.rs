use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulationError};

/// business parameters for the simulation engine
///
/// Bounds and the fixed monthly rate are data, not code: they can be loaded
/// from JSON at startup so the lending desk can adjust them without a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub min_loan_amount: Money,
    pub max_loan_amount: Money,
    pub min_term_months: u32,
    pub max_term_months: u32,
    /// fixed monthly interest rate as a decimal fraction (0.0119 = 1.19% a.m.)
    pub monthly_rate: Rate,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_loan_amount: Money::from_major(75_000),
            max_loan_amount: Money::from_major(5_000_000),
            min_term_months: 36,
            max_term_months: 180,
            monthly_rate: Rate::from_decimal(dec!(0.0119)),
        }
    }
}

impl SimulationConfig {
    /// load configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig =
            serde_json::from_str(json).map_err(|e| SimulationError::InvalidConfiguration {
                message: format!("config parse failed: {e}"),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// reject configurations that could never validate an input
    pub fn validate(&self) -> Result<()> {
        if !self.min_loan_amount.is_positive() || self.max_loan_amount < self.min_loan_amount {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "loan amount band [{}, {}] is empty or non-positive",
                    self.min_loan_amount, self.max_loan_amount
                ),
            });
        }
        if self.min_term_months == 0 || self.max_term_months < self.min_term_months {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "term band [{}, {}] is empty",
                    self.min_term_months, self.max_term_months
                ),
            });
        }
        if !self.monthly_rate.is_positive() {
            return Err(SimulationError::InvalidInterestRate {
                rate: self.monthly_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.min_loan_amount, Money::from_major(75_000));
        assert_eq!(config.max_loan_amount, Money::from_major(5_000_000));
        assert_eq!(config.min_term_months, 36);
        assert_eq!(config.max_term_months, 180);
        assert_eq!(config.monthly_rate, Rate::from_decimal(dec!(0.0119)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "min_loan_amount": "100000",
            "max_loan_amount": "2000000",
            "min_term_months": 48,
            "max_term_months": 120,
            "monthly_rate": "0.0149"
        }"#;

        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.min_loan_amount, Money::from_major(100_000));
        assert_eq!(config.max_term_months, 120);
        assert_eq!(config.monthly_rate, Rate::from_decimal(dec!(0.0149)));
    }

    #[test]
    fn test_rejects_empty_bands() {
        let mut config = SimulationConfig::default();
        config.max_loan_amount = Money::from_major(10_000);
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfiguration { .. })
        ));

        let mut config = SimulationConfig::default();
        config.min_term_months = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let mut config = SimulationConfig::default();
        config.monthly_rate = Rate::ZERO;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInterestRate { .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimulationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = SimulationConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
