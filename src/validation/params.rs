use crate::config::SimulationConfig;
use crate::decimal::Money;
use crate::errors::{Result, SimulationError};

/// validates loan amount, term and rate against the configured business bands
pub struct ParameterValidator {
    config: SimulationConfig,
}

impl ParameterValidator {
    /// create validator for the given configuration
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// check every parameter band; first violation wins
    pub fn validate(
        &self,
        loan_amount: Money,
        property_value: Money,
        term_months: u32,
    ) -> Result<()> {
        if loan_amount < self.config.min_loan_amount || loan_amount > self.config.max_loan_amount {
            return Err(SimulationError::LoanAmountOutOfRange {
                amount: loan_amount,
                minimum: self.config.min_loan_amount,
                maximum: self.config.max_loan_amount,
            });
        }

        if !property_value.is_positive() {
            return Err(SimulationError::InvalidPropertyValue {
                value: property_value,
            });
        }

        if term_months < self.config.min_term_months || term_months > self.config.max_term_months {
            return Err(SimulationError::TermOutOfRange {
                term_months,
                minimum: self.config.min_term_months,
                maximum: self.config.max_term_months,
            });
        }

        if !self.config.monthly_rate.is_positive() {
            return Err(SimulationError::InvalidInterestRate {
                rate: self.config.monthly_rate,
            });
        }

        Ok(())
    }

    /// configuration in effect
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
