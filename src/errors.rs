use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::FailureCategory;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("city not found: {city}")]
    CityNotFound {
        city: String,
    },

    #[error("city not served: {city}")]
    CityNotServed {
        city: String,
    },

    #[error("rural-only city requires rural property confirmation: {city}")]
    RuralOnlyUnconfirmed {
        city: String,
    },

    #[error("ltv exceeded: requested {requested_ltv} above cap {cap}, suggested amount {suggested_amount}")]
    LtvExceededGeneral {
        requested_ltv: Rate,
        cap: Rate,
        suggested_amount: Money,
    },

    #[error("rural ltv exceeded: requested {requested_ltv} above cap {cap}, suggested amount {suggested_amount}")]
    LtvExceededRural {
        requested_ltv: Rate,
        cap: Rate,
        suggested_amount: Money,
    },

    #[error("loan amount out of range: {amount} not within [{minimum}, {maximum}]")]
    LoanAmountOutOfRange {
        amount: Money,
        minimum: Money,
        maximum: Money,
    },

    #[error("term out of range: {term_months} months not within [{minimum}, {maximum}]")]
    TermOutOfRange {
        term_months: u32,
        minimum: u32,
        maximum: u32,
    },

    #[error("property value must be positive: {value}")]
    InvalidPropertyValue {
        value: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid policy tier {tier} for city {city}")]
    InvalidPolicyTier {
        city: String,
        tier: u8,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl SimulationError {
    /// failure category the UI classifier acts on
    pub fn category(&self) -> FailureCategory {
        match self {
            SimulationError::CityNotFound { .. } => FailureCategory::CityNotFound,
            SimulationError::CityNotServed { .. } => FailureCategory::CityNotServed,
            SimulationError::RuralOnlyUnconfirmed { .. } => FailureCategory::RuralOnlyUnconfirmed,
            SimulationError::LtvExceededGeneral { .. } => FailureCategory::LtvExceededGeneral,
            SimulationError::LtvExceededRural { .. } => FailureCategory::LtvExceededRural,
            SimulationError::LoanAmountOutOfRange { .. }
            | SimulationError::TermOutOfRange { .. }
            | SimulationError::InvalidPropertyValue { .. }
            | SimulationError::InvalidInterestRate { .. }
            | SimulationError::CalculationError { .. } => FailureCategory::ParameterOutOfRange,
            SimulationError::InvalidPolicyTier { .. }
            | SimulationError::InvalidConfiguration { .. } => FailureCategory::Unknown,
        }
    }

    /// adjusted loan amount the caller may retry with, present only for LTV breaches
    pub fn suggested_amount(&self) -> Option<Money> {
        match self {
            SimulationError::LtvExceededGeneral { suggested_amount, .. }
            | SimulationError::LtvExceededRural { suggested_amount, .. } => {
                Some(*suggested_amount)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
