use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a simulation run
pub type SimulationId = Uuid;

/// amortization system for the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationType {
    /// constant amortization, declining installments
    Sac,
    /// constant installment (French system)
    Price,
}

/// maximum LTV policy a city permits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyTier {
    /// city not served, no simulation allowed
    NotServed,
    /// rural properties only; 30% cap plus explicit rural confirmation
    RuralOnly,
    /// 30% cap for any property
    General30,
    /// standard 50% cap
    Standard50,
}

impl PolicyTier {
    /// decode the tier value as stored in the city dataset {0, 1, 30, 50}
    pub fn from_stored(value: u8) -> Option<Self> {
        match value {
            0 => Some(PolicyTier::NotServed),
            1 => Some(PolicyTier::RuralOnly),
            30 => Some(PolicyTier::General30),
            50 => Some(PolicyTier::Standard50),
            _ => None,
        }
    }

    /// tier value as stored in the city dataset
    pub fn as_stored(&self) -> u8 {
        match self {
            PolicyTier::NotServed => 0,
            PolicyTier::RuralOnly => 1,
            PolicyTier::General30 => 30,
            PolicyTier::Standard50 => 50,
        }
    }

    /// maximum permitted LTV, if the city is served at all
    pub fn ltv_cap(&self) -> Option<Rate> {
        match self {
            PolicyTier::NotServed => None,
            PolicyTier::RuralOnly => Some(Rate::from_percentage(30)),
            PolicyTier::General30 => Some(Rate::from_percentage(30)),
            PolicyTier::Standard50 => Some(Rate::from_percentage(50)),
        }
    }

    /// whether the tier demands explicit rural-property confirmation
    pub fn requires_rural_confirmation(&self) -> bool {
        matches!(self, PolicyTier::RuralOnly)
    }
}

/// one simulation request as submitted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub loan_amount: Money,
    pub property_value: Money,
    pub term_months: u32,
    pub amortization_type: AmortizationType,
    pub city: String,
    pub is_rural_property: bool,
}

impl SimulationInput {
    /// derive a retry input with an adjusted loan amount, never above the current one
    pub fn with_adjusted_amount(&self, suggested: Money) -> Self {
        Self {
            loan_amount: suggested.min(self.loan_amount),
            ..self.clone()
        }
    }

    /// derive a retry input with the rural-property flag confirmed
    pub fn with_rural_confirmed(&self) -> Self {
        Self {
            is_rural_property: true,
            ..self.clone()
        }
    }
}

/// outcome of a successful simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub simulation_id: SimulationId,
    /// fixed business rate used for the calculation
    pub monthly_rate: Rate,
    pub amortization_type: AmortizationType,
    /// constant installment; set only for PRICE
    pub price_installment: Option<Money>,
    /// first (largest) installment; set only for SAC
    pub sac_first_installment: Option<Money>,
    /// last (smallest) installment; set only for SAC
    pub sac_last_installment: Option<Money>,
    // validated input echoed back for the capture form
    pub loan_amount: Money,
    pub property_value: Money,
    pub term_months: u32,
    pub city: String,
}

/// closed set of failure categories the UI acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureCategory {
    CityNotFound,
    CityNotServed,
    RuralOnlyUnconfirmed,
    LtvExceededGeneral,
    LtvExceededRural,
    ParameterOutOfRange,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tier_decoding() {
        assert_eq!(PolicyTier::from_stored(0), Some(PolicyTier::NotServed));
        assert_eq!(PolicyTier::from_stored(1), Some(PolicyTier::RuralOnly));
        assert_eq!(PolicyTier::from_stored(30), Some(PolicyTier::General30));
        assert_eq!(PolicyTier::from_stored(50), Some(PolicyTier::Standard50));
        assert_eq!(PolicyTier::from_stored(40), None);
        assert_eq!(PolicyTier::from_stored(100), None);
    }

    #[test]
    fn test_tier_caps() {
        assert_eq!(PolicyTier::NotServed.ltv_cap(), None);
        assert_eq!(
            PolicyTier::RuralOnly.ltv_cap(),
            Some(Rate::from_percentage(30))
        );
        assert_eq!(
            PolicyTier::General30.ltv_cap(),
            Some(Rate::from_percentage(30))
        );
        assert_eq!(
            PolicyTier::Standard50.ltv_cap(),
            Some(Rate::from_percentage(50))
        );
        assert!(PolicyTier::RuralOnly.requires_rural_confirmation());
        assert!(!PolicyTier::General30.requires_rural_confirmation());
    }

    #[test]
    fn test_adjusted_amount_never_increases() {
        let input = SimulationInput {
            loan_amount: Money::from_major(200_000),
            property_value: Money::from_major(1_000_000),
            term_months: 120,
            amortization_type: AmortizationType::Price,
            city: "São Paulo - SP".to_string(),
            is_rural_property: false,
        };

        // suggestion above the current request keeps the current amount
        let kept = input.with_adjusted_amount(Money::from_major(300_000));
        assert_eq!(kept.loan_amount, Money::from_major(200_000));

        // suggestion below the current request wins
        let lowered = input.with_adjusted_amount(Money::from_major(150_000));
        assert_eq!(lowered.loan_amount, Money::from_major(150_000));
        assert_eq!(lowered.city, input.city);
    }

    #[test]
    fn test_rural_confirmation_helper() {
        let input = SimulationInput {
            loan_amount: Money::from_decimal(dec!(100000)),
            property_value: Money::from_decimal(dec!(500000)),
            term_months: 60,
            amortization_type: AmortizationType::Sac,
            city: "Holambra - SP".to_string(),
            is_rural_property: false,
        };

        assert!(input.with_rural_confirmed().is_rural_property);
    }
}
