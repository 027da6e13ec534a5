use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulationError};
use crate::policy::CityPolicy;
use crate::types::PolicyTier;

/// enforces the per-city LTV cap and the rural-only gate
pub struct LtvValidator;

impl LtvValidator {
    /// requested loan-to-value ratio
    pub fn requested_ltv(loan_amount: Money, property_value: Money) -> Result<Rate> {
        if !property_value.is_positive() {
            return Err(SimulationError::InvalidPropertyValue {
                value: property_value,
            });
        }

        Ok(Rate::from_decimal(
            loan_amount.as_decimal() / property_value.as_decimal(),
        ))
    }

    /// maximum loan amount the cap admits, floored to whole currency units
    ///
    /// The floor is applied to the unrounded product; rounding first could
    /// carry a near-whole product up and past the cap.
    pub fn suggested_amount(property_value: Money, cap: Rate) -> Money {
        Money::from_decimal((property_value.as_decimal() * cap.as_decimal()).floor())
    }

    /// gate a request against the city policy
    ///
    /// A requested LTV exactly equal to the cap passes; only strictly greater
    /// is rejected.
    pub fn validate(
        &self,
        loan_amount: Money,
        property_value: Money,
        policy: &CityPolicy,
        is_rural_property: bool,
    ) -> Result<()> {
        if policy.tier == PolicyTier::NotServed {
            return Err(SimulationError::CityNotServed {
                city: policy.city.clone(),
            });
        }

        if policy.tier.requires_rural_confirmation() && !is_rural_property {
            return Err(SimulationError::RuralOnlyUnconfirmed {
                city: policy.city.clone(),
            });
        }

        // every served tier carries a cap; a missing one is a dataset defect
        let cap = match policy.tier.ltv_cap() {
            Some(cap) => cap,
            None => {
                return Err(SimulationError::InvalidConfiguration {
                    message: format!("no ltv cap for served city {}", policy.city),
                });
            }
        };

        let requested = Self::requested_ltv(loan_amount, property_value)?;
        if requested.as_decimal() > cap.as_decimal() {
            let suggested_amount = Self::suggested_amount(property_value, cap);
            return Err(if policy.tier == PolicyTier::RuralOnly {
                SimulationError::LtvExceededRural {
                    requested_ltv: requested,
                    cap,
                    suggested_amount,
                }
            } else {
                SimulationError::LtvExceededGeneral {
                    requested_ltv: requested,
                    cap,
                    suggested_amount,
                }
            });
        }

        Ok(())
    }
}
