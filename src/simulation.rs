use uuid::Uuid;

use crate::amortization::AmortizationSchedule;
use crate::config::SimulationConfig;
use crate::errors::{Result, SimulationError};
use crate::policy::CityPolicyTable;
use crate::types::{AmortizationType, SimulationInput, SimulationResult};
use crate::validation::{LtvValidator, ParameterValidator};

/// simulation orchestrator
///
/// Holds the loaded city table and business configuration; each `simulate`
/// call is independent and side-effect free. The pipeline order is fixed:
/// city lookup, parameter validation, LTV validation, calculation. The first
/// failure short-circuits and later stages never run.
pub struct Simulator {
    table: CityPolicyTable,
    params: ParameterValidator,
    ltv: LtvValidator,
}

impl Simulator {
    /// create a simulator over a loaded city table and configuration
    pub fn new(table: CityPolicyTable, config: SimulationConfig) -> Self {
        Self {
            table,
            params: ParameterValidator::new(config),
            ltv: LtvValidator,
        }
    }

    /// configuration in effect
    pub fn config(&self) -> &SimulationConfig {
        self.params.config()
    }

    /// city table in effect
    pub fn table(&self) -> &CityPolicyTable {
        &self.table
    }

    /// run one simulation request through the full pipeline
    pub fn simulate(&self, input: &SimulationInput) -> Result<SimulationResult> {
        let policy = self
            .table
            .lookup(&input.city)
            .ok_or_else(|| SimulationError::CityNotFound {
                city: input.city.clone(),
            })?;

        self.params
            .validate(input.loan_amount, input.property_value, input.term_months)?;

        self.ltv.validate(
            input.loan_amount,
            input.property_value,
            policy,
            input.is_rural_property,
        )?;

        let monthly_rate = self.config().monthly_rate;
        let schedule = AmortizationSchedule::generate(
            input.loan_amount,
            monthly_rate,
            input.term_months,
            input.amortization_type,
        )?;

        let (price_installment, sac_first, sac_last) = match input.amortization_type {
            AmortizationType::Price => (schedule.constant_installment(), None, None),
            AmortizationType::Sac => (
                None,
                Some(schedule.first_installment()),
                Some(schedule.last_installment()),
            ),
        };

        Ok(SimulationResult {
            simulation_id: Uuid::new_v4(),
            monthly_rate,
            amortization_type: input.amortization_type,
            price_installment,
            sac_first_installment: sac_first,
            sac_last_installment: sac_last,
            loan_amount: input.loan_amount,
            property_value: input.property_value,
            term_months: input.term_months,
            city: policy.city.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::policy::CityPolicyRecord;
    use crate::types::FailureCategory;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn simulator() -> Simulator {
        let table = CityPolicyTable::from_records(vec![
            CityPolicyRecord {
                city: "São Paulo - SP".to_string(),
                ltv_tier: 50,
            },
            CityPolicyRecord {
                city: "Campinas - SP".to_string(),
                ltv_tier: 30,
            },
            CityPolicyRecord {
                city: "Holambra - SP".to_string(),
                ltv_tier: 1,
            },
            CityPolicyRecord {
                city: "Cidade Não Atendida - XX".to_string(),
                ltv_tier: 0,
            },
        ])
        .unwrap();

        Simulator::new(table, SimulationConfig::default())
    }

    fn input(city: &str, loan: i64, property: i64) -> SimulationInput {
        SimulationInput {
            loan_amount: Money::from_major(loan),
            property_value: Money::from_major(property),
            term_months: 180,
            amortization_type: AmortizationType::Price,
            city: city.to_string(),
            is_rural_property: false,
        }
    }

    #[test]
    fn test_unknown_city_fails_first() {
        let sim = simulator();
        let err = sim
            .simulate(&input("Curitiba - PR", 200_000, 1_000_000))
            .unwrap_err();
        assert_eq!(err.category(), FailureCategory::CityNotFound);
    }

    #[test]
    fn test_city_not_served_without_suggestion() {
        // scenario A
        let sim = simulator();
        let err = sim
            .simulate(&input("Cidade Não Atendida - XX", 200_000, 1_000_000))
            .unwrap_err();
        assert_eq!(err.category(), FailureCategory::CityNotServed);
        assert_eq!(err.suggested_amount(), None);
    }

    #[test]
    fn test_rural_city_unconfirmed() {
        // scenario B
        let sim = simulator();
        let err = sim
            .simulate(&input("Holambra - SP", 200_000, 1_000_000))
            .unwrap_err();
        assert_eq!(err.category(), FailureCategory::RuralOnlyUnconfirmed);
    }

    #[test]
    fn test_rural_city_over_cap_suggests_adjustment() {
        // scenario C
        let sim = simulator();
        let mut request = input("Holambra - SP", 400_000, 1_000_000);
        request.is_rural_property = true;

        let err = sim.simulate(&request).unwrap_err();
        assert_eq!(err.category(), FailureCategory::LtvExceededRural);
        assert_eq!(err.suggested_amount(), Some(Money::from_major(300_000)));
    }

    #[test]
    fn test_price_simulation_succeeds() {
        // scenario D
        let sim = simulator();
        let result = sim
            .simulate(&input("São Paulo - SP", 500_000, 1_000_000))
            .unwrap();

        assert_eq!(result.monthly_rate, Rate::from_decimal(dec!(0.0119)));
        assert_eq!(result.amortization_type, AmortizationType::Price);
        assert!(result.sac_first_installment.is_none());
        assert!(result.sac_last_installment.is_none());

        // installment equals principal times the annuity factor
        let installment = result.price_installment.unwrap();
        let r = dec!(0.0119);
        let mut compound = Decimal::ONE;
        for _ in 0..180 {
            compound *= Decimal::ONE + r;
        }
        let expected = dec!(500_000) * r * compound / (compound - Decimal::ONE);
        assert!((installment.as_decimal() - expected).abs() < dec!(0.01));

        // echoes of the validated input
        assert_eq!(result.loan_amount, Money::from_major(500_000));
        assert_eq!(result.city, "São Paulo - SP");
        assert_eq!(result.term_months, 180);
    }

    #[test]
    fn test_sac_simulation_succeeds() {
        // scenario E
        let sim = simulator();
        let mut request = input("São Paulo - SP", 500_000, 1_000_000);
        request.amortization_type = AmortizationType::Sac;

        let result = sim.simulate(&request).unwrap();
        assert!(result.price_installment.is_none());

        let first = result.sac_first_installment.unwrap();
        let last = result.sac_last_installment.unwrap();
        assert!(first > last);

        // mean installment times term reconstructs the full repayment
        let schedule = AmortizationSchedule::generate(
            request.loan_amount,
            result.monthly_rate,
            request.term_months,
            AmortizationType::Sac,
        )
        .unwrap();
        let reconstructed = (first + last) / Decimal::from(2) * Decimal::from(180);
        assert!((reconstructed - schedule.total_paid).abs() < Money::ONE);
        assert!(schedule.total_paid > request.loan_amount);
    }

    #[test]
    fn test_parameter_failure_precedes_ltv() {
        // a request breaching both the loan band and the LTV cap
        // surfaces only the band error
        let sim = simulator();
        let request = input("Campinas - SP", 5_500_000, 1_000_000);

        let err = sim.simulate(&request).unwrap_err();
        assert_eq!(err.category(), FailureCategory::ParameterOutOfRange);
    }

    #[test]
    fn test_city_lookup_precedes_parameters() {
        let sim = simulator();
        let err = sim
            .simulate(&input("Curitiba - PR", 1, 1_000_000))
            .unwrap_err();
        assert_eq!(err.category(), FailureCategory::CityNotFound);
    }

    #[test]
    fn test_ltv_boundary_is_inclusive_end_to_end() {
        // P3 at the orchestrator level
        let sim = simulator();
        assert!(sim
            .simulate(&input("São Paulo - SP", 500_000, 1_000_000))
            .is_ok());
        assert!(sim
            .simulate(&input("São Paulo - SP", 500_001, 1_000_000))
            .is_err());
    }

    #[test]
    fn test_auto_adjust_retry_loop() {
        // the UI pattern: take the suggestion, clamp, retry once
        let sim = simulator();
        let request = input("Campinas - SP", 400_000, 1_000_000);

        let err = sim.simulate(&request).unwrap_err();
        let suggested = err.suggested_amount().unwrap();
        assert_eq!(suggested, Money::from_major(300_000));

        let retry = request.with_adjusted_amount(suggested);
        let result = sim.simulate(&retry).unwrap();
        assert_eq!(result.loan_amount, Money::from_major(300_000));
    }

    #[test]
    fn test_each_run_gets_fresh_id() {
        let sim = simulator();
        let request = input("São Paulo - SP", 500_000, 1_000_000);

        let a = sim.simulate(&request).unwrap();
        let b = sim.simulate(&request).unwrap();
        assert_ne!(a.simulation_id, b.simulation_id);
        assert_eq!(a.price_installment, b.price_installment);
    }
}
