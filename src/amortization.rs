use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulationError};
use crate::types::AmortizationType;

/// one row of an amortization schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// full period-by-period amortization schedule
///
/// Pure function of its numeric inputs; the first/last installments exposed to
/// the UI are read off the generated rows, never shortcut formulas.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub monthly_rate: Rate,
    pub term_months: u32,
    pub amortization_type: AmortizationType,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl AmortizationSchedule {
    /// generate the schedule for the requested amortization system
    pub fn generate(
        principal: Money,
        monthly_rate: Rate,
        term_months: u32,
        amortization_type: AmortizationType,
    ) -> Result<Self> {
        if term_months == 0 {
            return Err(SimulationError::CalculationError {
                message: "term must be at least one month".to_string(),
            });
        }
        if !principal.is_positive() {
            return Err(SimulationError::CalculationError {
                message: format!("principal must be positive, got {principal}"),
            });
        }
        if !monthly_rate.is_positive() {
            return Err(SimulationError::InvalidInterestRate { rate: monthly_rate });
        }

        let payments = match amortization_type {
            AmortizationType::Price => {
                let installment = price_installment(principal, monthly_rate, term_months)?;
                walk_constant_installment(principal, monthly_rate, term_months, installment)
            }
            AmortizationType::Sac => {
                walk_constant_amortization(principal, monthly_rate, term_months)
            }
        };

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_paid = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            monthly_rate,
            term_months,
            amortization_type,
            payments,
            total_interest,
            total_paid,
        })
    }

    /// first (largest for SAC) installment
    pub fn first_installment(&self) -> Money {
        self.payments.first().map(|p| p.payment_amount).unwrap_or(Money::ZERO)
    }

    /// last (smallest for SAC) installment
    pub fn last_installment(&self) -> Money {
        self.payments.last().map(|p| p.payment_amount).unwrap_or(Money::ZERO)
    }

    /// constant installment; only meaningful for PRICE
    pub fn constant_installment(&self) -> Option<Money> {
        match self.amortization_type {
            AmortizationType::Price => self.payments.first().map(|p| p.payment_amount),
            AmortizationType::Sac => None,
        }
    }

    /// get payment row for a specific period (1-based)
    pub fn payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        if payment_number == 0 {
            return None;
        }
        self.payments.get((payment_number - 1) as usize)
    }
}

/// constant PRICE installment via the annuity formula
///
/// installment = P * r * (1+r)^n / ((1+r)^n - 1)
pub fn price_installment(principal: Money, monthly_rate: Rate, term_months: u32) -> Result<Money> {
    if term_months == 0 {
        return Err(SimulationError::CalculationError {
            message: "term must be at least one month".to_string(),
        });
    }
    if !monthly_rate.is_positive() {
        return Err(SimulationError::InvalidInterestRate { rate: monthly_rate });
    }

    let r = monthly_rate.as_decimal();
    let compound = compound_factor(r, term_months);

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}

/// (1 + r)^n by repeated multiplication
fn compound_factor(r: Decimal, n: u32) -> Decimal {
    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..n {
        compound *= base;
    }
    compound
}

/// PRICE walk: fixed payment, interest on the outstanding balance
fn walk_constant_installment(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    installment: Money,
) -> Vec<ScheduledPayment> {
    let r = monthly_rate.as_decimal();
    let mut payments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=term_months {
        let interest_portion = Money::from_decimal(balance.as_decimal() * r);
        let principal_portion = installment - interest_portion;
        let ending_balance = (balance - principal_portion).max(Money::ZERO);

        cumulative_interest += interest_portion;
        cumulative_principal += principal_portion;

        payments.push(ScheduledPayment {
            payment_number: i,
            beginning_balance: balance,
            payment_amount: installment,
            principal_portion,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    payments
}

/// SAC walk: fixed amortization, interest on the outstanding balance
fn walk_constant_amortization(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
) -> Vec<ScheduledPayment> {
    let r = monthly_rate.as_decimal();
    let amortization = principal / Decimal::from(term_months);

    let mut payments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=term_months {
        let interest_portion = Money::from_decimal(balance.as_decimal() * r);
        let payment_amount = amortization + interest_portion;
        let ending_balance = (balance - amortization).max(Money::ZERO);

        cumulative_interest += interest_portion;
        cumulative_principal += amortization;

        payments.push(ScheduledPayment {
            payment_number: i,
            beginning_balance: balance,
            payment_amount,
            principal_portion: amortization,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    payments
}
