use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::SimulationError;
use crate::types::FailureCategory;

/// UI-consumable view of a simulation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiMessage {
    pub category: FailureCategory,
    /// localized display text (pt-BR)
    pub display_message: String,
    /// label for the one-click recovery action, when one exists
    pub action_label: Option<String>,
    /// whether the rural-property confirmation checkbox must be shown
    pub show_rural_checkbox: bool,
    /// adjusted amount behind the recovery action, for LTV breaches
    pub suggested_amount: Option<Money>,
}

/// map a simulation failure to its user-facing message and recovery affordance
///
/// Closed match over the failure taxonomy; anything outside the six actionable
/// categories falls back to a generic retry.
pub fn classify(error: &SimulationError) -> UiMessage {
    match error {
        SimulationError::CityNotFound { .. } => UiMessage {
            category: FailureCategory::CityNotFound,
            display_message: "Cidade não encontrada. Verifique o nome e tente novamente."
                .to_string(),
            action_label: None,
            show_rural_checkbox: false,
            suggested_amount: None,
        },
        SimulationError::CityNotServed { .. } => UiMessage {
            category: FailureCategory::CityNotServed,
            display_message: "Ainda não atendemos esta cidade.".to_string(),
            action_label: None,
            show_rural_checkbox: false,
            suggested_amount: None,
        },
        SimulationError::RuralOnlyUnconfirmed { .. } => UiMessage {
            category: FailureCategory::RuralOnlyUnconfirmed,
            display_message:
                "Nesta cidade atendemos apenas imóveis rurais. Confirme que o imóvel é rural para continuar."
                    .to_string(),
            action_label: Some("Confirmar imóvel rural".to_string()),
            show_rural_checkbox: true,
            suggested_amount: None,
        },
        SimulationError::LtvExceededRural {
            suggested_amount, ..
        } => UiMessage {
            category: FailureCategory::LtvExceededRural,
            display_message: format!(
                "Para imóveis rurais o empréstimo é limitado a 30% do valor do imóvel. Valor máximo: R$ {suggested_amount}."
            ),
            action_label: Some(format!("Ajustar para R$ {suggested_amount}")),
            show_rural_checkbox: false,
            suggested_amount: Some(*suggested_amount),
        },
        SimulationError::LtvExceededGeneral {
            cap,
            suggested_amount,
            ..
        } => {
            let cap_pct = cap.as_percentage().normalize();
            UiMessage {
                category: FailureCategory::LtvExceededGeneral,
                display_message: format!(
                    "O valor solicitado ultrapassa o limite de {cap_pct}% do valor do imóvel. Valor máximo: R$ {suggested_amount}."
                ),
                action_label: Some(format!("Ajustar para R$ {suggested_amount}")),
                show_rural_checkbox: false,
                suggested_amount: Some(*suggested_amount),
            }
        }
        err if err.category() == FailureCategory::ParameterOutOfRange => UiMessage {
            category: FailureCategory::ParameterOutOfRange,
            display_message: parameter_message(err),
            action_label: None,
            show_rural_checkbox: false,
            suggested_amount: None,
        },
        _ => UiMessage {
            category: FailureCategory::Unknown,
            display_message: "Não foi possível concluir a simulação. Tente novamente.".to_string(),
            action_label: Some("Tentar novamente".to_string()),
            show_rural_checkbox: false,
            suggested_amount: None,
        },
    }
}

/// localized text for the specific parameter band that failed
fn parameter_message(error: &SimulationError) -> String {
    match error {
        SimulationError::LoanAmountOutOfRange {
            minimum, maximum, ..
        } => format!("O valor do empréstimo deve estar entre R$ {minimum} e R$ {maximum}."),
        SimulationError::TermOutOfRange {
            minimum, maximum, ..
        } => format!("O prazo deve estar entre {minimum} e {maximum} meses."),
        SimulationError::InvalidPropertyValue { .. } => {
            "Informe um valor de imóvel maior que zero.".to_string()
        }
        _ => "Parâmetros da simulação fora dos limites permitidos.".to_string(),
    }
}
