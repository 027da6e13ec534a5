use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::types::{AmortizationType, SimulationResult};

/// contact details collected by the capture form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// simulation outcome bundled with caller metadata for the CRM sink
///
/// The engine stops at shaping this record; delivery belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub lead_id: Uuid,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub contact: Option<ContactInfo>,
    pub result: SimulationResult,
}

impl LeadRecord {
    /// create a record for a completed simulation
    pub fn new(
        result: SimulationResult,
        session_id: impl Into<String>,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            session_id: session_id.into(),
            created_at: time_provider.now(),
            contact: None,
            result,
        }
    }

    /// attach contact details collected after the simulation
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    /// flat payload shape the CRM relay expects
    pub fn to_crm_payload(&self) -> serde_json::Value {
        let installment = match self.result.amortization_type {
            AmortizationType::Price => self.result.price_installment,
            AmortizationType::Sac => self.result.sac_first_installment,
        };

        json!({
            "lead_id": self.lead_id,
            "session_id": self.session_id,
            "created_at": self.created_at,
            "city": self.result.city,
            "loan_amount": self.result.loan_amount,
            "property_value": self.result.property_value,
            "term_months": self.result.term_months,
            "amortization_type": self.result.amortization_type,
            "monthly_rate": self.result.monthly_rate,
            "installment": installment,
            "name": self.contact.as_ref().map(|c| c.name.clone()),
            "email": self.contact.as_ref().map(|c| c.email.clone()),
            "phone": self.contact.as_ref().map(|c| c.phone.clone()),
        })
    }
}
