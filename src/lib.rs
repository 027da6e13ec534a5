pub mod amortization;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod lead;
pub mod messages;
pub mod policy;
pub mod simulation;
pub mod types;
pub mod validation;

// re-export key types
pub use amortization::{AmortizationSchedule, ScheduledPayment, price_installment};
pub use config::SimulationConfig;
pub use decimal::{Money, Rate};
pub use errors::{Result, SimulationError};
pub use lead::{ContactInfo, LeadRecord};
pub use messages::{classify, UiMessage};
pub use policy::{CityPolicy, CityPolicyRecord, CityPolicyTable};
pub use simulation::Simulator;
pub use types::{
    AmortizationType, FailureCategory, PolicyTier, SimulationId, SimulationInput,
    SimulationResult,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
