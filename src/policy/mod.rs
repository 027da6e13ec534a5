pub mod table;

pub use table::{CityPolicy, CityPolicyRecord, CityPolicyTable};
