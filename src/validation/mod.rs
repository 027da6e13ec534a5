pub mod ltv;
pub mod params;

pub use ltv::LtvValidator;
pub use params::ParameterValidator;
