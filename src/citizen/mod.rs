//! Simulated citizens and how they are generated

pub mod generator;
pub mod record;

pub use generator::generate_citizen;
pub use record::{Citizen, CitizenActivity};
