//! Kingdoms and their building contracts
//!
//! These belong to the host game. The simulation only needs the narrow
//! interface in [`KingdomState`]; [`Kingdom`] is a ready-made implementation.

pub mod contract;
pub mod state;

pub use contract::{BuildingType, Contract, ContractId, ContractStatus};
pub use state::{Kingdom, KingdomState, MiningRates, TaxPolicy};
