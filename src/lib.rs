//! Kingdom Populace - background citizens for a multi-kingdom strategy game
//!
//! Simulates non-player citizens so that a kingdom keeps producing tax
//! revenue and contract labor while nobody is playing it.

pub mod activity;
pub mod citizen;
pub mod core;
pub mod economy;
pub mod kingdom;
pub mod population;
pub mod simulation;

pub use crate::activity::{ActivityEntry, ActivityFeed, ActivityIcon};
pub use crate::citizen::{Citizen, CitizenActivity};
pub use crate::core::{KingdomId, PopulaceConfig, PopulaceError};
pub use crate::kingdom::{Contract, Kingdom, KingdomState};
pub use crate::simulation::Simulator;
