//! Citizen records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{CitizenId, KingdomId};

/// What a citizen is currently doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitizenActivity {
    #[default]
    Idle,
    Mining,
    Crafting,
    WorkingOnContract,
    Training,
}

impl CitizenActivity {
    /// Short label for feeds and status lines
    pub fn label(&self) -> &'static str {
        match self {
            CitizenActivity::Idle => "idle",
            CitizenActivity::Mining => "mining",
            CitizenActivity::Crafting => "crafting",
            CitizenActivity::WorkingOnContract => "working on a contract",
            CitizenActivity::Training => "training",
        }
    }
}

/// A simulated, non-player member of a kingdom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citizen {
    pub id: CitizenId,
    /// First name, optionally followed by an honorific
    pub name: String,
    pub home_kingdom: KingdomId,
    pub reputation: u32,
    pub attack: u8,
    pub defense: u8,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,
    pub activity: CitizenActivity,
}

impl Citizen {
    pub fn is_idle(&self) -> bool {
        self.activity == CitizenActivity::Idle
    }
}
