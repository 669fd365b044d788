//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PopulaceError, Result};
use crate::core::types::PLAYER_ID_MAX;

/// Configuration for the citizen simulation
///
/// Defaults reproduce the live game's pacing. Any field may be omitted in a
/// TOML file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulaceConfig {
    // === SCHEDULER ===
    /// Seconds between ambient ticks
    pub tick_interval_secs: u64,

    // === POPULATION ===
    /// Fewest citizens a kingdom is populated with
    pub min_citizens: usize,

    /// Most citizens a kingdom is populated with (inclusive)
    pub max_citizens: usize,

    /// Lowest citizen id. Must sit above every player id.
    pub npc_id_min: u32,

    /// Highest citizen id (inclusive)
    pub npc_id_max: u32,

    pub reputation_min: u32,
    pub reputation_max: u32,
    pub attack_min: u8,
    pub attack_max: u8,
    pub defense_min: u8,
    pub defense_max: u8,

    /// How far back a citizen's last-seen time may be placed at creation
    pub last_seen_window_secs: i64,

    // === CONTRACT LABOR ===
    /// Chance per citizen per allocation pass to join the active contract
    ///
    /// At 0.3 with three open slots, a kingdom of 10 usually fills its
    /// crew within two passes.
    pub join_probability: f64,

    /// Hard cap on workers per contract, players included
    pub max_contract_workers: usize,

    // === TAXES ===
    /// Share of the population that mines on a given day, in percent
    ///
    /// Rounded down, but never below one miner.
    pub miner_share_percent: usize,

    /// Value of one unit of steel relative to one unit of iron
    pub steel_weight: u64,

    // === ACTIVITY FEED ===
    /// Entries kept in the feed; older ones are evicted
    pub feed_capacity: usize,

    // === RANDOMNESS ===
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for PopulaceConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 5,

            min_citizens: 5,
            max_citizens: 15,
            npc_id_min: 10_000,
            npc_id_max: 99_999,
            reputation_min: 50,
            reputation_max: 300,
            attack_min: 1,
            attack_max: 8,
            defense_min: 1,
            defense_max: 8,
            last_seen_window_secs: 3_600,

            join_probability: 0.3,
            max_contract_workers: 3,

            miner_share_percent: 30,
            steel_weight: 2,

            feed_capacity: 20,

            seed: None,
        }
    }
}

impl PopulaceConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_secs == 0 {
            return Err(invalid("tick_interval_secs must be positive"));
        }

        if self.min_citizens == 0 || self.min_citizens > self.max_citizens {
            return Err(invalid(format!(
                "citizen range [{}, {}] must be non-empty and start above zero",
                self.min_citizens, self.max_citizens
            )));
        }

        if self.npc_id_min <= PLAYER_ID_MAX {
            return Err(invalid(format!(
                "npc_id_min ({}) must be above the player id range (max {})",
                self.npc_id_min, PLAYER_ID_MAX
            )));
        }

        if self.npc_id_min > self.npc_id_max {
            return Err(invalid("npc_id_min must not exceed npc_id_max"));
        }

        if self.reputation_min > self.reputation_max
            || self.attack_min > self.attack_max
            || self.defense_min > self.defense_max
        {
            return Err(invalid("stat ranges must have min <= max"));
        }

        if self.last_seen_window_secs < 0 {
            return Err(invalid("last_seen_window_secs must not be negative"));
        }

        if !(0.0..=1.0).contains(&self.join_probability) {
            return Err(invalid(format!(
                "join_probability ({}) must be within [0, 1]",
                self.join_probability
            )));
        }

        if self.max_contract_workers == 0 {
            return Err(invalid("max_contract_workers must be positive"));
        }

        if self.miner_share_percent > 100 {
            return Err(invalid("miner_share_percent must be at most 100"));
        }

        if self.feed_capacity == 0 {
            return Err(invalid("feed_capacity must be positive"));
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> PopulaceError {
    PopulaceError::InvalidConfig(msg.into())
}
