//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Highest identifier handed out to real player accounts
///
/// Player ids are low and sequential; citizen ids are drawn above this.
pub const PLAYER_ID_MAX: u32 = 9_999;

/// Identity of a kingdom (string key shared with the host game)
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KingdomId(pub String);

impl KingdomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KingdomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for KingdomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a simulated citizen
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CitizenId(pub u32);

impl CitizenId {
    /// Returns true if this id cannot belong to a player account
    pub fn is_npc_range(&self) -> bool {
        self.0 > PLAYER_ID_MAX
    }
}

/// Identifier of a real player account
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Anyone who can work on a contract: a player or a citizen
///
/// Player and citizen ids come from disjoint ranges, so a bare u32 is enough.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub u32);

impl From<CitizenId> for WorkerId {
    fn from(id: CitizenId) -> Self {
        Self(id.0)
    }
}

impl From<PlayerId> for WorkerId {
    fn from(id: PlayerId) -> Self {
        Self(id.0)
    }
}
