//! Activity feed storage and display helpers

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::KingdomId;

/// Category tag shown next to a feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityIcon {
    Hammer,
    Coins,
    Pickaxe,
    Sword,
    Person,
    Sparkles,
}

impl ActivityIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ActivityIcon::Hammer => "🔨",
            ActivityIcon::Coins => "💰",
            ActivityIcon::Pickaxe => "⛏",
            ActivityIcon::Sword => "⚔",
            ActivityIcon::Person => "👤",
            ActivityIcon::Sparkles => "✨",
        }
    }
}

/// One immutable line in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub message: String,
    pub kingdom: KingdomId,
    pub icon: ActivityIcon,
    pub created_at: DateTime<Utc>,
}

/// Newest-first log capped at a fixed number of entries
///
/// Order is insertion order, not timestamp order.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert an entry at the front, evicting the oldest past capacity
    pub fn record(
        &mut self,
        message: impl Into<String>,
        kingdom: &KingdomId,
        icon: ActivityIcon,
        now: DateTime<Utc>,
    ) -> Uuid {
        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            message: message.into(),
            kingdom: kingdom.clone(),
            icon,
            created_at: now,
        };
        let id = entry.id;

        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        id
    }

    /// Entries for one kingdom, in feed order
    pub fn entries_for<'a>(
        &'a self,
        kingdom: &'a KingdomId,
    ) -> impl Iterator<Item = &'a ActivityEntry> {
        self.entries.iter().filter(move |e| &e.kingdom == kingdom)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Most recently recorded entry
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render how long ago something happened
///
/// Under a minute is "just now", under an hour is whole minutes,
/// anything older is whole hours.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else {
        format!("{}h ago", seconds / 3_600)
    }
}
