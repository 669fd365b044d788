//! Activity feed - bounded, newest-first log of simulation events

pub mod feed;

pub use feed::{time_ago, ActivityEntry, ActivityFeed, ActivityIcon};
