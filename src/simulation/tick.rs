//! Tick hooks - what happens each time the scheduler fires
//!
//! Contract labor and taxes are driven by the host game, not by the tick.
//! The tick is the place for ambient, cosmetic activity. The default hook
//! does nothing.

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};

use crate::activity::feed::ActivityFeed;
use crate::population::registry::PopulationRegistry;

/// Everything a hook may touch during one tick
pub struct TickContext<'a> {
    /// 1 for the first tick after start
    pub tick: u64,
    pub registry: &'a mut PopulationRegistry,
    pub feed: &'a mut ActivityFeed,
    pub rng: &'a mut (dyn RngCore + Send),
    pub now: DateTime<Utc>,
}

/// Extension point run on every scheduler tick
pub trait TickHook: Send {
    fn on_tick(&mut self, ctx: TickContext<'_>);
}

/// Hook that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleTick;

impl TickHook for IdleTick {
    fn on_tick(&mut self, _ctx: TickContext<'_>) {}
}

/// Citizens drift online and offline between ticks
///
/// Each citizen flips its online flag with `toggle_probability`. Anyone who
/// comes online is marked as seen now; going offline keeps the old last-seen.
#[derive(Debug, Clone, Copy)]
pub struct AmbientPresence {
    pub toggle_probability: f64,
}

impl AmbientPresence {
    pub fn new(toggle_probability: f64) -> Self {
        Self {
            toggle_probability: toggle_probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for AmbientPresence {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl TickHook for AmbientPresence {
    fn on_tick(&mut self, ctx: TickContext<'_>) {
        let mut toggled = 0;
        for citizen in ctx.registry.iter_all_mut() {
            if ctx.rng.gen_bool(self.toggle_probability) {
                citizen.is_online = !citizen.is_online;
                if citizen.is_online {
                    citizen.last_seen = ctx.now;
                }
                toggled += 1;
            }
        }
        tracing::debug!("Tick {}: {} citizens changed presence", ctx.tick, toggled);
    }
}
