//! Simulator - the owned simulation context
//!
//! Holds the population registry, activity feed, random source and clock
//! behind one lock. Every operation, the scheduler's ticks included, goes
//! through that lock, so feed trimming and contract updates never
//! interleave. The host creates a simulator, hands it to whoever needs it
//! and drops it to shut the timer down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::activity::feed::{time_ago, ActivityEntry, ActivityFeed, ActivityIcon};
use crate::citizen::record::Citizen;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::PopulaceConfig;
use crate::core::error::Result;
use crate::core::types::KingdomId;
use crate::economy::{labor, tax};
use crate::kingdom::state::KingdomState;
use crate::population::registry::PopulationRegistry;
use crate::simulation::scheduler::{TickFn, TickScheduler};
use crate::simulation::tick::{IdleTick, TickContext, TickHook};

/// Mutable simulation state, only reachable through the lock
struct SimState {
    registry: PopulationRegistry,
    feed: ActivityFeed,
    rng: Box<dyn RngCore + Send>,
    clock: Arc<dyn Clock>,
    hook: Box<dyn TickHook>,
    ticks: u64,
}

impl SimState {
    fn tick(&mut self) {
        self.ticks += 1;
        let now = self.clock.now();
        tracing::debug!("Tick {}", self.ticks);

        let SimState {
            registry,
            feed,
            rng,
            hook,
            ticks,
            ..
        } = self;
        hook.on_tick(TickContext {
            tick: *ticks,
            registry,
            feed,
            rng: &mut **rng,
            now,
        });
    }
}

fn lock_state(state: &Mutex<SimState>) -> MutexGuard<'_, SimState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Simulator {
    config: PopulaceConfig,
    state: Arc<Mutex<SimState>>,
    scheduler: Mutex<TickScheduler>,
}

impl Simulator {
    /// Create a simulator whose timer runs on the given tokio runtime
    ///
    /// Uses a ChaCha8 generator seeded from `config.seed` (entropy when
    /// unset), the system clock and an idle tick hook. Fails if the config
    /// does not validate.
    pub fn new(config: PopulaceConfig, runtime: Handle) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let state = Arc::new(Mutex::new(SimState {
            registry: PopulationRegistry::new(),
            feed: ActivityFeed::new(config.feed_capacity),
            rng: Box::new(rng),
            clock: Arc::new(SystemClock),
            hook: Box::new(IdleTick),
            ticks: 0,
        }));

        let tick_state = Arc::clone(&state);
        let on_tick: TickFn = Arc::new(move || lock_state(&tick_state).tick());
        let scheduler = TickScheduler::new(
            runtime,
            Duration::from_secs(config.tick_interval_secs),
            on_tick,
        );

        Ok(Self {
            config,
            state,
            scheduler: Mutex::new(scheduler),
        })
    }

    /// Replace the random source
    pub fn with_rng(self, rng: impl RngCore + Send + 'static) -> Self {
        self.lock().rng = Box::new(rng);
        self
    }

    /// Replace the clock
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        self.lock().clock = clock;
        self
    }

    /// Replace the tick hook
    pub fn with_tick_hook(self, hook: impl TickHook + 'static) -> Self {
        self.lock().hook = Box::new(hook);
        self
    }

    pub fn config(&self) -> &PopulaceConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        lock_state(&self.state)
    }

    fn scheduler(&self) -> MutexGuard<'_, TickScheduler> {
        self.scheduler.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // === POPULATION ===

    /// Populate every kingdom that has no citizens yet, then start ticking
    ///
    /// Returns the number of citizens created.
    pub fn populate(&self, kingdoms: &[KingdomId]) -> usize {
        let created: usize = {
            let mut state = self.lock();
            let now = state.clock.now();
            let SimState { registry, rng, .. } = &mut *state;
            kingdoms
                .iter()
                .map(|k| registry.populate_kingdom(k, &self.config, &mut **rng, now))
                .sum()
        };

        self.start();
        created
    }

    pub fn citizens_of(&self, kingdom: &KingdomId) -> Vec<Citizen> {
        self.lock().registry.citizens(kingdom).to_vec()
    }

    pub fn citizen_count(&self, kingdom: &KingdomId) -> usize {
        self.lock().registry.count(kingdom)
    }

    pub fn online_citizens_of(&self, kingdom: &KingdomId) -> Vec<Citizen> {
        self.lock().registry.online(kingdom).cloned().collect()
    }

    // === SCHEDULER ===

    pub fn start(&self) {
        self.scheduler().start();
    }

    pub fn stop(&self) {
        self.scheduler().stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler().is_running()
    }

    /// Ticks fired since this simulator was created
    pub fn ticks_elapsed(&self) -> u64 {
        self.lock().ticks
    }

    // === ECONOMY ===

    /// Let the kingdom's citizens volunteer for its active contract
    pub fn allocate_workers<K: KingdomState + ?Sized>(&self, kingdom: &mut K) -> usize {
        let mut state = self.lock();
        let now = state.clock.now();
        let SimState {
            registry, feed, rng, ..
        } = &mut *state;

        let citizens = registry.citizens_mut(kingdom.id());
        labor::allocate_workers(kingdom, citizens, feed, &self.config, &mut **rng, now)
    }

    /// Collect a day of mining tax from the kingdom's citizens
    pub fn accrue_tax<K: KingdomState + ?Sized>(&self, kingdom: &mut K) -> u64 {
        let mut state = self.lock();
        let now = state.clock.now();
        let SimState { registry, feed, .. } = &mut *state;

        let count = registry.count(kingdom.id());
        tax::accrue_tax(kingdom, count, feed, &self.config, now)
    }

    // === ACTIVITY FEED ===

    pub fn record(&self, message: impl Into<String>, kingdom: &KingdomId, icon: ActivityIcon) -> Uuid {
        let mut state = self.lock();
        let now = state.clock.now();
        state.feed.record(message, kingdom, icon, now)
    }

    pub fn feed_for(&self, kingdom: &KingdomId) -> Vec<ActivityEntry> {
        self.lock().feed.entries_for(kingdom).cloned().collect()
    }

    /// Whole feed, newest first
    pub fn feed(&self) -> Vec<ActivityEntry> {
        self.lock().feed.iter().cloned().collect()
    }

    /// How long ago an entry was recorded, by this simulator's clock
    pub fn time_ago(&self, entry: &ActivityEntry) -> String {
        time_ago(entry.created_at, self.lock().clock.now())
    }
}
