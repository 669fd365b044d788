//! Population registry - maps kingdoms to their citizens
//!
//! Kingdoms are populated lazily and exactly once. Citizen order within a
//! kingdom is insertion order and never changes, so allocation passes see
//! citizens in a stable sequence.

use ahash::{AHashMap, AHashSet};
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::citizen::generator::generate_citizen;
use crate::citizen::record::Citizen;
use crate::core::config::PopulaceConfig;
use crate::core::types::{CitizenId, KingdomId};

#[derive(Debug, Clone, Default)]
pub struct PopulationRegistry {
    /// Kingdoms in the order they were populated
    kingdoms: Vec<(KingdomId, Vec<Citizen>)>,
    index: AHashMap<KingdomId, usize>,
    /// Every citizen id handed out so far, across all kingdoms
    issued: AHashSet<CitizenId>,
}

impl PopulationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a kingdom if it has no citizens yet
    ///
    /// Returns the number of citizens created, 0 if the kingdom was
    /// already populated.
    pub fn populate_kingdom<R: Rng + ?Sized>(
        &mut self,
        kingdom: &KingdomId,
        config: &PopulaceConfig,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> usize {
        if !self.citizens(kingdom).is_empty() {
            return 0;
        }

        let count = rng.gen_range(config.min_citizens..=config.max_citizens);
        let mut citizens = Vec::with_capacity(count);
        for _ in 0..count {
            let mut citizen = generate_citizen(kingdom, config, rng, now);
            citizen.id = self.unique_id(citizen.id, config, rng);
            citizens.push(citizen);
        }

        tracing::info!("Populated kingdom {} with {} citizens", kingdom, count);
        match self.index.get(kingdom) {
            Some(&idx) => self.kingdoms[idx].1 = citizens,
            None => {
                self.index.insert(kingdom.clone(), self.kingdoms.len());
                self.kingdoms.push((kingdom.clone(), citizens));
            }
        }
        count
    }

    /// Redraw an id until it is unused, unless the whole range is taken
    fn unique_id<R: Rng + ?Sized>(
        &mut self,
        mut id: CitizenId,
        config: &PopulaceConfig,
        rng: &mut R,
    ) -> CitizenId {
        let range_size = (config.npc_id_max - config.npc_id_min) as usize + 1;
        if self.issued.len() >= range_size {
            tracing::warn!("Citizen id range exhausted, reusing id {}", id);
            return id;
        }

        while self.issued.contains(&id) {
            id = CitizenId(rng.gen_range(config.npc_id_min..=config.npc_id_max));
        }
        self.issued.insert(id);
        id
    }

    /// Citizens of a kingdom in insertion order (empty if unknown)
    pub fn citizens(&self, kingdom: &KingdomId) -> &[Citizen] {
        match self.index.get(kingdom) {
            Some(&idx) => &self.kingdoms[idx].1,
            None => &[],
        }
    }

    pub fn citizens_mut(&mut self, kingdom: &KingdomId) -> &mut [Citizen] {
        match self.index.get(kingdom) {
            Some(&idx) => &mut self.kingdoms[idx].1,
            None => &mut [],
        }
    }

    pub fn count(&self, kingdom: &KingdomId) -> usize {
        self.citizens(kingdom).len()
    }

    pub fn online(&self, kingdom: &KingdomId) -> impl Iterator<Item = &Citizen> {
        self.citizens(kingdom).iter().filter(|c| c.is_online)
    }

    pub fn contains(&self, kingdom: &KingdomId) -> bool {
        self.index.contains_key(kingdom)
    }

    pub fn kingdom_count(&self) -> usize {
        self.kingdoms.len()
    }

    /// Kingdom ids in population order
    pub fn kingdom_ids(&self) -> impl Iterator<Item = &KingdomId> {
        self.kingdoms.iter().map(|(id, _)| id)
    }

    /// All citizens across every kingdom, in population order
    pub fn iter_all_mut(&mut self) -> impl Iterator<Item = &mut Citizen> {
        self.kingdoms.iter_mut().flat_map(|(_, c)| c.iter_mut())
    }
}
