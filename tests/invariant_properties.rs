//! Property tests for the simulation invariants
//!
//! - The feed is bounded and newest-first
//! - Contract crews stay within the cap and never list a worker twice
//! - Tax always comes from at least one miner
//! - Citizen ids never land in the player id range

use chrono::{DateTime, TimeZone, Utc};
use kingdom_populace::activity::{ActivityFeed, ActivityIcon};
use kingdom_populace::citizen::generate_citizen;
use kingdom_populace::core::types::{PlayerId, PLAYER_ID_MAX};
use kingdom_populace::economy::{allocate_workers, compute_tax};
use kingdom_populace::kingdom::{BuildingType, Contract, Kingdom, KingdomState, MiningRates, TaxPolicy};
use kingdom_populace::population::PopulationRegistry;
use kingdom_populace::{KingdomId, PopulaceConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn feed_is_bounded_and_newest_first(inserts in 0usize..80, capacity in 1usize..30) {
        let mut feed = ActivityFeed::new(capacity);
        let k = KingdomId::from("ironhold");

        for i in 0..inserts {
            feed.record(i.to_string(), &k, ActivityIcon::Sparkles, now());
            prop_assert!(feed.len() <= capacity);
        }

        let kept: Vec<usize> = feed.iter().map(|e| e.message.parse().unwrap()).collect();
        let expected: Vec<usize> = (inserts.saturating_sub(capacity)..inserts).rev().collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn allocation_respects_cap_and_uniqueness(
        seed in any::<u64>(),
        players in 0u32..5,
        passes in 1usize..6,
    ) {
        let config = PopulaceConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut registry = PopulationRegistry::new();
        let k = KingdomId::from("ironhold");
        registry.populate_kingdom(&k, &config, &mut rng, now());

        let mut contract = Contract::new(BuildingType::Walls);
        for p in 1..=players {
            contract.add_worker(PlayerId(p));
        }
        let start = contract.worker_count();
        let mut kingdom = Kingdom::new(k.clone(), "Ironhold").with_contract(contract);
        let mut feed = ActivityFeed::new(config.feed_capacity);

        let mut joined = 0;
        for _ in 0..passes {
            joined += allocate_workers(
                &mut kingdom,
                registry.citizens_mut(&k),
                &mut feed,
                &config,
                &mut rng,
                now(),
            );
        }

        let contract = kingdom.active_contract().unwrap();
        prop_assert!(contract.worker_count() <= start.max(config.max_contract_workers));
        prop_assert_eq!(contract.worker_count(), start + joined);

        let mut ids: Vec<u32> = contract.workers().iter().map(|w| w.0).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), contract.worker_count());
    }

    #[test]
    fn tax_uses_at_least_one_miner(
        citizens in 1usize..200,
        iron in 0u64..50,
        steel in 0u64..50,
        rate in 0u32..=100,
    ) {
        let config = PopulaceConfig::default();
        let kingdom = Kingdom::new("ironhold", "Ironhold")
            .with_mining(MiningRates::new(iron, steel))
            .with_tax_policy(TaxPolicy::new(rate));

        let accrual = compute_tax(&kingdom, citizens, &config).unwrap();

        prop_assert_eq!(accrual.miners, (citizens * 30 / 100).max(1) as u64);
        prop_assert_eq!(accrual.resource_value, iron + 2 * steel);
        prop_assert_eq!(accrual.total_mined, accrual.resource_value * accrual.miners);
        prop_assert!(accrual.tax <= accrual.total_mined);
    }

    #[test]
    fn citizen_ids_stay_out_of_player_range(seed in any::<u64>()) {
        let config = PopulaceConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let k = KingdomId::from("ironhold");

        for _ in 0..50 {
            let citizen = generate_citizen(&k, &config, &mut rng, now());
            prop_assert!(citizen.id.0 > PLAYER_ID_MAX);
            prop_assert!(citizen.id.0 >= config.npc_id_min && citizen.id.0 <= config.npc_id_max);
        }
    }
}
