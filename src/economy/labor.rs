//! Contract labor - citizens volunteering for the kingdom's active contract
//!
//! Each pass walks the kingdom's citizens in registry order. A citizen
//! not yet on the crew joins with a fixed probability. The pass stops as
//! soon as the crew is full, so earlier citizens get first pick.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::activity::feed::{ActivityFeed, ActivityIcon};
use crate::citizen::record::{Citizen, CitizenActivity};
use crate::core::config::PopulaceConfig;
use crate::kingdom::state::KingdomState;

/// Enroll citizens on the kingdom's active contract
///
/// Returns how many citizens joined. Kingdoms without an active contract,
/// or whose contract is finished, get 0 and are left untouched.
pub fn allocate_workers<K, R>(
    kingdom: &mut K,
    citizens: &mut [Citizen],
    feed: &mut ActivityFeed,
    config: &PopulaceConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> usize
where
    K: KingdomState + ?Sized,
    R: Rng + ?Sized,
{
    let kingdom_id = kingdom.id().clone();

    let Some(contract) = kingdom.active_contract_mut() else {
        tracing::debug!("No active contract in {}, skipping allocation", kingdom_id);
        return 0;
    };

    if !contract.status.accepts_workers() {
        tracing::debug!(
            "Contract in {} is {:?}, skipping allocation",
            kingdom_id,
            contract.status
        );
        return 0;
    }

    let building = contract.building_type.display_name();
    let mut joined = 0;

    for citizen in citizens.iter_mut() {
        if contract.worker_count() >= config.max_contract_workers {
            break;
        }

        if contract.has_worker(citizen.id) {
            continue;
        }

        if rng.gen::<f64>() >= config.join_probability {
            continue;
        }

        if contract.add_worker(citizen.id) {
            joined += 1;
            citizen.activity = CitizenActivity::WorkingOnContract;
            tracing::debug!("{} joined the {} contract in {}", citizen.name, building, kingdom_id);
            feed.record(
                format!("{} started working on the {} upgrade", citizen.name, building),
                &kingdom_id,
                ActivityIcon::Hammer,
                now,
            );
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citizen::generator::generate_citizen;
    use crate::core::types::{CitizenId, KingdomId, PlayerId, WorkerId};
    use crate::kingdom::contract::{BuildingType, Contract, ContractStatus};
    use crate::kingdom::state::Kingdom;
    use chrono::TimeZone;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    /// Every f64 draw is 0.0, so every citizen joins
    fn always_join() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every f64 draw is just under 1.0, so nobody joins
    fn never_join() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Citizens with sequential ids so ordering is easy to assert
    fn citizens(kingdom: &KingdomId, count: u32) -> Vec<Citizen> {
        let config = PopulaceConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        (0..count)
            .map(|i| {
                let mut c = generate_citizen(kingdom, &config, &mut rng, now());
                c.id = CitizenId(20_000 + i);
                c
            })
            .collect()
    }

    fn kingdom_with(contract: Contract) -> Kingdom {
        Kingdom::new("ironhold", "Ironhold").with_contract(contract)
    }

    #[test]
    fn test_fills_crew_in_registry_order() {
        let mut kingdom = kingdom_with(Contract::new(BuildingType::Walls));
        let mut people = citizens(&kingdom.id, 10);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut always_join(),
            now(),
        );

        assert_eq!(joined, 3);
        let contract = kingdom.active_contract.as_ref().unwrap();
        assert_eq!(
            contract.workers(),
            &[WorkerId(20_000), WorkerId(20_001), WorkerId(20_002)]
        );
        assert_eq!(feed.len(), 3);
        assert!(feed.iter().all(|e| e.icon == ActivityIcon::Hammer));
        assert_eq!(people[0].activity, CitizenActivity::WorkingOnContract);
        assert_eq!(people[3].activity, CitizenActivity::Idle);
    }

    #[test]
    fn test_players_count_toward_cap() {
        let mut contract = Contract::new(BuildingType::Vault).with_status(ContractStatus::InProgress);
        contract.add_worker(PlayerId(1));
        contract.add_worker(PlayerId(2));
        let mut kingdom = kingdom_with(contract);
        let mut people = citizens(&kingdom.id, 8);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut always_join(),
            now(),
        );

        assert_eq!(joined, 1);
        assert_eq!(kingdom.active_contract.as_ref().unwrap().worker_count(), 3);
    }

    #[test]
    fn test_full_contract_gains_nobody() {
        let mut contract = Contract::new(BuildingType::Vault);
        for p in 1..=3 {
            contract.add_worker(PlayerId(p));
        }
        let mut kingdom = kingdom_with(contract);
        let mut people = citizens(&kingdom.id, 8);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut always_join(),
            now(),
        );

        assert_eq!(joined, 0);
        assert_eq!(kingdom.active_contract.as_ref().unwrap().worker_count(), 3);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_existing_citizen_workers_are_skipped() {
        let kingdom_id = KingdomId::from("ironhold");
        let mut people = citizens(&kingdom_id, 5);
        let mut contract = Contract::new(BuildingType::Market);
        contract.add_worker(people[0].id);
        let mut kingdom = kingdom_with(contract);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut always_join(),
            now(),
        );

        assert_eq!(joined, 2);
        assert_eq!(
            kingdom.active_contract.as_ref().unwrap().workers(),
            &[WorkerId(20_000), WorkerId(20_001), WorkerId(20_002)]
        );
    }

    #[test]
    fn test_nobody_joins_when_draws_are_high() {
        let mut kingdom = kingdom_with(Contract::new(BuildingType::Walls));
        let mut people = citizens(&kingdom.id, 15);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut never_join(),
            now(),
        );

        assert_eq!(joined, 0);
        assert_eq!(kingdom.active_contract.as_ref().unwrap().worker_count(), 0);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_no_contract_returns_zero() {
        let mut kingdom = Kingdom::new("ironhold", "Ironhold");
        let mut people = citizens(&kingdom.id, 5);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(
            &mut kingdom,
            &mut people,
            &mut feed,
            &PopulaceConfig::default(),
            &mut always_join(),
            now(),
        );

        assert_eq!(joined, 0);
        assert!(kingdom.active_contract.is_none());
        assert!(feed.is_empty());
    }

    #[test]
    fn test_finished_contracts_are_untouched() {
        for status in [ContractStatus::Completed, ContractStatus::Cancelled] {
            let contract = Contract::new(BuildingType::Smelter).with_status(status);
            let before = contract.clone();
            let mut kingdom = kingdom_with(contract);
            let mut people = citizens(&kingdom.id, 5);
            let mut feed = ActivityFeed::new(20);

            let joined = allocate_workers(
                &mut kingdom,
                &mut people,
                &mut feed,
                &PopulaceConfig::default(),
                &mut always_join(),
                now(),
            );

            assert_eq!(joined, 0);
            assert_eq!(kingdom.active_contract.as_ref(), Some(&before));
            assert!(feed.is_empty());
        }
    }

    #[test]
    fn test_join_rate_is_roughly_thirty_percent() {
        let config = PopulaceConfig {
            max_contract_workers: usize::MAX,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut kingdom = kingdom_with(Contract::new(BuildingType::Barracks));
        let mut people = citizens(&kingdom.id, 2_000);
        let mut feed = ActivityFeed::new(20);

        let joined = allocate_workers(&mut kingdom, &mut people, &mut feed, &config, &mut rng, now());

        assert!(joined > 500 && joined < 700, "joined {}", joined);
        assert_eq!(feed.len(), 20);
    }
}
