//! Citizen generation - randomized records for a kingdom's background population

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::citizen::record::{Citizen, CitizenActivity};
use crate::core::config::PopulaceConfig;
use crate::core::types::{CitizenId, KingdomId};

const FIRST_NAMES: [&str; 20] = [
    "Aldric", "Brenna", "Cedric", "Dagny", "Edda", "Falk", "Gisela", "Hakon", "Ilse", "Jorund",
    "Katla", "Leif", "Maren", "Nils", "Osric", "Petra", "Runa", "Sigrid", "Tove", "Ulric",
];

/// Honorifics appended to first names
///
/// The repeated empty entries are the weighting: bare names come up
/// 7 times in 12.
const HONORIFICS: [&str; 12] = [
    "", "", "", "", "", "", "", "the Bold", "the Wise", "Ironhand", "the Elder", "of the Vale",
];

/// Generate one citizen for a kingdom
///
/// Every attribute is an independent uniform draw from the configured
/// ranges. Citizens always start idle.
pub fn generate_citizen<R: Rng + ?Sized>(
    kingdom: &KingdomId,
    config: &PopulaceConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Citizen {
    let id = CitizenId(rng.gen_range(config.npc_id_min..=config.npc_id_max));
    let name = generate_name(rng);
    let reputation = rng.gen_range(config.reputation_min..=config.reputation_max);
    let attack = rng.gen_range(config.attack_min..=config.attack_max);
    let defense = rng.gen_range(config.defense_min..=config.defense_max);
    let is_online = rng.gen_bool(0.5);
    let seen_ago = rng.gen_range(0..=config.last_seen_window_secs.max(0));

    Citizen {
        id,
        name,
        home_kingdom: kingdom.clone(),
        reputation,
        attack,
        defense,
        is_online,
        last_seen: now - Duration::seconds(seen_ago),
        activity: CitizenActivity::Idle,
    }
}

fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let honorific = HONORIFICS[rng.gen_range(0..HONORIFICS.len())];

    if honorific.is_empty() {
        first.to_string()
    } else {
        format!("{} {}", first, honorific)
    }
}
