//! Tax accrual - turning a day of citizen mining into treasury income
//!
//! Formula:
//! - resource value = iron per action + steel weight * steel per action
//! - miners = max(1, citizens * miner share / 100)
//! - mined = resource value * miners
//! - tax = kingdom's tax on mined

use chrono::{DateTime, Utc};

use crate::activity::feed::{ActivityFeed, ActivityIcon};
use crate::core::config::PopulaceConfig;
use crate::kingdom::state::KingdomState;

/// Breakdown of one accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxAccrual {
    pub miners: u64,
    pub resource_value: u64,
    pub total_mined: u64,
    pub tax: u64,
}

/// Work out what a kingdom's citizens would pay, without paying it
///
/// Returns `None` for a kingdom with no citizens.
pub fn compute_tax<K>(kingdom: &K, citizen_count: usize, config: &PopulaceConfig) -> Option<TaxAccrual>
where
    K: KingdomState + ?Sized,
{
    if citizen_count == 0 {
        return None;
    }

    let resource_value = kingdom
        .iron_per_action()
        .saturating_add(config.steel_weight.saturating_mul(kingdom.steel_per_action()));
    let miners = (citizen_count.saturating_mul(config.miner_share_percent) / 100).max(1) as u64;
    let total_mined = resource_value.saturating_mul(miners);
    let tax = kingdom.calculate_tax(total_mined);

    Some(TaxAccrual {
        miners,
        resource_value,
        total_mined,
        tax,
    })
}

/// Collect a day's tax into the treasury
///
/// Returns the amount collected. Nothing is recorded when it is zero.
pub fn accrue_tax<K>(
    kingdom: &mut K,
    citizen_count: usize,
    feed: &mut ActivityFeed,
    config: &PopulaceConfig,
    now: DateTime<Utc>,
) -> u64
where
    K: KingdomState + ?Sized,
{
    let Some(accrual) = compute_tax(&*kingdom, citizen_count, config) else {
        tracing::debug!("No citizens in {}, no tax", kingdom.id());
        return 0;
    };

    if accrual.tax == 0 {
        return 0;
    }

    kingdom.deposit(accrual.tax);
    tracing::debug!(
        "{} miners in {} produced {}, collected {} in tax",
        accrual.miners,
        kingdom.id(),
        accrual.total_mined,
        accrual.tax
    );
    feed.record(
        format!(
            "{} citizens mined resources, {}g collected in taxes",
            accrual.miners, accrual.tax
        ),
        kingdom.id(),
        ActivityIcon::Coins,
        now,
    );

    accrual.tax
}
