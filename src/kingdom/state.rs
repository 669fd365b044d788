//! Kingdom state consumed by the labor and tax systems

use serde::{Deserialize, Serialize};

use crate::core::types::KingdomId;
use crate::kingdom::contract::Contract;

/// What the simulation needs from a kingdom
pub trait KingdomState {
    fn id(&self) -> &KingdomId;

    fn treasury(&self) -> u64;

    /// Add gold to the treasury
    fn deposit(&mut self, amount: u64);

    fn iron_per_action(&self) -> u64;

    fn steel_per_action(&self) -> u64;

    /// Tax owed on a raw mined amount
    fn calculate_tax(&self, mined: u64) -> u64;

    fn active_contract(&self) -> Option<&Contract>;

    fn active_contract_mut(&mut self) -> Option<&mut Contract>;
}

/// Resource yield per mining action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningRates {
    pub iron_per_action: u64,
    pub steel_per_action: u64,
}

impl MiningRates {
    pub fn new(iron_per_action: u64, steel_per_action: u64) -> Self {
        Self {
            iron_per_action,
            steel_per_action,
        }
    }

    /// Rates for a mine at a given upgrade level
    ///
    /// Iron grows by 2 per level. Steel starts at level 2 and grows by 1.
    pub fn for_mine_level(level: u32) -> Self {
        let level = u64::from(level.max(1));
        Self {
            iron_per_action: 3 + 2 * (level - 1),
            steel_per_action: level.saturating_sub(1),
        }
    }
}

impl Default for MiningRates {
    fn default() -> Self {
        Self::for_mine_level(1)
    }
}

/// Flat percentage tax, rounded down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    pub rate_percent: u32,
}

impl TaxPolicy {
    pub fn new(rate_percent: u32) -> Self {
        Self {
            rate_percent: rate_percent.min(100),
        }
    }

    pub fn apply(&self, mined: u64) -> u64 {
        mined.saturating_mul(u64::from(self.rate_percent)) / 100
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Plain kingdom record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kingdom {
    pub id: KingdomId,
    pub name: String,
    pub treasury: u64,
    pub mining: MiningRates,
    pub tax_policy: TaxPolicy,
    pub active_contract: Option<Contract>,
}

impl Kingdom {
    pub fn new(id: impl Into<KingdomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            treasury: 0,
            mining: MiningRates::default(),
            tax_policy: TaxPolicy::default(),
            active_contract: None,
        }
    }

    pub fn with_treasury(mut self, treasury: u64) -> Self {
        self.treasury = treasury;
        self
    }

    pub fn with_mining(mut self, mining: MiningRates) -> Self {
        self.mining = mining;
        self
    }

    pub fn with_tax_policy(mut self, tax_policy: TaxPolicy) -> Self {
        self.tax_policy = tax_policy;
        self
    }

    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.active_contract = Some(contract);
        self
    }
}

impl KingdomState for Kingdom {
    fn id(&self) -> &KingdomId {
        &self.id
    }

    fn treasury(&self) -> u64 {
        self.treasury
    }

    fn deposit(&mut self, amount: u64) {
        self.treasury = self.treasury.saturating_add(amount);
    }

    fn iron_per_action(&self) -> u64 {
        self.mining.iron_per_action
    }

    fn steel_per_action(&self) -> u64 {
        self.mining.steel_per_action
    }

    fn calculate_tax(&self, mined: u64) -> u64 {
        self.tax_policy.apply(mined)
    }

    fn active_contract(&self) -> Option<&Contract> {
        self.active_contract.as_ref()
    }

    fn active_contract_mut(&mut self) -> Option<&mut Contract> {
        self.active_contract.as_mut()
    }
}
