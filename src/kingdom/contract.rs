//! Building-upgrade contracts that citizens and players can work on

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::WorkerId;

/// Building a contract upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Walls,
    Vault,
    Mine,
    Smelter,
    Market,
    Barracks,
}

impl BuildingType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::Walls => "Walls",
            BuildingType::Vault => "Vault",
            BuildingType::Mine => "Mine",
            BuildingType::Smelter => "Smelter",
            BuildingType::Market => "Market",
            BuildingType::Barracks => "Barracks",
        }
    }
}

/// Lifecycle of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Posted, nobody has started
    Open,
    /// Work under way
    InProgress,
    Completed,
    Cancelled,
}

impl ContractStatus {
    /// Only open and in-progress contracts take on workers
    pub fn accepts_workers(&self) -> bool {
        matches!(self, ContractStatus::Open | ContractStatus::InProgress)
    }
}

/// Unique contract identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub Uuid);

impl ContractId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

/// A building upgrade with its crew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub building_type: BuildingType,
    pub status: ContractStatus,
    /// Workers in join order, each at most once
    workers: Vec<WorkerId>,
}

impl Contract {
    pub fn new(building_type: BuildingType) -> Self {
        Self {
            id: ContractId::new(),
            building_type,
            status: ContractStatus::Open,
            workers: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ContractStatus) -> Self {
        self.status = status;
        self
    }

    /// Add a worker, returns false if they are already on the crew
    pub fn add_worker(&mut self, worker: impl Into<WorkerId>) -> bool {
        let worker = worker.into();
        if self.workers.contains(&worker) {
            return false;
        }
        self.workers.push(worker);
        true
    }

    pub fn has_worker(&self, worker: impl Into<WorkerId>) -> bool {
        self.workers.contains(&worker.into())
    }

    pub fn workers(&self) -> &[WorkerId] {
        &self.workers
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Move an open contract into progress
    pub fn begin(&mut self) -> bool {
        if self.status == ContractStatus::Open {
            self.status = ContractStatus::InProgress;
            true
        } else {
            false
        }
    }

    pub fn complete(&mut self) {
        self.status = ContractStatus::Completed;
    }

    pub fn cancel(&mut self) {
        self.status = ContractStatus::Cancelled;
    }
}
