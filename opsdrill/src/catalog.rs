//! Process-lifetime registry of mission definitions.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::mission::{Mission, MissionSummary};

/// Immutable-after-init catalog. Registration is append/overwrite by id
/// and happens only at process initialization; there is no removal.
///
/// Listing preserves registration order, so missions are kept in a `Vec`
/// with an id index alongside.
#[derive(Debug, Default)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
    index: HashMap<String, usize>,
}

impl MissionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mission, replacing any previous definition with the
    /// same id in place (registration order is kept).
    pub fn register(&mut self, mission: Mission) {
        match self.index.get(&mission.id) {
            Some(&slot) => self.missions[slot] = mission,
            None => {
                self.index.insert(mission.id.clone(), self.missions.len());
                self.missions.push(mission);
            }
        }
    }

    /// Summaries for every registered mission, in registration order.
    pub fn list(&self) -> Vec<MissionSummary> {
        self.missions.iter().map(Mission::summary).collect()
    }

    pub fn get(&self, mission_id: &str) -> Result<&Mission, StoreError> {
        self.index
            .get(mission_id)
            .map(|&slot| &self.missions[slot])
            .ok_or_else(|| StoreError::MissionNotFound(mission_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}
