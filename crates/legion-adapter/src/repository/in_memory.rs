//! In-Memory Roster Repository
//!
//! Built once from the loader output and shared read-only behind `Arc`.
//! There are no writers after construction, so no locks.

use std::sync::Arc;

use legion_domain::{Agent, RepositoryError, RosterRepository};
use serde_json::Value;

use super::record::RosterRecord;

/// In-memory roster, in file order
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepository {
    records: Arc<Vec<RosterRecord>>,
}

impl InMemoryRosterRepository {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            records: Arc::new(values.into_iter().map(RosterRecord::new).collect()),
        }
    }

    /// The roster exactly as loaded, in file order
    pub fn raw_records(&self) -> impl Iterator<Item = &Value> + '_ {
        self.records.iter().map(RosterRecord::raw)
    }

    /// Records whose projection has no usable name
    pub fn unnamed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.agent().name().is_none())
            .count()
    }
}

impl RosterRepository for InMemoryRosterRepository {
    fn find_by_name(&self, name: &str) -> Result<Option<Agent>, RepositoryError> {
        Ok(self
            .records
            .iter()
            .map(RosterRecord::agent)
            .find(|a| a.matches_name(name))
            .cloned())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.len())
    }
}
