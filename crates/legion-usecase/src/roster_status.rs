//! Roster status - Liveness plus the size of the loaded roster

use legion_domain::{RepositoryError, RosterRepository};

/// Snapshot reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStatus {
    pub database_size: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterStatusUseCase;

impl RosterStatusUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<R: RosterRepository + ?Sized>(
        &self,
        roster: &R,
    ) -> Result<RosterStatus, RepositoryError> {
        Ok(RosterStatus {
            database_size: roster.count()?,
        })
    }
}
