//! Roster Repository - Read-only access to the loaded roster
//!
//! The roster is written once at startup and never mutated, so the port
//! exposes lookups only.

use crate::model::agent::Agent;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be read
    Unavailable { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Unavailable { message } => {
                write!(f, "Roster unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Roster Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must preserve roster order: `find_by_name` returns the
/// FIRST record whose name matches exactly.
pub trait RosterRepository {
    /// Find the first agent whose name equals `name` (case-sensitive)
    fn find_by_name(&self, name: &str) -> Result<Option<Agent>, RepositoryError>;

    /// Number of records in the roster, including unnamed ones
    fn count(&self) -> Result<usize, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bloc::Bloc;

    struct VecRoster {
        agents: Vec<Agent>,
    }

    impl RosterRepository for VecRoster {
        fn find_by_name(&self, name: &str) -> Result<Option<Agent>, RepositoryError> {
            Ok(self.agents.iter().find(|a| a.matches_name(name)).cloned())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.agents.len())
        }
    }

    #[test]
    fn test_first_match_wins() {
        let repo = VecRoster {
            agents: vec![
                Agent::new("Kant").with_bloc(Bloc::Thesis),
                Agent::unnamed(),
                Agent::new("Kant").with_bloc(Bloc::Antithesis),
            ],
        };

        let found = repo.find_by_name("Kant").unwrap().unwrap();
        assert_eq!(found.bloc(), &Bloc::Thesis);
        assert!(repo.find_by_name("kant").unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::Unavailable {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(err.to_string(), "Roster unavailable: lock poisoned");
    }
}
