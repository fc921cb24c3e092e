//! Analyze crucible - Resolve two agents by name and score their synergy
//!
//! Both names must resolve. There is no partial result.

use legion_domain::{Crucible, RepositoryError, RosterRepository, SynergyReport};

/// The two names to pit against each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrucibleRequest {
    pub agent_a_name: String,
    pub agent_b_name: String,
}

impl CrucibleRequest {
    pub fn new(agent_a_name: impl Into<String>, agent_b_name: impl Into<String>) -> Self {
        Self {
            agent_a_name: agent_a_name.into(),
            agent_b_name: agent_b_name.into(),
        }
    }
}

/// Errors from the crucible use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// At least one name has no exact match in the roster
    AgentNotFound { missing: Vec<String> },
    /// The roster could not be queried
    Repository(RepositoryError),
}

impl core::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnalyzeError::AgentNotFound { .. } => {
                write!(f, "One or both agents not found.")
            }
            AnalyzeError::Repository(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzeError::Repository(err) => Some(err),
            AnalyzeError::AgentNotFound { .. } => None,
        }
    }
}

impl From<RepositoryError> for AnalyzeError {
    fn from(err: RepositoryError) -> Self {
        AnalyzeError::Repository(err)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeCrucibleUseCase {
    crucible: Crucible,
}

impl AnalyzeCrucibleUseCase {
    pub fn execute<R: RosterRepository + ?Sized>(
        &self,
        roster: &R,
        request: &CrucibleRequest,
    ) -> Result<SynergyReport, AnalyzeError> {
        let a = roster.find_by_name(&request.agent_a_name)?;
        let b = roster.find_by_name(&request.agent_b_name)?;

        match (a, b) {
            (Some(a), Some(b)) => Ok(self.crucible.evaluate(&a, &b)),
            (a, b) => {
                let mut missing = Vec::new();
                if a.is_none() {
                    missing.push(request.agent_a_name.clone());
                }
                if b.is_none() {
                    missing.push(request.agent_b_name.clone());
                }
                Err(AnalyzeError::AgentNotFound { missing })
            }
        }
    }
}
