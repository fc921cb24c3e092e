//! Agent - One entry of the archive roster
//!
//! This is the typed view of a roster record. The raw record is kept
//! elsewhere and served verbatim; the domain only ever reads the fields
//! below.
//!
//! Names are NOT unique. Lookups take the first record whose name matches.

use super::bloc::Bloc;

/// Analytical score assumed when a record carries none
pub const DEFAULT_ANALYTICAL: f64 = 0.5;

/// Triarchic cognitive scores
///
/// Only the analytical component takes part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriarchicIq {
    analytical: Option<f64>,
}

impl TriarchicIq {
    pub fn new(analytical: Option<f64>) -> Self {
        Self { analytical }
    }

    /// Analytical score, falling back to [`DEFAULT_ANALYTICAL`]
    pub fn analytical(&self) -> f64 {
        self.analytical.unwrap_or(DEFAULT_ANALYTICAL)
    }
}

/// Agent - A named member of some bloc
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Agent {
    /// Lookup key; `None` when the record has no usable name
    name: Option<String>,
    /// Affiliation, `Unknown` when absent
    bloc: Bloc,
    /// Cognitive scores
    triarchic_iq: TriarchicIq,
}

impl Agent {
    /// Create a named agent with an unknown bloc and default scores
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An agent that cannot be looked up by name
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Builder: set bloc
    pub fn with_bloc(mut self, bloc: Bloc) -> Self {
        self.bloc = bloc;
        self
    }

    /// Builder: set triarchic scores
    pub fn with_triarchic_iq(mut self, iq: TriarchicIq) -> Self {
        self.triarchic_iq = iq;
        self
    }

    /// Builder: set the analytical score
    pub fn with_analytical(self, analytical: f64) -> Self {
        self.with_triarchic_iq(TriarchicIq::new(Some(analytical)))
    }

    // ========== Getters ==========

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bloc(&self) -> &Bloc {
        &self.bloc
    }

    pub fn triarchic_iq(&self) -> &TriarchicIq {
        &self.triarchic_iq
    }

    /// Shorthand for `triarchic_iq().analytical()`
    pub fn analytical(&self) -> f64 {
        self.triarchic_iq.analytical()
    }

    /// Exact, case-sensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}
