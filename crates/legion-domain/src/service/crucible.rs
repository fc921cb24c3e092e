//! Crucible - Pairwise synergy between two agents
//!
//! The score starts at a neutral 50 and is adjusted by two checks, in
//! this order:
//! 1. Bloc: shared known bloc adds 40, Thesis vs Antithesis subtracts 40
//! 2. Analytical IQ: a gap strictly below 0.15 adds 10
//!
//! The result is clamped to 0..=100. Deterministic, no I/O.

use crate::model::agent::Agent;
use crate::model::bloc::Bloc;

/// Neutral starting score
pub const BASE_SCORE: i32 = 50;
/// Added when both agents share a known bloc
pub const ALIGNMENT_BONUS: i32 = 40;
/// Subtracted for a Thesis/Antithesis pairing
pub const OPPOSITION_PENALTY: i32 = 40;
/// Added when analytical scores are close
pub const RESONANCE_BONUS: i32 = 10;
/// Analytical gap must be strictly below this for resonance
pub const RESONANCE_THRESHOLD: f64 = 0.15;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Rationale attached to a synergy score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynergyNote {
    /// Both agents belong to the same known bloc
    StrategicAlignment { bloc: Bloc },
    /// One agent is Thesis, the other Antithesis
    DialecticalOpposition,
    /// Analytical scores are within the resonance threshold
    CognitiveResonance,
}

impl core::fmt::Display for SynergyNote {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SynergyNote::StrategicAlignment { bloc } => {
                write!(f, "Strategic Alignment: Both belong to {}.", bloc)
            }
            SynergyNote::DialecticalOpposition => {
                write!(f, "Dialectical Opposition: Order vs Chaos.")
            }
            SynergyNote::CognitiveResonance => {
                write!(f, "Cognitive Resonance: Similar Analytical processing.")
            }
        }
    }
}

/// Outcome of a crucible run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynergyReport {
    score: u8,
    notes: Vec<SynergyNote>,
}

impl SynergyReport {
    /// Clamped score in 0..=100
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Notes in evaluation order (bloc check first)
    pub fn notes(&self) -> &[SynergyNote] {
        &self.notes
    }

    /// Notes rendered as text
    pub fn note_texts(&self) -> Vec<String> {
        self.notes.iter().map(ToString::to_string).collect()
    }
}

/// The synergy calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Crucible;

impl Crucible {
    pub fn new() -> Self {
        Self
    }

    /// Score the pairing of `a` and `b`
    pub fn evaluate(&self, a: &Agent, b: &Agent) -> SynergyReport {
        let mut score = BASE_SCORE;
        let mut notes = Vec::new();

        let (bloc_a, bloc_b) = (a.bloc(), b.bloc());
        if bloc_a == bloc_b && !bloc_a.is_unknown() {
            score += ALIGNMENT_BONUS;
            notes.push(SynergyNote::StrategicAlignment {
                bloc: bloc_a.clone(),
            });
        } else if bloc_a.opposes(bloc_b) {
            score -= OPPOSITION_PENALTY;
            notes.push(SynergyNote::DialecticalOpposition);
        }

        if (a.analytical() - b.analytical()).abs() < RESONANCE_THRESHOLD {
            score += RESONANCE_BONUS;
            notes.push(SynergyNote::CognitiveResonance);
        }

        // Always fits in u8 after the clamp
        let score = score.clamp(MIN_SCORE, MAX_SCORE) as u8;

        SynergyReport { score, notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str, bloc: Bloc, analytical: f64) -> Agent {
        Agent::new(name).with_bloc(bloc).with_analytical(analytical)
    }

    #[test]
    fn test_dialectical_opposition() {
        let a = agent("Order", Bloc::Thesis, 0.9);
        let b = agent("Chaos", Bloc::Antithesis, 0.2);

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 10);
        assert_eq!(report.notes(), &[SynergyNote::DialecticalOpposition]);
    }

    #[test]
    fn test_opposition_either_order() {
        let a = agent("Chaos", Bloc::Antithesis, 0.9);
        let b = agent("Order", Bloc::Thesis, 0.2);

        assert_eq!(Crucible::new().evaluate(&a, &b).score(), 10);
    }

    #[test]
    fn test_alignment_and_resonance() {
        let a = agent("One", Bloc::Synthesis, 0.40);
        let b = agent("Two", Bloc::Synthesis, 0.50);

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 100);
        assert_eq!(
            report.note_texts(),
            vec![
                "Strategic Alignment: Both belong to SYNTHESIS.".to_string(),
                "Cognitive Resonance: Similar Analytical processing.".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_blocs_do_not_align() {
        // Both default to 0.5 analytical, so only resonance applies
        let a = Agent::new("A");
        let b = Agent::new("B");

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 60);
        assert_eq!(report.notes(), &[SynergyNote::CognitiveResonance]);
    }

    #[test]
    fn test_other_bloc_aligns_with_itself() {
        let a = agent("A", Bloc::parse("ABSTAIN"), 0.1);
        let b = agent("B", Bloc::parse("ABSTAIN"), 0.9);

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 90);
        assert_eq!(
            report.note_texts(),
            vec!["Strategic Alignment: Both belong to ABSTAIN.".to_string()]
        );
    }

    #[test]
    fn test_unrelated_blocs_are_neutral() {
        let a = agent("A", Bloc::Thesis, 0.0);
        let b = agent("B", Bloc::Synthesis, 1.0);

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 50);
        assert!(report.notes().is_empty());
    }

    #[test]
    fn test_resonance_threshold_is_strict() {
        let a = agent("A", Bloc::Unknown, 0.0);
        let b = agent("B", Bloc::Unknown, 0.15);

        let report = Crucible::new().evaluate(&a, &b);

        assert_eq!(report.score(), 50);
        assert!(report.notes().is_empty());
    }

    #[test]
    fn test_score_always_in_range() {
        let blocs = [
            Bloc::Thesis,
            Bloc::Antithesis,
            Bloc::Synthesis,
            Bloc::Unknown,
            Bloc::parse("ABSTAIN"),
        ];
        let iqs = [0.0, 0.1, 0.5, 0.9, 1.0];
        let crucible = Crucible::new();

        for bloc_a in &blocs {
            for bloc_b in &blocs {
                for &iq_a in &iqs {
                    for &iq_b in &iqs {
                        let report = crucible.evaluate(
                            &agent("A", bloc_a.clone(), iq_a),
                            &agent("B", bloc_b.clone(), iq_b),
                        );
                        assert!((10..=100).contains(&report.score()));
                    }
                }
            }
        }
    }
}
