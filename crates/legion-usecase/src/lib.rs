//! # LEGION Use Case Layer
//!
//! Application-specific business rules.
//! Each use case pulls what it needs through the `RosterRepository` port
//! and hands it to the domain services.

pub mod analyze_crucible;
pub mod roster_status;

pub use analyze_crucible::{AnalyzeCrucibleUseCase, AnalyzeError, CrucibleRequest};
pub use roster_status::{RosterStatus, RosterStatusUseCase};
