//! # LEGION Domain Layer
//!
//! Pure scoring logic for the archivist: no JSON, no HTTP, no files.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Agent, Bloc, TriarchicIq                      ││
//! │  │  repository/- RosterRepository port                         ││
//! │  │  service/   - Crucible (pairwise synergy)                   ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The roster itself is raw JSON owned by the adapter layer. What reaches
//! this crate is the typed projection of each record.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    agent::{Agent, TriarchicIq, DEFAULT_ANALYTICAL},
    bloc::Bloc,
};

pub use repository::roster_repository::{RepositoryError, RosterRepository};

pub use service::crucible::{Crucible, SynergyNote, SynergyReport};
