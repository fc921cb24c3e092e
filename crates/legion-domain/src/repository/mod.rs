//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait RosterRepo      │  InMemoryRosterRepo
//!   fn find_by_name()   │    (loaded once from JSON)
//!   fn count()          │
//! ```

pub mod roster_repository;
