//! # LEGION Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP)
//! - `loader/` - The one-time JSON dataset read
//! - `repository/` - Roster storage implementing the domain port

pub mod controller;
pub mod error;
pub mod loader;
pub mod repository;

pub use controller::http::{routes, AppState};
pub use error::{ApiError, LoadError};
pub use loader::dataset::DatasetLoader;
pub use repository::in_memory::InMemoryRosterRepository;
