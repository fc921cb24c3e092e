//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from legion-domain.

pub mod in_memory;
pub mod record;
