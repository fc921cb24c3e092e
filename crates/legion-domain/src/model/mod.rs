//! Domain Models - The vocabulary of the archive
//!
//! Agents belong to a bloc and carry triarchic cognitive scores.

pub mod agent;
pub mod bloc;
