//! Domain Services - Logic that spans more than one agent

pub mod crucible;
