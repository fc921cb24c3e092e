//! Dataset loading - the one-time read of the roster file

pub mod dataset;
