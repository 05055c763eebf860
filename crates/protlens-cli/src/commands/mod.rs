//! Command implementations

pub mod entry;
pub mod search;
