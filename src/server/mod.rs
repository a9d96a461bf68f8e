//! Socket acceptance and the state shared across connections.

pub mod context;
pub mod listener;
