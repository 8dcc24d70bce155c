//! Command implementations for costar

pub mod dispatch;
pub mod format;
pub mod play;
pub mod query;
