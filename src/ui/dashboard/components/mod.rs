//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod charts;
pub mod footer;
pub mod header;
pub mod logs;
pub mod metrics;
pub mod validators;
