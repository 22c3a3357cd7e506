//! Utility modules for the feed generator.

pub mod date;
