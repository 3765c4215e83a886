//! # Workflows Module
//!
//! The highest-level, user-facing layer: complete load passes from data
//! sources to a finalized registry and deferred registration table. Host
//! integrations and the CLI start here.

pub mod load;
