//! # Data Loading Module
//!
//! Parses the two bundled JSON documents (`elements.json`, `compounds.json`)
//! into ordered record sequences.
//!
//! Parsing is strict: a missing or malformed required field, or an unknown
//! matter-state string, fails the whole document — the mod cannot start with
//! partial data. Compound component references are *not* resolved here; the
//! records carry raw names and the engine layer resolves them against the
//! registry index in load order.

pub mod loader;
pub mod schema;
