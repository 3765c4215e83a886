//! # Core Module
//!
//! This module provides the fundamental building blocks of the chemical item
//! registry: the descriptor data model and the JSON data-loading layer.
//!
//! ## Overview
//!
//! Everything in this module is stateless and host-agnostic. Descriptors are
//! plain records describing one item's identity and display data; the data
//! submodule turns the two bundled JSON documents into ordered record
//! sequences that the engine layer indexes and registers.
//!
//! - **Descriptor Model** ([`models`]) - Immutable records for elements,
//!   compounds, ingots, and block-backed items
//! - **Data Loading** ([`data`]) - JSON document schema, parse functions, and
//!   the data error taxonomy
//! - **Identifier Tables** ([`utils`]) - Static name sets shared across the
//!   load pass

pub mod data;
pub mod models;
pub mod utils;
