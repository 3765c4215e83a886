//! # Engine Module
//!
//! This module implements the stateful load pass that turns parsed chemical
//! data into a populated, read-only registry plus a deferred registration
//! table for the host engine.
//!
//! ## Overview
//!
//! The engine layer owns all mutable state of the pass and enforces its
//! one-shot lifecycle. All writes happen during a single synchronous
//! initialization callback before any reader can observe the index, so the
//! structures here need no locking.
//!
//! - **Registry Index** ([`index`]) - Slotmap-backed descriptor storage with
//!   O(1) name and atomic-number lookups, append-only during the pass
//! - **Registration Driver** ([`driver`]) - The `Unloaded -> ElementsLoaded
//!   -> CompoundsLoaded -> Finalized` state machine orchestrating load order
//! - **Host Boundary** ([`deferred`]) - The (key, factory) table and sink
//!   trait handed to the host engine's deferred registry
//! - **Render Config** ([`config`]) - Declarative abbreviation-rendering
//!   options consumed by the host's config subsystem
//! - **Error Handling** ([`error`]) - The fatal error taxonomy of the pass

pub mod config;
pub mod deferred;
pub mod driver;
pub mod error;
pub mod index;
