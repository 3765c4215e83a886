//! # ChemLib Core Library
//!
//! A data-driven registry of chemistry-themed game items (elements, compounds,
//! ingots, block items), loaded once at startup from bundled JSON definitions
//! and handed to a host game engine as a deferred registration table.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture so the data
//! pass stays independent of any host engine's object model.
//!
//! - **[`core`]: The Foundation.** Immutable descriptor records
//!   (`ElementDescriptor`, `CompoundDescriptor`, ...), the JSON document
//!   schema, and the parsing layer with its error taxonomy.
//!
//! - **[`engine`]: The Logic Core.** The stateful load pass: the
//!   `RegistryIndex` (slotmap arena plus name and atomic-number indexes),
//!   the `RegistrationDriver` state machine that enforces the
//!   elements-before-compounds load order, and the deferred-factory table
//!   that forms the boundary with the host engine.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry points: run
//!   the complete load pass over external files or over the data set bundled
//!   into the crate, producing a read-only `ChemicalRegistry` and the
//!   `DeferredItems` table for the host.

pub mod core;
pub mod engine;
pub mod workflows;
