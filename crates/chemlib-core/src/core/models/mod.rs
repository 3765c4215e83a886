//! # Core Models Module
//!
//! Descriptor records for every item kind the registry can hold.
//!
//! ## Overview
//!
//! A descriptor is an immutable record describing one game item's identity
//! and display/composition data, independent of any engine object. Each item
//! kind has its own record type; [`Descriptor`] is the sum of all of them and
//! is what the registry index actually stores.
//!
//! - [`element`] - Chemical elements keyed by name and atomic number
//! - [`compound`] - Compounds with an ordered, resolved composition list
//! - [`ingot`] - Metal ingots derived from solid elements
//! - [`block_item`] - Item wrappers around host-registered blocks
//! - [`matter`] - The solid/liquid/gas matter-state enum
//! - [`ids`] - The slotmap key type used to reference stored descriptors

pub mod block_item;
pub mod compound;
pub mod element;
pub mod ids;
pub mod ingot;
pub mod matter;

use block_item::BlockItemDescriptor;
use compound::CompoundDescriptor;
use element::ElementDescriptor;
use ingot::IngotDescriptor;

/// The kind of item a descriptor describes, used for counting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Element,
    Compound,
    Ingot,
    BlockItem,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ItemKind::Element => "element",
                ItemKind::Compound => "compound",
                ItemKind::Ingot => "ingot",
                ItemKind::BlockItem => "block item",
            }
        )
    }
}

/// One stored registry entry: any of the four item descriptor kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Element(ElementDescriptor),
    Compound(CompoundDescriptor),
    Ingot(IngotDescriptor),
    BlockItem(BlockItemDescriptor),
}

impl Descriptor {
    /// The registry key of this entry, unique across all item kinds.
    pub fn name(&self) -> &str {
        match self {
            Descriptor::Element(e) => &e.name,
            Descriptor::Compound(c) => &c.name,
            Descriptor::Ingot(i) => &i.name,
            Descriptor::BlockItem(b) => &b.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Descriptor::Element(_) => ItemKind::Element,
            Descriptor::Compound(_) => ItemKind::Compound,
            Descriptor::Ingot(_) => ItemKind::Ingot,
            Descriptor::BlockItem(_) => ItemKind::BlockItem,
        }
    }

    pub fn as_element(&self) -> Option<&ElementDescriptor> {
        match self {
            Descriptor::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundDescriptor> {
        match self {
            Descriptor::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ingot(&self) -> Option<&IngotDescriptor> {
        match self {
            Descriptor::Ingot(i) => Some(i),
            _ => None,
        }
    }
}
