use crate::core::models::compound::CompoundDescriptor;
use crate::core::models::element::ElementDescriptor;
use crate::core::models::ids::ItemId;
use crate::core::models::ingot::IngotDescriptor;
use crate::core::models::{Descriptor, ItemKind};
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("Duplicate item name '{name}'")]
    DuplicateName { name: String },
    #[error("Duplicate atomic number {atomic_number} for element '{name}'")]
    DuplicateAtomicNumber { atomic_number: u32, name: String },
}

/// Append-only storage for all item descriptors built during the load pass.
///
/// Descriptors live in a slot map owned exclusively by the index; lookup maps
/// key them by name (one namespace across all item kinds) and, for elements,
/// by atomic number. Insertion order is preserved so the deferred
/// registration table and all iteration are deterministic. There is no
/// removal: the index grows monotonically until the pass finalizes.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    items: SlotMap<ItemId, Descriptor>,
    names: HashMap<String, ItemId>,
    atomic_numbers: HashMap<u32, ItemId>,
    order: Vec<ItemId>,
}

impl RegistryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, indexing it by name and (for elements) by atomic
    /// number. Fails without modifying the index if either key is taken.
    pub fn insert(&mut self, descriptor: Descriptor) -> Result<ItemId, RegistryError> {
        if self.names.contains_key(descriptor.name()) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name().to_string(),
            });
        }
        if let Descriptor::Element(element) = &descriptor {
            if self.atomic_numbers.contains_key(&element.atomic_number) {
                return Err(RegistryError::DuplicateAtomicNumber {
                    atomic_number: element.atomic_number,
                    name: element.name.clone(),
                });
            }
        }

        let name = descriptor.name().to_string();
        let atomic_number = descriptor.as_element().map(|e| e.atomic_number);
        let id = self.items.insert(descriptor);
        self.names.insert(name, id);
        if let Some(number) = atomic_number {
            self.atomic_numbers.insert(number, id);
        }
        self.order.push(id);
        Ok(id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Descriptor> {
        self.items.get(id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Descriptor> {
        self.names.get(name).and_then(|id| self.items.get(*id))
    }

    pub fn element_by_name(&self, name: &str) -> Option<&ElementDescriptor> {
        self.by_name(name).and_then(Descriptor::as_element)
    }

    pub fn element_by_atomic_number(&self, atomic_number: u32) -> Option<&ElementDescriptor> {
        self.atomic_numbers
            .get(&atomic_number)
            .and_then(|id| self.items.get(*id))
            .and_then(Descriptor::as_element)
    }

    pub fn compound_by_name(&self, name: &str) -> Option<&CompoundDescriptor> {
        self.by_name(name).and_then(Descriptor::as_compound)
    }

    pub fn ingot_by_name(&self, name: &str) -> Option<&IngotDescriptor> {
        self.by_name(name).and_then(Descriptor::as_ingot)
    }

    /// The id of the element registered under `name`, if any.
    pub fn element_id_by_name(&self, name: &str) -> Option<ItemId> {
        let id = *self.names.get(name)?;
        self.items.get(id)?.as_element().map(|_| id)
    }

    /// The id of the compound registered under `name`, if any.
    pub fn compound_id_by_name(&self, name: &str) -> Option<ItemId> {
        let id = *self.names.get(name)?;
        self.items.get(id)?.as_compound().map(|_| id)
    }

    /// Iterates over all descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Descriptor)> {
        self.order.iter().filter_map(|id| Some((*id, self.items.get(*id)?)))
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.iter().filter(|(_, d)| d.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The finalized, read-only registry handed to consumers after the pass.
///
/// Wraps the index so no insertion is reachable once the driver has
/// finalized; consumers receive references to descriptors, never ownership.
#[derive(Debug, Clone)]
pub struct ChemicalRegistry {
    index: RegistryIndex,
}

impl ChemicalRegistry {
    pub(crate) fn new(index: RegistryIndex) -> Self {
        Self { index }
    }

    pub fn get(&self, id: ItemId) -> Option<&Descriptor> {
        self.index.get(id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Descriptor> {
        self.index.by_name(name)
    }

    pub fn element_by_name(&self, name: &str) -> Option<&ElementDescriptor> {
        self.index.element_by_name(name)
    }

    pub fn element_by_atomic_number(&self, atomic_number: u32) -> Option<&ElementDescriptor> {
        self.index.element_by_atomic_number(atomic_number)
    }

    pub fn compound_by_name(&self, name: &str) -> Option<&CompoundDescriptor> {
        self.index.compound_by_name(name)
    }

    pub fn ingot_by_name(&self, name: &str) -> Option<&IngotDescriptor> {
        self.index.ingot_by_name(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Descriptor)> {
        self.index.iter()
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.index.count_of(kind)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::matter::MatterState;

    fn element(name: &str, atomic_number: u32) -> Descriptor {
        Descriptor::Element(ElementDescriptor {
            name: name.to_string(),
            atomic_number,
            abbreviation: name[..1].to_uppercase(),
            matter_state: MatterState::Solid,
            color: "#FFFFFF".to_string(),
        })
    }

    #[test]
    fn lookups_by_name_and_atomic_number_agree() {
        let mut index = RegistryIndex::new();
        index.insert(element("carbon", 6)).unwrap();
        index.insert(element("nitrogen", 7)).unwrap();

        let by_name = index.element_by_name("carbon").unwrap();
        let by_number = index.element_by_atomic_number(6).unwrap();
        assert_eq!(by_name, by_number);
        assert_eq!(by_name.atomic_number, 6);
    }

    #[test]
    fn absent_keys_return_none() {
        let index = RegistryIndex::new();
        assert!(index.element_by_name("unobtainium").is_none());
        assert!(index.element_by_atomic_number(999).is_none());
        assert!(index.compound_by_name("water").is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut index = RegistryIndex::new();
        index.insert(element("carbon", 6)).unwrap();
        let err = index.insert(element("carbon", 12)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "carbon".to_string()
            }
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_atomic_number_is_rejected() {
        let mut index = RegistryIndex::new();
        index.insert(element("carbon", 6)).unwrap();
        let err = index.insert(element("graphite", 6)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateAtomicNumber {
                atomic_number: 6,
                name: "graphite".to_string()
            }
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut index = RegistryIndex::new();
        for (name, number) in [("carbon", 6), ("nitrogen", 7), ("oxygen", 8)] {
            index.insert(element(name, number)).unwrap();
        }
        let names: Vec<_> = index.iter().map(|(_, d)| d.name().to_string()).collect();
        assert_eq!(names, ["carbon", "nitrogen", "oxygen"]);
    }

    #[test]
    fn kind_filtered_id_lookups_do_not_cross_kinds() {
        let mut index = RegistryIndex::new();
        let carbon = index.insert(element("carbon", 6)).unwrap();
        index
            .insert(Descriptor::Ingot(IngotDescriptor {
                name: "carbon_ingot".to_string(),
                element: carbon,
            }))
            .unwrap();

        assert!(index.element_id_by_name("carbon").is_some());
        assert!(index.compound_id_by_name("carbon").is_none());
        assert!(index.element_id_by_name("carbon_ingot").is_none());
        assert!(index.ingot_by_name("carbon_ingot").is_some());
    }
}
