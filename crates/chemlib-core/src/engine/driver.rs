use super::deferred::{BlockRef, DeferredItems};
use super::error::BootstrapError;
use super::index::{ChemicalRegistry, RegistryIndex};
use crate::core::data::loader;
use crate::core::models::Descriptor;
use crate::core::models::block_item::BlockItemDescriptor;
use crate::core::models::compound::{Component, CompoundDescriptor};
use crate::core::models::element::ElementDescriptor;
use crate::core::models::ingot::IngotDescriptor;
use tracing::{debug, info, warn};

/// Phase of the one-shot load pass.
///
/// Transitions are one-directional and occur at most once; the pass is not
/// re-entrant or restartable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    ElementsLoaded,
    CompoundsLoaded,
    Finalized,
}

/// Orchestrates the full load sequence exactly once per process lifetime.
///
/// Elements (and their derived ingots) load first, then compounds, then
/// block-backed item wrappers; finalization consumes the driver and yields
/// the read-only [`ChemicalRegistry`] together with the deferred
/// registration table for the host engine. Any error is fatal to the pass:
/// the driver is meant to be dropped, not resumed.
#[derive(Debug, Default)]
pub struct RegistrationDriver {
    index: RegistryIndex,
    state: LoadState,
}

impl RegistrationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    fn expect_state(
        &self,
        expected: LoadState,
        operation: &'static str,
    ) -> Result<(), BootstrapError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BootstrapError::InvalidTransition {
                operation,
                state: self.state,
            })
        }
    }

    /// Loads and indexes all elements from an `elements.json` document.
    ///
    /// For every solid element without a vanilla ingot counterpart, the
    /// derived ingot descriptor is inserted immediately after its parent
    /// element. The document is parsed and validated in full before the
    /// first insertion, so a malformed document leaves the index empty.
    pub fn load_elements(
        &mut self,
        source_name: &str,
        content: &str,
    ) -> Result<(), BootstrapError> {
        self.expect_state(LoadState::Unloaded, "load_elements")?;
        let records = loader::parse_elements(source_name, content)?;

        let mut ingots = 0usize;
        for record in records {
            let element = ElementDescriptor {
                name: record.name,
                atomic_number: record.atomic_number,
                abbreviation: record.abbreviation,
                matter_state: record.matter_state,
                color: record.color,
            };
            let derives_ingot = element.derives_ingot();
            let element_name = element.name.clone();
            let element_id = self.index.insert(Descriptor::Element(element))?;

            if derives_ingot {
                self.index.insert(Descriptor::Ingot(IngotDescriptor {
                    name: IngotDescriptor::key_for(&element_name),
                    element: element_id,
                }))?;
                ingots += 1;
            }
        }

        debug!(
            elements = self.index.len() - ingots,
            ingots, "element pass complete"
        );
        self.state = LoadState::ElementsLoaded;
        Ok(())
    }

    /// Loads and indexes all compounds from a `compounds.json` document.
    ///
    /// Component references resolve against already-indexed elements first,
    /// then already-indexed compounds; a reference that resolves to neither
    /// is dropped from the composition with a warning rather than failing
    /// the compound. Forward references therefore never resolve.
    pub fn load_compounds(
        &mut self,
        source_name: &str,
        content: &str,
    ) -> Result<(), BootstrapError> {
        self.expect_state(LoadState::ElementsLoaded, "load_compounds")?;
        let records = loader::parse_compounds(source_name, content)?;

        let count = records.len();
        for record in records {
            let mut components = Vec::with_capacity(record.components.len());
            for component in &record.components {
                let resolved = self
                    .index
                    .element_id_by_name(&component.name)
                    .or_else(|| self.index.compound_id_by_name(&component.name));
                match resolved {
                    Some(item) => components.push(Component {
                        item,
                        count: component.count,
                    }),
                    None => warn!(
                        compound = %record.name,
                        component = %component.name,
                        "dropping unresolvable compound component"
                    ),
                }
            }

            self.index.insert(Descriptor::Compound(CompoundDescriptor {
                name: record.name,
                matter_state: record.matter_state,
                color: record.color,
                components,
            }))?;
        }

        debug!(compounds = count, "compound pass complete");
        self.state = LoadState::CompoundsLoaded;
        Ok(())
    }

    /// Derives block-backed item wrappers and finalizes the pass.
    ///
    /// Consumes the driver: the returned registry is read-only for the rest
    /// of the process lifetime, and the deferred table carries one factory
    /// per indexed item, in insertion order.
    pub fn finalize(
        mut self,
        blocks: &[BlockRef],
    ) -> Result<(ChemicalRegistry, DeferredItems), BootstrapError> {
        self.expect_state(LoadState::CompoundsLoaded, "finalize")?;

        for block in blocks {
            self.index
                .insert(Descriptor::BlockItem(BlockItemDescriptor {
                    name: block.key.clone(),
                    block_key: block.key.clone(),
                }))?;
        }

        self.state = LoadState::Finalized;
        let deferred = DeferredItems::from_index(&self.index);
        info!(items = self.index.len(), "item registry finalized");
        Ok((ChemicalRegistry::new(self.index), deferred))
    }
}
