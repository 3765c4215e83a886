use super::index::RegistryIndex;
use crate::core::models::Descriptor;

const DEFAULT_MAX_STACK_SIZE: u32 = 64;

/// Handle to a block the host engine registered in its own block pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRef {
    pub key: String,
}

impl BlockRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// The capability set the host engine needs from one item.
///
/// A plain record at the boundary: identity, render hints, and stack
/// behavior. Nothing here references the host's object model, and nothing in
/// the core references whatever the host builds out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    /// Registry key the item is filed under.
    pub key: String,
    /// Human-readable name derived from the key.
    pub display_name: String,
    /// Abbreviation to render on the item, where configured.
    pub abbreviation: Option<String>,
    /// Display color as a hex string, if the item has one.
    pub color: Option<String>,
    pub max_stack_size: u32,
}

/// Zero-argument constructor the host invokes during its registration phase.
pub type ItemFactory = Box<dyn Fn() -> ItemSpec + Send + Sync>;

/// Collaborator boundary: the host engine's deferred item registry.
pub trait ItemSink {
    fn register(&mut self, key: &str, factory: ItemFactory);
}

/// Ordered table of (key, factory) pairs built from fully resolved
/// descriptors, handed to the host at the end of the load pass.
///
/// Factories are pure closures over an eagerly built [`ItemSpec`]: invoking
/// one any number of times yields equal specs, whenever the host gets around
/// to it.
#[derive(Default)]
pub struct DeferredItems {
    entries: Vec<(String, ItemFactory)>,
}

impl std::fmt::Debug for DeferredItems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredItems")
            .field(
                "entries",
                &self.entries.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl DeferredItems {
    pub(crate) fn from_index(index: &RegistryIndex) -> Self {
        let entries = index
            .iter()
            .map(|(_, descriptor)| {
                let spec = spec_for(descriptor, index);
                let key = spec.key.clone();
                let factory: ItemFactory = Box::new(move || spec.clone());
                (key, factory)
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registration keys in the order the host will receive them.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Forwards every entry to the host's deferred registry, in order.
    pub fn register_to(self, sink: &mut dyn ItemSink) {
        for (key, factory) in self.entries {
            sink.register(&key, factory);
        }
    }
}

fn spec_for(descriptor: &Descriptor, index: &RegistryIndex) -> ItemSpec {
    match descriptor {
        Descriptor::Element(element) => ItemSpec {
            key: element.name.clone(),
            display_name: display_name(&element.name),
            abbreviation: Some(element.abbreviation.clone()),
            color: Some(element.color.clone()),
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
        },
        Descriptor::Compound(compound) => ItemSpec {
            key: compound.name.clone(),
            display_name: display_name(&compound.name),
            abbreviation: None,
            color: Some(compound.color.clone()),
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
        },
        Descriptor::Ingot(ingot) => {
            // The parent element always exists: ingots are only ever
            // synthesized right after their element was inserted.
            let parent = index.get(ingot.element).and_then(Descriptor::as_element);
            ItemSpec {
                key: ingot.name.clone(),
                display_name: display_name(&ingot.name),
                abbreviation: parent.map(|e| e.abbreviation.clone()),
                color: parent.map(|e| e.color.clone()),
                max_stack_size: DEFAULT_MAX_STACK_SIZE,
            }
        }
        Descriptor::BlockItem(block_item) => ItemSpec {
            key: block_item.name.clone(),
            display_name: display_name(&block_item.name),
            abbreviation: None,
            color: None,
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
        },
    }
}

fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::ElementDescriptor;
    use crate::core::models::ingot::IngotDescriptor;
    use crate::core::models::matter::MatterState;

    #[derive(Default)]
    struct CollectingSink {
        registered: Vec<(String, ItemSpec)>,
    }

    impl ItemSink for CollectingSink {
        fn register(&mut self, key: &str, factory: ItemFactory) {
            self.registered.push((key.to_string(), factory()));
        }
    }

    fn index_with_carbon() -> RegistryIndex {
        let mut index = RegistryIndex::new();
        let carbon = index
            .insert(Descriptor::Element(ElementDescriptor {
                name: "carbon".to_string(),
                atomic_number: 6,
                abbreviation: "C".to_string(),
                matter_state: MatterState::Solid,
                color: "#2C2C2C".to_string(),
            }))
            .unwrap();
        index
            .insert(Descriptor::Ingot(IngotDescriptor {
                name: "carbon_ingot".to_string(),
                element: carbon,
            }))
            .unwrap();
        index
    }

    #[test]
    fn sink_receives_entries_in_insertion_order() {
        let mut sink = CollectingSink::default();
        DeferredItems::from_index(&index_with_carbon()).register_to(&mut sink);

        let keys: Vec<_> = sink.registered.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["carbon", "carbon_ingot"]);
    }

    #[test]
    fn ingot_spec_inherits_element_render_hints() {
        let mut sink = CollectingSink::default();
        DeferredItems::from_index(&index_with_carbon()).register_to(&mut sink);

        let (_, ingot_spec) = &sink.registered[1];
        assert_eq!(ingot_spec.display_name, "Carbon Ingot");
        assert_eq!(ingot_spec.abbreviation.as_deref(), Some("C"));
        assert_eq!(ingot_spec.color.as_deref(), Some("#2C2C2C"));
    }

    #[test]
    fn factories_are_pure() {
        let items = DeferredItems::from_index(&index_with_carbon());
        struct TwiceSink(Vec<ItemFactory>);
        impl ItemSink for TwiceSink {
            fn register(&mut self, _key: &str, factory: ItemFactory) {
                self.0.push(factory);
            }
        }

        let mut sink = TwiceSink(Vec::new());
        items.register_to(&mut sink);
        for factory in &sink.0 {
            assert_eq!(factory(), factory());
        }
    }

    #[test]
    fn display_name_title_cases_keys() {
        assert_eq!(display_name("hydrogen"), "Hydrogen");
        assert_eq!(display_name("sodium_chloride"), "Sodium Chloride");
    }
}
