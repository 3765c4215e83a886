use crate::core::models::matter::MatterState;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ElementsDocument {
    pub elements: Vec<ElementRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ElementRecord {
    pub name: String,
    pub atomic_number: u32,
    pub abbreviation: String,
    pub matter_state: MatterState,
    pub color: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompoundsDocument {
    pub compounds: Vec<CompoundRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompoundRecord {
    pub name: String,
    pub matter_state: MatterState,
    pub color: String,
    pub components: Vec<ComponentRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ComponentRecord {
    /// Name of a previously declared element or compound.
    pub name: String,
    #[serde(default = "default_component_count")]
    pub count: u32,
}

fn default_component_count() -> u32 {
    1
}
