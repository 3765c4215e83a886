use super::ids::ItemId;
use super::matter::MatterState;

/// One resolved entry in a compound's composition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Reference to an element or compound inserted earlier in the load pass.
    pub item: ItemId,
    /// How many units of the referenced item the compound contains.
    pub count: u32,
}

/// Describes one chemical compound and its resolved composition.
///
/// Components are stored in declaration order and only ever reference
/// descriptors that were inserted strictly earlier, so the composition
/// graph over the data files forms a DAG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundDescriptor {
    /// Registry key, e.g. "water".
    pub name: String,
    pub matter_state: MatterState,
    pub color: String,
    pub components: Vec<Component>,
}
