use super::ids::ItemId;

/// Describes a metal ingot derived 1:1 from a solid element.
///
/// Synthesized during element loading, immediately after its parent element,
/// for every solid element without a vanilla ingot counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngotDescriptor {
    /// Registry key, always `{element}_ingot`.
    pub name: String,
    /// The parent element this ingot was derived from.
    pub element: ItemId,
}

impl IngotDescriptor {
    /// The registry key an ingot derived from `element_name` would use.
    pub fn key_for(element_name: &str) -> String {
        format!("{element_name}_ingot")
    }
}
