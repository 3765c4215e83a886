/// Describes an item wrapper around a block the host has already registered.
///
/// Bridges the item load pass to the host's separate block-registration pass;
/// the block itself stays entirely on the host side of the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockItemDescriptor {
    /// Registry key, identical to the wrapped block's key.
    pub name: String,
    /// The host-side key of the wrapped block.
    pub block_key: String,
}
