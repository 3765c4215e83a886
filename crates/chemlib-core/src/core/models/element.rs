use super::matter::MatterState;
use crate::core::utils::identifiers::has_vanilla_ingot;

/// Describes one chemical element's identity and display data.
///
/// Both `name` and `atomic_number` are unique keys across all elements.
/// Descriptors are created once during the load pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// Registry key, e.g. "hydrogen".
    pub name: String,
    /// Unique positive atomic number, e.g. 1.
    pub atomic_number: u32,
    /// Display abbreviation, e.g. "H".
    pub abbreviation: String,
    /// Matter state at standard conditions.
    pub matter_state: MatterState,
    /// Display color as a hex string, e.g. "#FFFFFF".
    pub color: String,
}

impl ElementDescriptor {
    /// Whether the load pass should derive an ingot item for this element.
    ///
    /// Only solid elements get ingots, and metals the host engine already
    /// ships ingots for (copper, iron, gold) are excluded.
    pub fn derives_ingot(&self) -> bool {
        self.matter_state == MatterState::Solid && !has_vanilla_ingot(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, matter_state: MatterState) -> ElementDescriptor {
        ElementDescriptor {
            name: name.to_string(),
            atomic_number: 1,
            abbreviation: "X".to_string(),
            matter_state,
            color: "#FFFFFF".to_string(),
        }
    }

    #[test]
    fn solid_elements_derive_ingots() {
        assert!(element("carbon", MatterState::Solid).derives_ingot());
        assert!(element("silicon", MatterState::Solid).derives_ingot());
    }

    #[test]
    fn vanilla_metals_do_not_derive_ingots() {
        assert!(!element("copper", MatterState::Solid).derives_ingot());
        assert!(!element("iron", MatterState::Solid).derives_ingot());
        assert!(!element("gold", MatterState::Solid).derives_ingot());
    }

    #[test]
    fn non_solids_do_not_derive_ingots() {
        assert!(!element("hydrogen", MatterState::Gas).derives_ingot());
        assert!(!element("mercury", MatterState::Liquid).derives_ingot());
    }
}
