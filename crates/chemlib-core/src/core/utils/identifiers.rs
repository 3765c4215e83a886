use phf::{Set, phf_set};

// Metals whose ingots ship with the host engine; the load pass must not
// derive its own ingot items for these.
static VANILLA_INGOT_METALS: Set<&'static str> = phf_set! {
    "copper", "iron", "gold",
};

pub fn has_vanilla_ingot(element_name: &str) -> bool {
    VANILLA_INGOT_METALS.contains(element_name)
}
