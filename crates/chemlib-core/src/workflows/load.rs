use crate::core::data::loader::DataError;
use crate::engine::deferred::{BlockRef, DeferredItems};
use crate::engine::driver::RegistrationDriver;
use crate::engine::error::BootstrapError;
use crate::engine::index::ChemicalRegistry;
use std::path::Path;
use tracing::{info, instrument};

// Data set bundled into the crate, mirroring the data files the mod ships.
const BUNDLED_ELEMENTS: &str = include_str!("../../data/elements.json");
const BUNDLED_COMPOUNDS: &str = include_str!("../../data/compounds.json");

/// Runs the full load pass over two data files on disk.
///
/// Elements load before compounds; `blocks` are the keys of blocks the host
/// registered in its own pass and become block-backed item wrappers at
/// finalization. Any failure aborts the pass with nothing retried.
#[instrument(skip_all, name = "registry_load")]
pub fn load_from_files(
    elements_path: &Path,
    compounds_path: &Path,
    blocks: &[BlockRef],
) -> Result<(ChemicalRegistry, DeferredItems), BootstrapError> {
    info!(
        elements = %elements_path.display(),
        compounds = %compounds_path.display(),
        "loading chemical registry from files"
    );
    let elements = read_to_string(elements_path)?;
    let compounds = read_to_string(compounds_path)?;

    run_pass(
        &elements_path.to_string_lossy(),
        &elements,
        &compounds_path.to_string_lossy(),
        &compounds,
        blocks,
    )
}

/// Runs the full load pass over the data set bundled into this crate.
#[instrument(skip_all, name = "registry_load_bundled")]
pub fn load_bundled(
    blocks: &[BlockRef],
) -> Result<(ChemicalRegistry, DeferredItems), BootstrapError> {
    info!("loading chemical registry from bundled data");
    run_pass(
        "data/elements.json",
        BUNDLED_ELEMENTS,
        "data/compounds.json",
        BUNDLED_COMPOUNDS,
        blocks,
    )
}

fn run_pass(
    elements_name: &str,
    elements: &str,
    compounds_name: &str,
    compounds: &str,
    blocks: &[BlockRef],
) -> Result<(ChemicalRegistry, DeferredItems), BootstrapError> {
    let mut driver = RegistrationDriver::new();
    driver.load_elements(elements_name, elements)?;
    driver.load_compounds(compounds_name, compounds)?;
    driver.finalize(blocks)
}

fn read_to_string(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|e| DataError::Resource {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ItemKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bundled_data_loads_and_resolves() {
        let (registry, deferred) = load_bundled(&[]).unwrap();

        let hydrogen = registry.element_by_name("hydrogen").unwrap();
        assert_eq!(hydrogen.atomic_number, 1);
        assert_eq!(registry.element_by_atomic_number(1).unwrap(), hydrogen);
        assert!(registry.ingot_by_name("hydrogen_ingot").is_none());
        assert!(registry.ingot_by_name("silicon_ingot").is_some());
        assert!(registry.ingot_by_name("iron_ingot").is_none());

        // Every bundled compound component resolves; nothing is dropped.
        for (_, descriptor) in registry.iter() {
            if let Some(compound) = descriptor.as_compound() {
                assert!(!compound.components.is_empty(), "{}", compound.name);
            }
        }

        // The hydrate references an earlier compound, not an element.
        let hydrate = registry
            .compound_by_name("copper_sulfate_pentahydrate")
            .unwrap();
        assert_eq!(hydrate.components.len(), 2);
        assert_eq!(
            registry.get(hydrate.components[0].item).unwrap().name(),
            "copper_sulfate"
        );
        assert_eq!(hydrate.components[1].count, 5);

        assert_eq!(deferred.len(), registry.len());
    }

    #[test]
    fn bundled_counts_are_consistent() {
        let (registry, _) = load_bundled(&[]).unwrap();
        let elements = registry.count_of(ItemKind::Element);
        let ingots = registry.count_of(ItemKind::Ingot);
        let compounds = registry.count_of(ItemKind::Compound);

        assert_eq!(elements, 28);
        assert_eq!(compounds, 12);
        // Solid elements minus the vanilla metals (copper, iron, gold).
        assert_eq!(ingots, 16);
        assert_eq!(registry.len(), elements + ingots + compounds);
    }

    #[test]
    fn files_pass_matches_bundled_pass() {
        let dir = tempdir().unwrap();
        let elements_path = dir.path().join("elements.json");
        let compounds_path = dir.path().join("compounds.json");
        fs::write(&elements_path, BUNDLED_ELEMENTS).unwrap();
        fs::write(&compounds_path, BUNDLED_COMPOUNDS).unwrap();

        let (from_files, _) = load_from_files(&elements_path, &compounds_path, &[]).unwrap();
        let (bundled, _) = load_bundled(&[]).unwrap();

        let names = |registry: &ChemicalRegistry| {
            registry
                .iter()
                .map(|(_, d)| d.name().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&from_files), names(&bundled));
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let dir = tempdir().unwrap();
        let result = load_from_files(
            &dir.path().join("missing.json"),
            &dir.path().join("compounds.json"),
            &[],
        );
        assert!(matches!(
            result,
            Err(BootstrapError::Data {
                source: DataError::Resource { .. }
            })
        ));
    }

    #[test]
    fn block_refs_become_block_items() {
        let (registry, deferred) = load_bundled(&[BlockRef::new("chemical_lamp")]).unwrap();
        assert_eq!(registry.count_of(ItemKind::BlockItem), 1);
        assert_eq!(deferred.keys().last(), Some("chemical_lamp"));
    }
}
