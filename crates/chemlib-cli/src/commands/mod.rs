pub mod lookup;
pub mod summary;
pub mod validate;

use crate::cli::DataArgs;
use crate::error::Result;
use chemlib::engine::deferred::DeferredItems;
use chemlib::engine::index::ChemicalRegistry;
use chemlib::workflows::load;

/// Runs the load pass over the selected data files, or the bundled set if
/// none were given. clap guarantees the paths come in pairs.
pub(crate) fn load_registry(data: &DataArgs) -> Result<(ChemicalRegistry, DeferredItems)> {
    let loaded = match (&data.elements, &data.compounds) {
        (Some(elements), Some(compounds)) => load::load_from_files(elements, compounds, &[])?,
        _ => load::load_bundled(&[])?,
    };
    Ok(loaded)
}
