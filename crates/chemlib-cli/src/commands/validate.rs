use crate::cli::ValidateArgs;
use crate::error::Result;
use chemlib::core::models::ItemKind;
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    let (registry, deferred) = super::load_registry(&args.data)?;

    let elements = registry.count_of(ItemKind::Element);
    let ingots = registry.count_of(ItemKind::Ingot);
    let compounds = registry.count_of(ItemKind::Compound);
    info!(elements, ingots, compounds, "validation pass complete");

    println!(
        "✅ Data is valid: {} registrable items ({} elements, {} ingots, {} compounds).",
        deferred.len(),
        elements,
        ingots,
        compounds
    );
    Ok(())
}
