use crate::cli::SummaryArgs;
use crate::error::Result;
use chemlib::core::models::ItemKind;
use chemlib::core::models::matter::MatterState;

pub fn run(args: SummaryArgs) -> Result<()> {
    let (registry, _) = super::load_registry(&args.data)?;

    println!("Registry summary ({} items)", registry.len());
    for kind in [
        ItemKind::Element,
        ItemKind::Ingot,
        ItemKind::Compound,
        ItemKind::BlockItem,
    ] {
        let count = registry.count_of(kind);
        if count > 0 {
            println!("  {:<11} {}", format!("{kind}s:"), count);
        }
    }

    for state in [MatterState::Solid, MatterState::Liquid, MatterState::Gas] {
        let elements = registry
            .iter()
            .filter_map(|(_, d)| d.as_element())
            .filter(|e| e.matter_state == state)
            .count();
        let compounds = registry
            .iter()
            .filter_map(|(_, d)| d.as_compound())
            .filter(|c| c.matter_state == state)
            .count();
        println!("  {state}: {elements} elements, {compounds} compounds");
    }

    Ok(())
}
