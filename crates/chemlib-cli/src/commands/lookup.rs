use crate::cli::LookupArgs;
use crate::error::{CliError, Result};

pub fn run(args: LookupArgs) -> Result<()> {
    let (registry, _) = super::load_registry(&args.data)?;

    // A numeric query is an atomic-number lookup; anything else is a name.
    if let Ok(atomic_number) = args.query.parse::<u32>() {
        let element = registry
            .element_by_atomic_number(atomic_number)
            .ok_or_else(|| CliError::NotFound(args.query.clone()))?;
        print_element(element);
        return Ok(());
    }

    if let Some(element) = registry.element_by_name(&args.query) {
        print_element(element);
    } else if let Some(compound) = registry.compound_by_name(&args.query) {
        println!("{} — {} compound", compound.name, compound.matter_state);
        println!("  color: {}", compound.color);
        println!("  composition:");
        for component in &compound.components {
            if let Some(item) = registry.get(component.item) {
                println!("    {} x{}", item.name(), component.count);
            }
        }
    } else if let Some(ingot) = registry.ingot_by_name(&args.query) {
        println!("{} — ingot", ingot.name);
        if let Some(parent) = registry.get(ingot.element) {
            println!("  derived from: {}", parent.name());
        }
    } else {
        return Err(CliError::NotFound(args.query));
    }

    Ok(())
}

fn print_element(element: &chemlib::core::models::element::ElementDescriptor) {
    println!(
        "{} ({}) — {} element",
        element.name, element.abbreviation, element.matter_state
    );
    println!("  atomic number: {}", element.atomic_number);
    println!("  color: {}", element.color);
}
