use anyhow::Result;
use rig_advisor_core::model::Category;

use crate::commands::load_context;

/// List every part in the resolved catalog.
pub fn list_catalog_command(root: &str, catalog: Option<&str>, json: bool) -> Result<()> {
    let ctx = load_context(root, catalog)?;
    let catalog = &ctx.catalog;

    if json {
        let serialized = serde_json::to_string_pretty(catalog)?;
        println!("{}", serialized);
        return Ok(());
    }

    let money = &ctx.config.currency;
    println!("Catalog ({} parts):", catalog.len());

    print_header(Category::Processor, catalog.processors.len());
    for p in &catalog.processors {
        let igpu = if p.integrated_graphics { ", iGPU" } else { "" };
        println!(
            "  - {} [{}] socket={} tdp={}W score={}{} {}",
            p.name,
            p.id,
            p.socket,
            p.tdp,
            p.score,
            igpu,
            money.format_price(p.price)
        );
    }
    print_header(Category::Motherboard, catalog.motherboards.len());
    for m in &catalog.motherboards {
        println!(
            "  - {} [{}] socket={} memory={} {}",
            m.name,
            m.id,
            m.socket,
            m.memory_type,
            money.format_price(m.price)
        );
    }
    print_header(Category::Memory, catalog.memory.len());
    for m in &catalog.memory {
        println!(
            "  - {} [{}] {}GB {} score={} {}",
            m.name,
            m.id,
            m.capacity_gb,
            m.memory_type,
            m.score,
            money.format_price(m.price)
        );
    }
    print_header(Category::Storage, catalog.storage.len());
    for s in &catalog.storage {
        println!(
            "  - {} [{}] {}GB {} score={} {}",
            s.name,
            s.id,
            s.capacity_gb,
            s.interface,
            s.score,
            money.format_price(s.price)
        );
    }
    print_header(Category::Graphics, catalog.graphics.len());
    for g in &catalog.graphics {
        println!(
            "  - {} [{}] tdp={}W score={} {}",
            g.name,
            g.id,
            g.tdp,
            g.score,
            money.format_price(g.price)
        );
    }
    print_header(Category::PowerSupply, catalog.power_supplies.len());
    for p in &catalog.power_supplies {
        println!("  - {} [{}] {}W {}", p.name, p.id, p.wattage, money.format_price(p.price));
    }
    print_header(Category::Case, catalog.cases.len());
    for c in &catalog.cases {
        println!("  - {} [{}] {}", c.name, c.id, money.format_price(c.price));
    }

    Ok(())
}

/// Validate the resolved catalog and print its fingerprint.
pub fn check_catalog_command(root: &str, catalog: Option<&str>) -> Result<()> {
    let ctx = load_context(root, catalog)?;
    // Catalogs from disk are validated on load; the demo catalog is checked here too.
    ctx.catalog.validate()?;
    let fingerprint = ctx.catalog.fingerprint()?;
    let cheapest = rig_advisor_core::BuildSelector::new(&ctx.catalog).cheapest_valid_price();

    println!("Catalog OK:");
    println!("  Parts: {}", ctx.catalog.len());
    println!("  Fingerprint (sha256): {}", fingerprint);
    match cheapest {
        Some(price) => {
            println!("  Cheapest viable build: {}", ctx.config.currency.format_price(price))
        }
        None => println!("  Cheapest viable build: (none; no compatible combination)"),
    }

    Ok(())
}

fn print_header(category: Category, count: usize) {
    println!("{} ({}):", category.label(), count);
}
