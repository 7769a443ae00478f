use std::fs;

use anyhow::{Context, Result};
use rig_advisor_core::config::{self, AdvisorConfig, AdvisorLayout, CATALOG_FILE_NAME};
use rig_advisor_core::Catalog;

use crate::{canonicalize_or_current, infer_advisor_name};

/// Initialize an advisor root: write the config and a starter catalog.
///
/// An existing catalog file is left untouched so local edits survive re-init.
pub fn init_command(root: &str, name: Option<String>) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = AdvisorLayout::new(&root_path);

    let advisor_name = match name {
        Some(n) => n,
        None => infer_advisor_name(&root_path),
    };

    fs::create_dir_all(&layout.root)
        .with_context(|| format!("Failed to create root dir: {}", layout.root.display()))?;

    let config =
        AdvisorConfig::new(&advisor_name).with_catalog(Some(CATALOG_FILE_NAME.to_string()));
    config::save_config(&layout, &config)?;

    let catalog_written = if layout.default_catalog_path.exists() {
        false
    } else {
        Catalog::demo().write_json(&layout.default_catalog_path)?;
        true
    };

    println!("Initialized rig advisor:");
    println!("  Name: {}", advisor_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!(
        "  Catalog: {}{}",
        layout.default_catalog_path.display(),
        if catalog_written { "" } else { " (kept existing)" }
    );
    println!(
        "  Budget range: {} - {}",
        config.currency.format_price(config.budget.min),
        config.currency.format_price(config.budget.max)
    );

    Ok(())
}
