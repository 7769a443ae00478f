use anyhow::Result;
use rig_advisor_core::config::{self, AdvisorConfig, AdvisorLayout};
use rig_advisor_core::Catalog;

use crate::canonicalize_or_current;

/// Everything a command needs from an advisor root.
#[derive(Debug)]
pub struct AdvisorContext {
    pub layout: AdvisorLayout,
    pub config: AdvisorConfig,
    pub catalog: Catalog,
}

/// Resolve the root, load config (or defaults), and resolve the catalog.
///
/// `catalog` overrides the config's catalog entry; relative paths are resolved
/// against the root.
pub fn load_context(root: &str, catalog: Option<&str>) -> Result<AdvisorContext> {
    let root_path = canonicalize_or_current(root)?;
    let layout = AdvisorLayout::new(&root_path);
    let config = config::load_config_or_default(&layout)?;
    let catalog = config::resolve_catalog(&layout, &config, catalog)?;
    Ok(AdvisorContext { layout, config, catalog })
}
