//! Advisor configuration and on-disk layout.
//!
//! The config lives at `rig-advisor.json` in an advisor root and records where
//! the catalog is, the budget range frontends should accept, and how prices are
//! displayed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// File name of the advisor config inside a root.
pub const CONFIG_FILE_NAME: &str = "rig-advisor.json";

/// Default catalog file name written by `init`.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Budget range accepted by frontends. The selector itself accepts any budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLimits {
    pub min: u64,
    pub max: u64,
    /// Granularity for budget sweeps and sliders.
    pub step: u64,
    pub default: u64,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self { min: 500_000, max: 30_000_000, step: 100_000, default: 3_000_000 }
    }
}

impl BudgetLimits {
    /// Clamp a requested budget into `[min, max]`.
    pub fn clamp(&self, budget: u64) -> u64 {
        budget.clamp(self.min, self.max.max(self.min))
    }
}

/// How prices are rendered by frontends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDisplay {
    pub symbol: String,
    pub thousands_separator: String,
}

impl Default for CurrencyDisplay {
    fn default() -> Self {
        Self { symbol: "Rp".to_string(), thousands_separator: ".".to_string() }
    }
}

impl CurrencyDisplay {
    /// Format a whole amount, e.g. `Rp 3.000.000` or `-Rp 150.000`.
    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }
        let sign = if amount < 0 { "-" } else { "" };
        format!("{sign}{} {grouped}", self.symbol)
    }

    pub fn format_price(&self, price: u64) -> String {
        self.format(i64::try_from(price).unwrap_or(i64::MAX))
    }
}

/// Serializable advisor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Human-friendly name for this advisor setup.
    pub name: String,
    /// Config format version.
    pub config_version: String,
    /// Catalog path, relative to the root unless absolute. `None` uses the demo catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default)]
    pub budget: BudgetLimits,
    #[serde(default)]
    pub currency: CurrencyDisplay,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::new("rig-advisor")
    }
}

impl AdvisorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_version: "0.1.0".to_string(),
            catalog: None,
            budget: BudgetLimits::default(),
            currency: CurrencyDisplay::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: Option<String>) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Paths derived from an advisor root. Does not touch the filesystem.
#[derive(Debug, Clone)]
pub struct AdvisorLayout {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub default_catalog_path: PathBuf,
}

impl AdvisorLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE_NAME);
        let default_catalog_path = root.join(CATALOG_FILE_NAME);
        Self { root, config_path, default_catalog_path }
    }

    /// Resolve a config-relative path against the root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Read and parse the config at `layout.config_path`.
pub fn load_config(layout: &AdvisorLayout) -> Result<AdvisorConfig> {
    let body = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read advisor config at {}", layout.config_path.display())
    })?;
    let config: AdvisorConfig =
        serde_json::from_str(&body).context("Failed to parse advisor config JSON")?;
    Ok(config)
}

/// Load the config if present, otherwise fall back to defaults.
pub fn load_config_or_default(layout: &AdvisorLayout) -> Result<AdvisorConfig> {
    if layout.config_path.exists() {
        load_config(layout)
    } else {
        tracing::debug!(path = %layout.config_path.display(), "no advisor config; using defaults");
        Ok(AdvisorConfig::default())
    }
}

pub fn save_config(layout: &AdvisorLayout, config: &AdvisorConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write advisor config: {}", layout.config_path.display())
    })
}

/// Resolve which catalog to use: an explicit path, then the config entry, then the demo.
pub fn resolve_catalog(
    layout: &AdvisorLayout,
    config: &AdvisorConfig,
    explicit: Option<&str>,
) -> Result<Catalog> {
    match explicit.or(config.catalog.as_deref()) {
        Some(path) => {
            let path = layout.resolve(path);
            Catalog::from_path(&path)
        }
        None => Ok(Catalog::demo()),
    }
}
