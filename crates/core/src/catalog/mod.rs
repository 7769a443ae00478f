//! Part catalogs: the static candidate lists the selector searches over.
//!
//! A catalog is injected into the selector rather than hard-coded, so tests can
//! run against small synthetic catalogs. `Catalog::demo()` carries the
//! demonstration data shipped with the CLI.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::model::{
    Case, Category, GraphicsCard, MemoryModule, Motherboard, PowerSupply, Processor,
    StorageDevice,
};

mod demo;

/// Validation failures for a catalog loaded from disk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A category the selector always needs has no entries.
    #[error("Catalog has no {0} entries")]
    EmptyCategory(&'static str),

    /// Two entries in the same category share an id.
    #[error("Duplicate {category} id '{id}'")]
    DuplicateId { category: &'static str, id: String },

    /// Prices must be strictly positive.
    #[error("{category} '{id}' has a zero price")]
    ZeroPrice { category: &'static str, id: String },

    /// Processor and graphics scores drive the value ordering and must be positive.
    #[error("{category} '{id}' has a zero score")]
    ZeroScore { category: &'static str, id: String },
}

/// One ordered list of parts per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub processors: Vec<Processor>,
    pub motherboards: Vec<Motherboard>,
    pub memory: Vec<MemoryModule>,
    pub storage: Vec<StorageDevice>,
    /// Discrete graphics cards. May be empty if every processor has integrated graphics.
    #[serde(default)]
    pub graphics: Vec<GraphicsCard>,
    pub power_supplies: Vec<PowerSupply>,
    pub cases: Vec<Case>,
}

impl Catalog {
    /// Demonstration catalog (prices in IDR).
    pub fn demo() -> Self {
        demo::demo_catalog()
    }

    /// Check structural sanity of the catalog.
    ///
    /// Compatibility gaps (e.g., a memory type no motherboard accepts) are not
    /// errors: the selector simply never reaches those branches.
    pub fn validate(&self) -> Result<(), CatalogError> {
        require_non_empty(Category::Processor, self.processors.len())?;
        require_non_empty(Category::Motherboard, self.motherboards.len())?;
        require_non_empty(Category::Memory, self.memory.len())?;
        require_non_empty(Category::Storage, self.storage.len())?;
        require_non_empty(Category::PowerSupply, self.power_supplies.len())?;
        require_non_empty(Category::Case, self.cases.len())?;

        check_entries(Category::Processor, self.processors.iter().map(|p| (&p.id, p.price)))?;
        check_entries(Category::Motherboard, self.motherboards.iter().map(|m| (&m.id, m.price)))?;
        check_entries(Category::Memory, self.memory.iter().map(|m| (&m.id, m.price)))?;
        check_entries(Category::Storage, self.storage.iter().map(|s| (&s.id, s.price)))?;
        check_entries(Category::Graphics, self.graphics.iter().map(|g| (&g.id, g.price)))?;
        check_entries(
            Category::PowerSupply,
            self.power_supplies.iter().map(|p| (&p.id, p.price)),
        )?;
        check_entries(Category::Case, self.cases.iter().map(|c| (&c.id, c.price)))?;

        if let Some(p) = self.processors.iter().find(|p| p.score == 0) {
            return Err(CatalogError::ZeroScore {
                category: Category::Processor.as_str(),
                id: p.id.clone(),
            });
        }
        if let Some(g) = self.graphics.iter().find(|g| g.score == 0) {
            return Err(CatalogError::ZeroScore {
                category: Category::Graphics.as_str(),
                id: g.id.clone(),
            });
        }

        Ok(())
    }

    /// Load a catalog from a `.json`, `.yaml`, or `.yml` file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog at {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let catalog: Catalog = match ext {
            "json" => serde_json::from_str(&body).context("Failed to parse catalog JSON")?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&body).context("Failed to parse catalog YAML")?
            }
            other => {
                return Err(anyhow!(
                    "Unsupported catalog format '{}' for {} (expected json, yaml, or yml)",
                    other,
                    path.display()
                ))
            }
        };
        catalog
            .validate()
            .with_context(|| format!("Invalid catalog at {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            processors = catalog.processors.len(),
            motherboards = catalog.motherboards.len(),
            graphics = catalog.graphics.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Write the catalog as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize catalog")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write catalog to {}", path.display()))
    }

    /// SHA-256 of the canonical JSON encoding, as a hex string.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self).context("Failed to serialize catalog")?;
        let digest = Sha256::digest(&bytes);
        Ok(format!("{:x}", digest))
    }

    /// Total number of parts across all categories.
    pub fn len(&self) -> usize {
        self.processors.len()
            + self.motherboards.len()
            + self.memory.len()
            + self.storage.len()
            + self.graphics.len()
            + self.power_supplies.len()
            + self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn require_non_empty(category: Category, len: usize) -> Result<(), CatalogError> {
    if len == 0 {
        return Err(CatalogError::EmptyCategory(category.as_str()));
    }
    Ok(())
}

fn check_entries<'a>(
    category: Category,
    entries: impl Iterator<Item = (&'a String, u64)>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (id, price) in entries {
        if !seen.insert(id.as_str()) {
            return Err(CatalogError::DuplicateId { category: category.as_str(), id: id.clone() });
        }
        if price == 0 {
            return Err(CatalogError::ZeroPrice { category: category.as_str(), id: id.clone() });
        }
    }
    Ok(())
}
