//! Core data model: catalog part records and the categories they belong to.
//!
//! Every record is an immutable value read from a catalog. Prices are whole
//! currency units, scores are unitless performance estimates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part category, in the order line items are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Processor,
    Motherboard,
    Memory,
    Storage,
    Graphics,
    PowerSupply,
    Case,
}

impl Category {
    /// Short display label used by the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            Category::Processor => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Memory => "RAM",
            Category::Storage => "Storage",
            Category::Graphics => "GPU",
            Category::PowerSupply => "PSU",
            Category::Case => "Case",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Processor => "processor",
            Category::Motherboard => "motherboard",
            Category::Memory => "memory",
            Category::Storage => "storage",
            Category::Graphics => "graphics",
            Category::PowerSupply => "power_supply",
            Category::Case => "case",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A processor (CPU).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    pub id: String,
    pub name: String,
    /// Socket tag; must equal the motherboard's socket.
    pub socket: String,
    /// Thermal design power in watts.
    pub tdp: u32,
    pub score: u32,
    pub price: u64,
    /// Whether the processor can drive a display without a discrete card.
    #[serde(default)]
    pub integrated_graphics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motherboard {
    pub id: String,
    pub name: String,
    pub socket: String,
    /// Memory technology the board accepts (e.g., "DDR4").
    pub memory_type: String,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryModule {
    pub id: String,
    pub name: String,
    pub capacity_gb: u32,
    pub memory_type: String,
    pub price: u64,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDevice {
    pub id: String,
    pub name: String,
    /// Interface tag (e.g., "SATA", "NVMe"). Informational only.
    pub interface: String,
    pub capacity_gb: u32,
    pub price: u64,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicsCard {
    pub id: String,
    pub name: String,
    pub tdp: u32,
    pub score: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSupply {
    pub id: String,
    pub name: String,
    pub wattage: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub name: String,
    pub price: u64,
}

/// Graphics assignment of a build.
///
/// `IntegratedOnly` is only valid when the processor has integrated graphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "card", rename_all = "snake_case")]
pub enum GraphicsChoice<G = GraphicsCard> {
    IntegratedOnly,
    Discrete(G),
}

impl<G> GraphicsChoice<G> {
    pub fn card(&self) -> Option<&G> {
        match self {
            GraphicsChoice::IntegratedOnly => None,
            GraphicsChoice::Discrete(card) => Some(card),
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, GraphicsChoice::Discrete(_))
    }
}
