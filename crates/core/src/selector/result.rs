use serde::{Deserialize, Serialize};

use crate::model::{
    Case, Category, GraphicsCard, GraphicsChoice, MemoryModule, Motherboard, PowerSupply,
    Processor, StorageDevice,
};

/// Outcome of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
    /// No valid build fits the budget.
    Infeasible,
    Recommendation(Recommendation),
}

impl Selection {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Selection::Infeasible => None,
            Selection::Recommendation(rec) => Some(rec),
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Selection::Infeasible)
    }

    /// Performance of the recommended build, or zero when infeasible.
    pub fn performance(&self) -> u32 {
        self.recommendation().map_or(0, |rec| rec.performance)
    }
}

/// Whether the build total is within the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Within,
    Over,
}

impl BudgetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetStatus::Within => "within",
            BudgetStatus::Over => "over",
        }
    }
}

/// One presented row of a recommended build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub category: Category,
    pub id: String,
    pub name: String,
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    MemoryUpgrade,
    StorageUpgrade,
    AddGraphics,
    GraphicsUpgrade,
}

/// Advisory suggestion for spending leftover budget. Never applied to the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeTip {
    pub kind: TipKind,
    /// Id of the suggested part.
    pub part_id: String,
    pub message: String,
    /// Extra spend implied by following the tip.
    pub price_delta: i64,
}

/// A recommended build plus everything a presentation layer needs to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub budget: u64,
    pub build: Vec<LineItem>,
    pub total_price: u64,
    pub performance: u32,
    pub status: BudgetStatus,
    /// `budget - total_price`; negative when over budget.
    pub remaining: i64,
    pub tips: Vec<UpgradeTip>,
    pub parts: CandidateBuild,
}

/// A fully assigned build: one part per required category plus the graphics choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateBuild {
    pub processor: Processor,
    pub motherboard: Motherboard,
    pub memory: MemoryModule,
    pub storage: StorageDevice,
    pub graphics: GraphicsChoice,
    pub power_supply: PowerSupply,
    pub case: Case,
}

impl CandidateBuild {
    /// Sum of part prices, saturating at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        [
            self.processor.price,
            self.motherboard.price,
            self.memory.price,
            self.storage.price,
            self.graphics.card().map_or(0, |g| g.price),
            self.power_supply.price,
            self.case.price,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }

    /// Sum of processor, graphics, memory, and storage scores, saturating at `u32::MAX`.
    pub fn performance(&self) -> u32 {
        [
            self.processor.score,
            self.graphics.card().map_or(0, |g| g.score),
            self.memory.score,
            self.storage.score,
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }

    pub fn graphics_card(&self) -> Option<&GraphicsCard> {
        self.graphics.card()
    }

    /// Presentation rows; the graphics row only appears for a discrete card.
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut items = vec![
            item(
                Category::Processor,
                &self.processor.id,
                &self.processor.name,
                self.processor.price,
            ),
            item(
                Category::Motherboard,
                &self.motherboard.id,
                &self.motherboard.name,
                self.motherboard.price,
            ),
            item(Category::Memory, &self.memory.id, &self.memory.name, self.memory.price),
            item(Category::Storage, &self.storage.id, &self.storage.name, self.storage.price),
        ];
        if let Some(card) = self.graphics.card() {
            items.push(item(Category::Graphics, &card.id, &card.name, card.price));
        }
        items.push(item(
            Category::PowerSupply,
            &self.power_supply.id,
            &self.power_supply.name,
            self.power_supply.price,
        ));
        items.push(item(Category::Case, &self.case.id, &self.case.name, self.case.price));
        items
    }
}

fn item(category: Category, id: &str, name: &str, price: u64) -> LineItem {
    LineItem { category, id: id.to_string(), name: name.to_string(), price }
}
