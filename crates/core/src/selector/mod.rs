//! Build selection: find the highest-performance compatible build within a budget.
//!
//! The catalog is small, so the search enumerates every compatible combination
//! (processor, motherboard, memory, storage, graphics) and prunes incompatible
//! branches as it goes. Each combination is paired with the cheapest power supply
//! that can feed it and the cheapest case. Affordable combinations are folded
//! into a single best candidate with a strict rank comparison, so the result is
//! deterministic for a given catalog and budget.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::model::{
    Case, GraphicsCard, GraphicsChoice, MemoryModule, Motherboard, PowerSupply, Processor,
    StorageDevice,
};

pub mod compat;
mod result;
mod tips;

pub use compat::{check_build, required_wattage, Violation};
pub use result::{
    BudgetStatus, CandidateBuild, LineItem, Recommendation, Selection, TipKind, UpgradeTip,
};

/// Ranking key for candidate builds.
///
/// Higher performance wins; on equal performance the lower total price wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub performance: u32,
    pub total_price: u64,
}

impl Rank {
    /// Strictly better than `incumbent`. Equal ranks never displace the incumbent.
    pub fn outranks(&self, incumbent: &Rank) -> bool {
        match self.performance.cmp(&incumbent.performance) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.total_price < incumbent.total_price,
        }
    }
}

/// Select the best build for `budget` from `catalog`.
pub fn select(budget: u64, catalog: &Catalog) -> Selection {
    BuildSelector::new(catalog).select(budget)
}

/// Catalog views in search order, computed once per catalog.
#[derive(Debug, Clone)]
pub struct BuildSelector<'a> {
    /// Descending score/price.
    processors: Vec<&'a Processor>,
    /// Ascending price.
    motherboards: Vec<&'a Motherboard>,
    /// Ascending price.
    memory_by_price: Vec<&'a MemoryModule>,
    /// Largest capacity first, cheaper first within a capacity.
    memory_by_capacity: Vec<&'a MemoryModule>,
    storage_by_price: Vec<&'a StorageDevice>,
    storage_by_capacity: Vec<&'a StorageDevice>,
    /// Descending score/price.
    graphics_by_value: Vec<&'a GraphicsCard>,
    graphics_by_price: Vec<&'a GraphicsCard>,
    power_supplies: Vec<&'a PowerSupply>,
    cases: Vec<&'a Case>,
}

/// Borrowed candidate used while searching; converted to [`CandidateBuild`] once chosen.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    processor: &'a Processor,
    motherboard: &'a Motherboard,
    memory: &'a MemoryModule,
    storage: &'a StorageDevice,
    graphics: GraphicsChoice<&'a GraphicsCard>,
    power_supply: &'a PowerSupply,
    case: &'a Case,
}

impl Candidate<'_> {
    fn card(&self) -> Option<&GraphicsCard> {
        self.graphics.card().copied()
    }

    /// `None` when the part prices overflow `u64`.
    fn total_price(&self) -> Option<u64> {
        [
            self.processor.price,
            self.motherboard.price,
            self.memory.price,
            self.storage.price,
            self.card().map_or(0, |g| g.price),
            self.power_supply.price,
            self.case.price,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
    }

    /// `None` when the scores overflow `u32`.
    fn performance(&self) -> Option<u32> {
        [
            self.processor.score,
            self.card().map_or(0, |g| g.score),
            self.memory.score,
            self.storage.score,
        ]
        .into_iter()
        .try_fold(0u32, u32::checked_add)
    }

    /// Combinations whose totals cannot be represented have no rank.
    fn rank(&self) -> Option<Rank> {
        Some(Rank { performance: self.performance()?, total_price: self.total_price()? })
    }

    fn to_owned_build(&self) -> CandidateBuild {
        CandidateBuild {
            processor: self.processor.clone(),
            motherboard: self.motherboard.clone(),
            memory: self.memory.clone(),
            storage: self.storage.clone(),
            graphics: match self.graphics {
                GraphicsChoice::IntegratedOnly => GraphicsChoice::IntegratedOnly,
                GraphicsChoice::Discrete(card) => GraphicsChoice::Discrete(card.clone()),
            },
            power_supply: self.power_supply.clone(),
            case: self.case.clone(),
        }
    }
}

/// Running best over the candidate stream.
#[derive(Debug, Default)]
struct BestSoFar<'a> {
    best: Option<(Rank, Candidate<'a>)>,
    evaluated: usize,
    affordable: usize,
    overflowed: usize,
}

impl<'a> BestSoFar<'a> {
    fn offer(&mut self, candidate: Candidate<'a>, budget: u64) {
        self.evaluated += 1;
        let Some(rank) = candidate.rank() else {
            self.overflowed += 1;
            return;
        };
        if rank.total_price > budget {
            return;
        }
        self.affordable += 1;
        let replace = match &self.best {
            None => true,
            Some((incumbent, _)) => rank.outranks(incumbent),
        };
        if replace {
            self.best = Some((rank, candidate));
        }
    }
}

impl<'a> BuildSelector<'a> {
    /// Prepare the evaluation orders for `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut processors: Vec<&Processor> = catalog.processors.iter().collect();
        processors.sort_by(|a, b| by_value_desc((a.score, a.price), (b.score, b.price)));

        let mut graphics_by_value: Vec<&GraphicsCard> = catalog.graphics.iter().collect();
        graphics_by_value.sort_by(|a, b| by_value_desc((a.score, a.price), (b.score, b.price)));
        let mut graphics_by_price: Vec<&GraphicsCard> = catalog.graphics.iter().collect();
        graphics_by_price.sort_by_key(|g| g.price);

        let mut motherboards: Vec<&Motherboard> = catalog.motherboards.iter().collect();
        motherboards.sort_by_key(|m| m.price);

        let mut memory_by_price: Vec<&MemoryModule> = catalog.memory.iter().collect();
        memory_by_price.sort_by_key(|m| m.price);
        let mut memory_by_capacity = memory_by_price.clone();
        memory_by_capacity.sort_by(|a, b| b.capacity_gb.cmp(&a.capacity_gb));

        let mut storage_by_price: Vec<&StorageDevice> = catalog.storage.iter().collect();
        storage_by_price.sort_by_key(|s| s.price);
        let mut storage_by_capacity = storage_by_price.clone();
        storage_by_capacity.sort_by(|a, b| b.capacity_gb.cmp(&a.capacity_gb));

        let mut power_supplies: Vec<&PowerSupply> = catalog.power_supplies.iter().collect();
        power_supplies.sort_by_key(|p| p.price);

        let mut cases: Vec<&Case> = catalog.cases.iter().collect();
        cases.sort_by_key(|c| c.price);

        Self {
            processors,
            motherboards,
            memory_by_price,
            memory_by_capacity,
            storage_by_price,
            storage_by_capacity,
            graphics_by_value,
            graphics_by_price,
            power_supplies,
            cases,
        }
    }

    /// Run one selection against `budget`.
    pub fn select(&self, budget: u64) -> Selection {
        let Some((rank, best)) = self.search(budget) else {
            match self.cheapest_valid_price() {
                Some(cheapest) if cheapest <= budget => {
                    tracing::warn!(budget, cheapest, "minimal build fits but search found none")
                }
                cheapest => tracing::info!(budget, ?cheapest, "budget too low for any valid build"),
            }
            return Selection::Infeasible;
        };

        let parts = best.to_owned_build();
        let total_price = rank.total_price;
        let (status, remaining) = if total_price <= budget {
            (BudgetStatus::Within, signed(budget - total_price))
        } else {
            (BudgetStatus::Over, -signed(total_price - budget))
        };
        let tips = match status {
            BudgetStatus::Within => tips::upgrade_tips(self, &parts, remaining),
            BudgetStatus::Over => vec![],
        };

        Selection::Recommendation(Recommendation {
            budget,
            build: parts.line_items(),
            total_price,
            performance: rank.performance,
            status,
            remaining,
            tips,
            parts,
        })
    }

    /// Price of the minimal valid build, ignoring budget.
    ///
    /// For each processor and compatible motherboard this takes the smallest
    /// valid memory and storage (cheaper first within a capacity), the cheapest
    /// card only when one is required, the cheapest sufficient power supply, and
    /// the cheapest case. It does not consider larger parts that happen to cost
    /// less, or pricier cards that could fit a cheaper power supply, so it is a
    /// heuristic minimum rather than a proven one.
    pub fn cheapest_valid_price(&self) -> Option<u64> {
        self.cheapest_valid().map(|(rank, _)| rank.total_price)
    }

    /// Minimal build as described on [`Self::cheapest_valid_price`].
    pub fn cheapest_valid_build(&self) -> Option<CandidateBuild> {
        self.cheapest_valid().map(|(_, c)| c.to_owned_build())
    }

    fn cheapest_valid(&self) -> Option<(Rank, Candidate<'a>)> {
        let case = self.cheapest_case()?;
        // min_by_key keeps the first minimum, so price breaks capacity ties.
        let storage = self
            .storage_by_price
            .iter()
            .copied()
            .filter(|s| compat::storage_fits(s))
            .min_by_key(|s| s.capacity_gb)?;
        let mut cheapest: Option<(Rank, Candidate<'a>)> = None;

        for &processor in &self.processors {
            let graphics = if processor.integrated_graphics {
                GraphicsChoice::IntegratedOnly
            } else {
                match self.graphics_by_price.first() {
                    Some(&card) => GraphicsChoice::Discrete(card),
                    None => continue,
                }
            };
            for board in self.motherboards_for(processor) {
                let Some(memory) = self
                    .memory_by_price
                    .iter()
                    .copied()
                    .filter(|m| compat::memory_fits(board, m))
                    .min_by_key(|m| m.capacity_gb)
                else {
                    continue;
                };
                let Some(power_supply) = self.cheapest_psu(processor, graphics.card().copied())
                else {
                    continue;
                };
                let candidate = Candidate {
                    processor,
                    motherboard: board,
                    memory,
                    storage,
                    graphics,
                    power_supply,
                    case,
                };
                let Some(rank) = candidate.rank() else {
                    continue;
                };
                let cheaper = cheapest
                    .as_ref()
                    .map_or(true, |(current, _)| rank.total_price < current.total_price);
                if cheaper {
                    cheapest = Some((rank, candidate));
                }
            }
        }
        cheapest
    }

    fn search(&self, budget: u64) -> Option<(Rank, Candidate<'a>)> {
        let Some(case) = self.cheapest_case() else {
            tracing::debug!("catalog has no cases; nothing to search");
            return None;
        };
        let mut best = BestSoFar::default();

        for &processor in &self.processors {
            for board in self.motherboards_for(processor) {
                let memory_options = self
                    .memory_by_capacity
                    .iter()
                    .copied()
                    .filter(|m| compat::memory_fits(board, m));
                for memory in memory_options {
                    let storage_options = self
                        .storage_by_capacity
                        .iter()
                        .copied()
                        .filter(|s| compat::storage_fits(s));
                    for storage in storage_options {
                        for graphics in self.graphics_choices(processor) {
                            let Some(power_supply) =
                                self.cheapest_psu(processor, graphics.card().copied())
                            else {
                                continue;
                            };
                            best.offer(
                                Candidate {
                                    processor,
                                    motherboard: board,
                                    memory,
                                    storage,
                                    graphics,
                                    power_supply,
                                    case,
                                },
                                budget,
                            );
                        }
                    }
                }
            }
        }

        tracing::debug!(
            budget,
            evaluated = best.evaluated,
            affordable = best.affordable,
            overflowed = best.overflowed,
            best = ?best.best.as_ref().map(|(rank, _)| rank),
            "build search finished"
        );
        best.best
    }

    fn motherboards_for<'s>(
        &'s self,
        processor: &'s Processor,
    ) -> impl Iterator<Item = &'a Motherboard> + 's {
        self.motherboards.iter().copied().filter(move |m| compat::socket_matches(processor, m))
    }

    /// Integrated graphics first when available, then cards by descending value.
    fn graphics_choices(&self, processor: &Processor) -> Vec<GraphicsChoice<&'a GraphicsCard>> {
        let mut choices = Vec::with_capacity(self.graphics_by_value.len() + 1);
        if processor.integrated_graphics {
            choices.push(GraphicsChoice::IntegratedOnly);
        }
        choices.extend(self.graphics_by_value.iter().map(|&card| GraphicsChoice::Discrete(card)));
        choices
    }

    fn cheapest_psu(
        &self,
        processor: &Processor,
        card: Option<&GraphicsCard>,
    ) -> Option<&'a PowerSupply> {
        let required = compat::wattage_for(processor, card);
        self.power_supplies.iter().copied().find(|p| p.wattage >= required)
    }

    fn cheapest_case(&self) -> Option<&'a Case> {
        self.cases.first().copied()
    }

    pub(crate) fn memory_by_price(&self) -> &[&'a MemoryModule] {
        &self.memory_by_price
    }

    pub(crate) fn storage_by_price(&self) -> &[&'a StorageDevice] {
        &self.storage_by_price
    }

    pub(crate) fn graphics_by_value(&self) -> &[&'a GraphicsCard] {
        &self.graphics_by_value
    }

    pub(crate) fn graphics_by_price(&self) -> &[&'a GraphicsCard] {
        &self.graphics_by_price
    }
}

/// Order `(score, price)` pairs by descending score per price without floats.
fn by_value_desc(a: (u32, u64), b: (u32, u64)) -> Ordering {
    let a_value = u128::from(a.0) * u128::from(b.1);
    let b_value = u128::from(b.0) * u128::from(a.1);
    b_value.cmp(&a_value)
}

fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
