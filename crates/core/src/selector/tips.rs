//! Upgrade suggestions for leftover budget.
//!
//! Checked in a fixed order (memory, storage, graphics). Memory and storage tips
//! deduct their price delta from the leftover before the next check; graphics
//! tips are advisory only.

use crate::model::GraphicsChoice;
use crate::selector::{BuildSelector, CandidateBuild, TipKind, UpgradeTip};

pub(super) fn upgrade_tips(
    selector: &BuildSelector<'_>,
    build: &CandidateBuild,
    mut remaining: i64,
) -> Vec<UpgradeTip> {
    let mut tips = Vec::new();

    let larger_memory = selector.memory_by_price().iter().find(|m| {
        m.capacity_gb > build.memory.capacity_gb && m.memory_type == build.memory.memory_type
    });
    if let Some(memory) = larger_memory {
        let delta = price_delta(memory.price, build.memory.price);
        if delta <= remaining {
            tips.push(UpgradeTip {
                kind: TipKind::MemoryUpgrade,
                part_id: memory.id.clone(),
                message: format!("Consider upgrading to {} for better multitasking.", memory.name),
                price_delta: delta,
            });
            remaining = remaining.saturating_sub(delta);
        }
    }

    let larger_storage =
        selector.storage_by_price().iter().find(|s| s.capacity_gb > build.storage.capacity_gb);
    if let Some(storage) = larger_storage {
        let delta = price_delta(storage.price, build.storage.price);
        if delta <= remaining {
            tips.push(UpgradeTip {
                kind: TipKind::StorageUpgrade,
                part_id: storage.id.clone(),
                message: format!("Consider upgrading to {} for more space.", storage.name),
                price_delta: delta,
            });
            remaining = remaining.saturating_sub(delta);
        }
    }

    match &build.graphics {
        GraphicsChoice::IntegratedOnly => {
            if let Some(card) = selector.graphics_by_price().first() {
                let delta = price_delta(card.price, 0);
                if delta <= remaining {
                    tips.push(UpgradeTip {
                        kind: TipKind::AddGraphics,
                        part_id: card.id.clone(),
                        message: format!(
                            "Add a discrete GPU such as {} for improved gaming performance.",
                            card.name
                        ),
                        price_delta: delta,
                    });
                }
            }
        }
        GraphicsChoice::Discrete(current) => {
            let better = selector.graphics_by_value().iter().find(|g| {
                g.price > current.price && price_delta(g.price, current.price) <= remaining
            });
            if let Some(card) = better {
                tips.push(UpgradeTip {
                    kind: TipKind::GraphicsUpgrade,
                    part_id: card.id.clone(),
                    message: format!("Consider upgrading the GPU to {} for higher FPS.", card.name),
                    price_delta: price_delta(card.price, current.price),
                });
            }
        }
    }

    tips
}

fn price_delta(new_price: u64, old_price: u64) -> i64 {
    let new_price = i64::try_from(new_price).unwrap_or(i64::MAX);
    let old_price = i64::try_from(old_price).unwrap_or(i64::MAX);
    new_price.saturating_sub(old_price)
}
