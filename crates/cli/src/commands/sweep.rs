use anyhow::{bail, Result};
use rig_advisor_core::BuildSelector;
use serde::Serialize;

use crate::commands::{load_context, AdvisorContext};

/// One budget point of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    pub budget: u64,
    pub feasible: bool,
    pub performance: u32,
    pub total_price: Option<u64>,
}

/// Run the selector at every `step` from `from` through `to` (inclusive).
pub fn run_sweep(
    root: &str,
    catalog: Option<&str>,
    from: u64,
    to: u64,
    step: Option<u64>,
) -> Result<Vec<SweepPoint>> {
    let ctx = load_context(root, catalog)?;
    sweep_with(&ctx, from, to, step)
}

fn sweep_with(
    ctx: &AdvisorContext,
    from: u64,
    to: u64,
    step: Option<u64>,
) -> Result<Vec<SweepPoint>> {
    if from == 0 {
        bail!("--from must be a positive amount");
    }
    if to < from {
        bail!("--to ({}) must not be below --from ({})", to, from);
    }
    let step = step.unwrap_or(ctx.config.budget.step);
    if step == 0 {
        bail!("--step must be a positive amount");
    }

    let selector = BuildSelector::new(&ctx.catalog);
    let mut points = Vec::new();
    let mut budget = from;
    loop {
        let selection = selector.select(budget);
        let rec = selection.recommendation();
        points.push(SweepPoint {
            budget,
            feasible: rec.is_some(),
            performance: selection.performance(),
            total_price: rec.map(|r| r.total_price),
        });
        match budget.checked_add(step) {
            Some(next) if next <= to => budget = next,
            _ => break,
        }
    }
    tracing::debug!(points = points.len(), from, to, step, "sweep finished");
    Ok(points)
}

/// Print performance per budget across a range.
pub fn sweep_command(
    root: &str,
    catalog: Option<&str>,
    from: u64,
    to: u64,
    step: Option<u64>,
    json: bool,
) -> Result<()> {
    let ctx = load_context(root, catalog)?;
    let points = sweep_with(&ctx, from, to, step)?;

    if json {
        let serialized = serde_json::to_string_pretty(&points)?;
        println!("{}", serialized);
        return Ok(());
    }

    let money = &ctx.config.currency;
    println!("Budget sweep ({} points):", points.len());
    for point in &points {
        match point.total_price {
            Some(total) => println!(
                "  {:>16}  performance={:<4} total={}",
                money.format_price(point.budget),
                point.performance,
                money.format_price(total)
            ),
            None => println!("  {:>16}  (save up first)", money.format_price(point.budget)),
        }
    }

    Ok(())
}
