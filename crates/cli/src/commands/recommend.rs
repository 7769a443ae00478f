use anyhow::{bail, Result};
use rig_advisor_core::config::CurrencyDisplay;
use rig_advisor_core::selector::{BudgetStatus, Recommendation};
use rig_advisor_core::{BuildSelector, Selection};
use serde::Serialize;

use crate::commands::load_context;

/// Selection plus the context needed to interpret it later.
#[derive(Debug, Serialize)]
pub struct RecommendReport {
    /// Budget as given by the user.
    pub requested_budget: u64,
    /// Budget actually searched (after clamping).
    pub budget: u64,
    pub catalog_fingerprint: String,
    /// Price of the minimal viable build, when the catalog has one.
    pub cheapest_viable: Option<u64>,
    pub selection: Selection,
    #[serde(skip)]
    pub currency: CurrencyDisplay,
}

/// Resolve context and run one selection without printing anything.
pub fn run_recommendation(
    root: &str,
    budget: Option<u64>,
    catalog: Option<&str>,
    clamp: bool,
) -> Result<RecommendReport> {
    let ctx = load_context(root, catalog)?;
    let requested_budget = budget.unwrap_or(ctx.config.budget.default);
    if requested_budget == 0 {
        bail!("Budget must be a positive amount");
    }
    let budget = if clamp { ctx.config.budget.clamp(requested_budget) } else { requested_budget };
    if budget != requested_budget {
        tracing::info!(requested_budget, budget, "budget clamped to configured range");
    }

    let selector = BuildSelector::new(&ctx.catalog);
    let selection = selector.select(budget);

    Ok(RecommendReport {
        requested_budget,
        budget,
        catalog_fingerprint: ctx.catalog.fingerprint()?,
        cheapest_viable: selector.cheapest_valid_price(),
        selection,
        currency: ctx.config.currency,
    })
}

/// Recommend a build for the given budget.
pub fn recommend_command(
    root: &str,
    budget: Option<u64>,
    catalog: Option<&str>,
    json: bool,
    clamp: bool,
) -> Result<()> {
    let report = run_recommendation(root, budget, catalog, clamp)?;

    if json {
        let serialized = serde_json::to_string_pretty(&report)?;
        println!("{}", serialized);
        return Ok(());
    }

    let money = &report.currency;
    if report.budget != report.requested_budget {
        println!(
            "Budget {} adjusted to {} (configured range).",
            money.format_price(report.requested_budget),
            money.format_price(report.budget)
        );
    }

    match &report.selection {
        Selection::Infeasible => {
            println!("It's better to save up first.");
            println!("Try increasing your budget to meet the minimum viable build requirements.");
            if let Some(cheapest) = report.cheapest_viable {
                println!("Cheapest viable build: {}", money.format_price(cheapest));
            }
        }
        Selection::Recommendation(rec) => print_recommendation(rec, money),
    }

    Ok(())
}

fn print_recommendation(rec: &Recommendation, money: &CurrencyDisplay) {
    println!("Recommended Build");
    println!("=================");
    for item in &rec.build {
        println!(
            "{:<12} {:<32} {:>16}",
            item.category.label(),
            item.name,
            money.format_price(item.price)
        );
    }
    println!();
    println!("Total cost: {}", money.format_price(rec.total_price));
    match rec.status {
        BudgetStatus::Within => {
            println!("Status: Within Budget");
            println!("Remaining: {}", money.format(rec.remaining));
        }
        BudgetStatus::Over => {
            println!("Status: Over Budget");
            println!("Over by: {}", money.format(rec.remaining.saturating_abs()));
        }
    }
    println!("Estimated performance: {}", rec.performance);

    if !rec.tips.is_empty() {
        println!();
        println!("Upgrade Tips:");
        for tip in &rec.tips {
            println!("  - {}", tip.message);
        }
    }
}
