mod common;

use common::{apu_catalog, board, case, cpu, gpu, memory, psu, storage};
use rig_advisor_core::model::Category;
use rig_advisor_core::selector::{BudgetStatus, TipKind};
use rig_advisor_core::{select, BuildSelector, Catalog, Selection};

#[test]
fn budget_far_below_minimum_is_infeasible() {
    let catalog = Catalog::demo();
    assert_eq!(select(500_000, &catalog), Selection::Infeasible);
}

#[test]
fn budget_one_below_minimum_is_infeasible() {
    let catalog = Catalog::demo();
    assert!(select(3_199_999, &catalog).is_infeasible());
}

#[test]
fn budget_equal_to_minimum_is_within_with_no_tips() {
    let catalog = Catalog::demo();
    let selection = select(3_200_000, &catalog);
    let rec = selection.recommendation().expect("recommendation");

    assert_eq!(rec.total_price, 3_200_000);
    assert_eq!(rec.status, BudgetStatus::Within);
    assert_eq!(rec.remaining, 0);
    assert!(rec.tips.is_empty(), "unexpected tips: {:?}", rec.tips);
    assert_eq!(rec.performance, 95);
    assert_eq!(rec.parts.processor.id, "r3-3200g");
}

#[test]
fn recommendation_line_items_follow_category_order() {
    let catalog = Catalog::demo();
    let selection = select(3_200_000, &catalog);
    let rec = selection.recommendation().unwrap();

    let categories: Vec<Category> = rec.build.iter().map(|item| item.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Processor,
            Category::Motherboard,
            Category::Memory,
            Category::Storage,
            Category::PowerSupply,
            Category::Case,
        ]
    );
    assert_eq!(rec.build.iter().map(|i| i.price).sum::<u64>(), rec.total_price);
}

#[test]
fn leftover_budget_prefers_more_memory_then_storage() {
    let catalog = Catalog::demo();

    let rec = select(3_500_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.memory.id, "16g-ddr4");
    assert_eq!(rec.parts.storage.id, "ssd240");
    assert_eq!(rec.performance, 115);

    let rec = select(3_650_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.memory.id, "16g-ddr4");
    assert_eq!(rec.parts.storage.id, "ssd480");
    assert_eq!(rec.performance, 125);
}

#[test]
fn integrated_build_with_room_for_memory_gets_only_a_memory_tip() {
    let catalog = apu_catalog();
    let selection = select(3_000_000, &catalog);
    let rec = selection.recommendation().expect("recommendation");

    assert!(rec.parts.graphics_card().is_none());
    assert_eq!(rec.total_price, 2_500_000);
    assert_eq!(rec.remaining, 500_000);
    assert_eq!(rec.tips.len(), 1, "tips: {:?}", rec.tips);
    assert_eq!(rec.tips[0].kind, TipKind::MemoryUpgrade);
    assert_eq!(rec.tips[0].part_id, "m32");
    assert_eq!(rec.tips[0].price_delta, 400_000);
    assert!(rec.tips[0].message.contains("32GB DDR4"));
}

#[test]
fn discrete_build_wins_when_budget_allows() {
    let catalog = Catalog::demo();

    let rec = select(4_500_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.processor.id, "r5-3600");
    assert_eq!(rec.performance, 170);
    let gpu_item = rec.build.iter().find(|i| i.category == Category::Graphics);
    assert_eq!(gpu_item.map(|i| i.id.as_str()), Some("used-gt1030"));

    let rec = select(10_000_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.processor.id, "r5-3600");
    assert_eq!(rec.parts.graphics_card().map(|g| g.id.as_str()), Some("gtx1650"));
    assert_eq!(rec.total_price, 6_150_000);
    assert_eq!(rec.performance, 250);
    assert!(rec.tips.is_empty());
}

#[test]
fn equal_performance_prefers_the_cheaper_build() {
    // m32 is tried first (largest capacity) but m16 scores the same for less.
    let catalog = apu_catalog();
    let rec = select(10_000_000, &catalog).recommendation().cloned().unwrap();
    // The card adds 60 points, so it is taken; memory stays at the cheaper kit.
    assert_eq!(rec.parts.graphics_card().map(|g| g.id.as_str()), Some("g1"));
    assert_eq!(rec.parts.memory.id, "m16");
    assert_eq!(rec.total_price, 4_500_000);
}

#[test]
fn equal_performance_across_processors_prefers_the_cheaper_one() {
    let mut catalog = apu_catalog();
    catalog.processors.push(cpu("apu-pricey", "S1", 65, 50, 900_000, true));
    let rec = select(2_900_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.processor.id, "apu");
    assert_eq!(rec.total_price, 2_500_000);
}

#[test]
fn integrated_graphics_is_preferred_over_a_zero_score_card() {
    let mut catalog = apu_catalog();
    catalog.graphics = vec![gpu("dud", 10, 0, 100_000)];
    let rec = select(10_000_000, &catalog).recommendation().cloned().unwrap();
    assert!(rec.parts.graphics_card().is_none());
}

#[test]
fn unsatisfiable_power_makes_every_branch_infeasible() {
    let mut catalog = Catalog::demo();
    catalog.power_supplies = vec![psu("tiny", 300, 200_000)];
    let selector = BuildSelector::new(&catalog);

    assert!(selector.select(50_000_000).is_infeasible());
    assert_eq!(selector.cheapest_valid_price(), None);
}

#[test]
fn psu_sizing_picks_the_cheapest_sufficient_unit() {
    let catalog = Catalog {
        processors: vec![cpu("hot", "S1", 200, 100, 1_000_000, false)],
        motherboards: vec![board("b1", "S1", "DDR5", 500_000)],
        memory: vec![memory("m16", 16, "DDR5", 500_000, 40)],
        storage: vec![storage("s1", 1000, 500_000, 40)],
        graphics: vec![gpu("big", 200, 150, 3_000_000)],
        power_supplies: vec![
            psu("p400", 400, 300_000),
            psu("p650", 650, 700_000),
            psu("p550", 550, 500_000),
        ],
        cases: vec![case("c1", 200_000)],
    };
    // (200 + 200) * 1.3 = 520W, so the 550W unit is the cheapest that fits.
    let rec = select(20_000_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.power_supply.id, "p550");
}

#[test]
fn dedicated_processor_without_cards_is_skipped() {
    let mut catalog = apu_catalog();
    catalog.graphics.clear();
    catalog.processors.push(cpu("fast", "S1", 65, 500, 600_000, false));
    let rec = select(50_000_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.processor.id, "apu");
}

#[test]
fn memory_type_without_a_board_is_pruned() {
    let mut catalog = apu_catalog();
    catalog.memory.push(memory("m64-ddr5", 64, "DDR5", 100_000, 500));
    let rec = select(50_000_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.memory.memory_type, "DDR4");
}

#[test]
fn undersized_memory_and_storage_are_never_chosen() {
    let mut catalog = apu_catalog();
    catalog.memory.push(memory("m4", 4, "DDR4", 10_000, 400));
    catalog.storage.push(storage("s128", 128, 10_000, 400));
    let rec = select(50_000_000, &catalog).recommendation().cloned().unwrap();
    assert!(rec.parts.memory.capacity_gb >= 8);
    assert!(rec.parts.storage.capacity_gb >= 240);
}

#[test]
fn empty_categories_degrade_to_infeasible() {
    let mut catalog = apu_catalog();
    catalog.cases.clear();
    assert!(select(50_000_000, &catalog).is_infeasible());

    assert!(select(50_000_000, &Catalog::default()).is_infeasible());
}

#[test]
fn storage_tip_follows_memory_tip_and_uses_leftover() {
    let mut catalog = apu_catalog();
    catalog.storage.push(storage("s1000", 1000, 500_000, 30));
    // Base 2,500,000; memory delta 400,000 and storage delta 100,000 fit in 500,000.
    let rec = select(3_000_000, &catalog).recommendation().cloned().unwrap();
    let kinds: Vec<TipKind> = rec.tips.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TipKind::MemoryUpgrade, TipKind::StorageUpgrade]);
    assert_eq!(rec.tips[1].part_id, "s1000");
}

#[test]
fn add_graphics_tip_when_leftover_covers_the_cheapest_card() {
    let mut catalog = apu_catalog();
    catalog.graphics = vec![gpu("g-low", 30, 0, 300_000), gpu("g-mid", 75, 60, 2_000_000)];
    // g-low adds nothing, so the integrated build stays best at 2,500,000.
    let rec = select(3_000_000, &catalog).recommendation().cloned().unwrap();
    assert!(rec.parts.graphics_card().is_none());
    let kinds: Vec<TipKind> = rec.tips.iter().map(|t| t.kind).collect();
    // Memory tip leaves 100,000, which no longer covers g-low.
    assert_eq!(kinds, vec![TipKind::MemoryUpgrade]);

    catalog.memory.retain(|m| m.id == "m16");
    let rec = select(3_000_000, &catalog).recommendation().cloned().unwrap();
    let kinds: Vec<TipKind> = rec.tips.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TipKind::AddGraphics]);
    assert_eq!(rec.tips[0].part_id, "g-low");
    assert_eq!(rec.tips[0].price_delta, 300_000);
}

#[test]
fn graphics_upgrade_tip_names_a_pricier_card_that_fits() {
    let catalog = Catalog {
        processors: vec![cpu("cpu", "S1", 65, 90, 1_000_000, false)],
        motherboards: vec![board("b1", "S1", "DDR4", 500_000)],
        memory: vec![memory("m16", 16, "DDR4", 500_000, 40)],
        storage: vec![storage("s1", 500, 500_000, 30)],
        graphics: vec![gpu("cheap", 30, 40, 800_000), gpu("silly", 30, 40, 1_000_000)],
        power_supplies: vec![psu("p400", 400, 300_000)],
        cases: vec![case("c1", 200_000)],
    };
    // "silly" scores the same for more, so "cheap" is chosen and "silly" is the only upgrade.
    let rec = select(4_000_000, &catalog).recommendation().cloned().unwrap();
    assert_eq!(rec.parts.graphics_card().map(|g| g.id.as_str()), Some("cheap"));
    assert_eq!(rec.remaining, 200_000);
    assert_eq!(rec.tips.len(), 1);
    assert_eq!(rec.tips[0].kind, TipKind::GraphicsUpgrade);
    assert_eq!(rec.tips[0].part_id, "silly");
    assert_eq!(rec.tips[0].price_delta, 200_000);
}

#[test]
fn builds_whose_price_total_overflows_are_skipped() {
    let mut catalog = apu_catalog();
    catalog.processors.push(cpu("huge", "S1", 65, 99, u64::MAX - 1_000_000, true));
    catalog.validate().expect("huge prices are still valid");

    let rec = select(u64::MAX, &catalog).recommendation().cloned().expect("apu build fits");
    assert_eq!(rec.parts.processor.id, "apu");
    assert_eq!(rec.total_price, 4_500_000);
    assert_eq!(rec.total_price, rec.parts.total_price());
    assert_eq!(rec.remaining, i64::MAX);

    catalog.processors.retain(|p| p.id == "huge");
    assert!(select(u64::MAX, &catalog).is_infeasible());
    assert_eq!(BuildSelector::new(&catalog).cheapest_valid_price(), None);
}

#[test]
fn builds_whose_score_total_overflows_are_skipped() {
    let mut catalog = apu_catalog();
    catalog.processors.push(cpu("maxed", "S1", 65, u32::MAX, 600_000, true));
    catalog.validate().expect("maximal scores are still valid");

    let rec = select(10_000_000, &catalog).recommendation().cloned().expect("apu build fits");
    assert_eq!(rec.parts.processor.id, "apu");
    assert_eq!(rec.performance, 180);
    assert_eq!(rec.performance, rec.parts.performance());
}

#[test]
fn assembled_build_totals_saturate_instead_of_wrapping() {
    let mut build = BuildSelector::new(&apu_catalog()).cheapest_valid_build().unwrap();
    build.processor.price = u64::MAX;
    build.processor.score = u32::MAX;
    assert_eq!(build.total_price(), u64::MAX);
    assert_eq!(build.performance(), u32::MAX);
}

#[test]
fn minimal_build_uses_the_smallest_valid_memory_and_storage() {
    let mut catalog = apu_catalog();
    catalog.memory = vec![
        memory("m32", 32, "DDR4", 500_000, 40),
        memory("m16", 16, "DDR4", 600_000, 40),
        memory("m16-sale", 16, "DDR4", 550_000, 35),
        memory("m4", 4, "DDR4", 100_000, 10),
    ];
    catalog.storage =
        vec![storage("s1000", 1000, 350_000, 35), storage("s500", 500, 400_000, 30)];

    let selector = BuildSelector::new(&catalog);
    let build = selector.cheapest_valid_build().expect("minimal build");
    assert_eq!(build.memory.id, "m16-sale");
    assert_eq!(build.storage.id, "s500");
    assert_eq!(selector.cheapest_valid_price(), Some(2_450_000));
}
