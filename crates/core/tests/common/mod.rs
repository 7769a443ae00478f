#![allow(dead_code)]

use rig_advisor_core::model::{
    Case, GraphicsCard, MemoryModule, Motherboard, PowerSupply, Processor, StorageDevice,
};
use rig_advisor_core::Catalog;

pub fn cpu(id: &str, socket: &str, tdp: u32, score: u32, price: u64, igpu: bool) -> Processor {
    Processor {
        id: id.into(),
        name: format!("CPU {id}"),
        socket: socket.into(),
        tdp,
        score,
        price,
        integrated_graphics: igpu,
    }
}

pub fn board(id: &str, socket: &str, memory_type: &str, price: u64) -> Motherboard {
    Motherboard {
        id: id.into(),
        name: format!("Board {id}"),
        socket: socket.into(),
        memory_type: memory_type.into(),
        price,
    }
}

pub fn memory(
    id: &str,
    capacity_gb: u32,
    memory_type: &str,
    price: u64,
    score: u32,
) -> MemoryModule {
    MemoryModule {
        id: id.into(),
        name: format!("{capacity_gb}GB {memory_type}"),
        capacity_gb,
        memory_type: memory_type.into(),
        price,
        score,
    }
}

pub fn storage(id: &str, capacity_gb: u32, price: u64, score: u32) -> StorageDevice {
    StorageDevice {
        id: id.into(),
        name: format!("SSD {capacity_gb}GB"),
        interface: "SATA".into(),
        capacity_gb,
        price,
        score,
    }
}

pub fn gpu(id: &str, tdp: u32, score: u32, price: u64) -> GraphicsCard {
    GraphicsCard { id: id.into(), name: format!("GPU {id}"), tdp, score, price }
}

pub fn psu(id: &str, wattage: u32, price: u64) -> PowerSupply {
    PowerSupply { id: id.into(), name: format!("PSU {wattage}W"), wattage, price }
}

pub fn case(id: &str, price: u64) -> Case {
    Case { id: id.into(), name: format!("Case {id}"), price }
}

/// One APU, one board, two memory kits with equal score, one SSD, one card.
///
/// The cheapest build costs 2,500,000 and leaves room for the 32GB kit.
pub fn apu_catalog() -> Catalog {
    Catalog {
        processors: vec![cpu("apu", "S1", 65, 50, 500_000, true)],
        motherboards: vec![board("b1", "S1", "DDR4", 500_000)],
        memory: vec![
            memory("m16", 16, "DDR4", 600_000, 40),
            memory("m32", 32, "DDR4", 1_000_000, 40),
        ],
        storage: vec![storage("s500", 500, 400_000, 30)],
        graphics: vec![gpu("g1", 75, 60, 2_000_000)],
        power_supplies: vec![psu("p450", 450, 300_000)],
        cases: vec![case("c1", 200_000)],
    }
}
