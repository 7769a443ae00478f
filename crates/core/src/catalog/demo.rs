use crate::catalog::Catalog;
use crate::model::{
    Case, GraphicsCard, MemoryModule, Motherboard, PowerSupply, Processor, StorageDevice,
};

fn processor(
    id: &str,
    name: &str,
    socket: &str,
    tdp: u32,
    score: u32,
    price: u64,
    integrated_graphics: bool,
) -> Processor {
    Processor {
        id: id.into(),
        name: name.into(),
        socket: socket.into(),
        tdp,
        score,
        price,
        integrated_graphics,
    }
}

fn motherboard(id: &str, name: &str, socket: &str, memory_type: &str, price: u64) -> Motherboard {
    Motherboard {
        id: id.into(),
        name: name.into(),
        socket: socket.into(),
        memory_type: memory_type.into(),
        price,
    }
}

pub(super) fn demo_catalog() -> Catalog {
    Catalog {
        processors: vec![
            processor("r3-3200g", "AMD Ryzen 3 3200G (APU)", "AM4", 65, 55, 1_200_000, true),
            processor("i3-10100", "Intel Core i3-10100", "LGA1200", 65, 65, 1_300_000, true),
            processor("r5-3600", "AMD Ryzen 5 3600", "AM4", 65, 90, 1_700_000, false),
        ],
        motherboards: vec![
            motherboard("a320", "A320 mATX (AM4)", "AM4", "DDR4", 700_000),
            motherboard("b450", "B450 mATX (AM4)", "AM4", "DDR4", 1_000_000),
            motherboard("h410", "H410 mATX (LGA1200)", "LGA1200", "DDR4", 800_000),
        ],
        memory: vec![
            MemoryModule {
                id: "8g-ddr4".into(),
                name: "8GB DDR4 3200".into(),
                capacity_gb: 8,
                memory_type: "DDR4".into(),
                price: 350_000,
                score: 20,
            },
            MemoryModule {
                id: "16g-ddr4".into(),
                name: "16GB (2x8) DDR4 3200".into(),
                capacity_gb: 16,
                memory_type: "DDR4".into(),
                price: 650_000,
                score: 40,
            },
        ],
        storage: vec![
            StorageDevice {
                id: "ssd240".into(),
                name: "SSD 240GB SATA".into(),
                interface: "SATA".into(),
                capacity_gb: 240,
                price: 300_000,
                score: 20,
            },
            StorageDevice {
                id: "ssd480".into(),
                name: "SSD 480GB SATA".into(),
                interface: "SATA".into(),
                capacity_gb: 480,
                price: 450_000,
                score: 30,
            },
        ],
        graphics: vec![
            GraphicsCard {
                id: "gtx1650".into(),
                name: "GTX 1650 4GB".into(),
                tdp: 75,
                score: 90,
                price: 2_000_000,
            },
            GraphicsCard {
                id: "rx560".into(),
                name: "RX 560 4GB".into(),
                tdp: 80,
                score: 70,
                price: 1_400_000,
            },
            GraphicsCard {
                id: "used-gt1030".into(),
                name: "GT 1030 2GB (Used)".into(),
                tdp: 30,
                score: 40,
                price: 800_000,
            },
        ],
        power_supplies: vec![
            PowerSupply {
                id: "400w".into(),
                name: "PSU 400W 80+".into(),
                wattage: 400,
                price: 350_000,
            },
            PowerSupply {
                id: "500w".into(),
                name: "PSU 500W 80+".into(),
                wattage: 500,
                price: 450_000,
            },
        ],
        cases: vec![
            Case { id: "mcase".into(), name: "Micro ATX Case (Airflow)".into(), price: 300_000 },
            Case { id: "scase".into(), name: "Standard ATX Case".into(), price: 350_000 },
        ],
    }
}
