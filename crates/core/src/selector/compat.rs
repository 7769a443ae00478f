//! Compatibility rules between parts.

use thiserror::Error;

use crate::model::{GraphicsCard, MemoryModule, Motherboard, Processor, StorageDevice};
use crate::selector::CandidateBuild;

/// Smallest memory module considered viable, in GB.
pub const MIN_MEMORY_GB: u32 = 8;

/// Smallest storage device considered viable, in GB.
pub const MIN_STORAGE_GB: u32 = 240;

/// Floor for power supply sizing regardless of component draw.
pub const MIN_PSU_WATTAGE: u32 = 400;

/// Power supply headroom over combined TDP, in percent.
pub const PSU_HEADROOM_PERCENT: u32 = 130;

/// A broken compatibility rule, reported by [`check_build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("motherboard socket {board} does not match processor socket {processor}")]
    SocketMismatch { processor: String, board: String },

    #[error("memory type {memory} does not match motherboard memory type {board}")]
    MemoryTypeMismatch { board: String, memory: String },

    #[error("memory capacity {capacity_gb}GB is below the 8GB minimum")]
    MemoryTooSmall { capacity_gb: u32 },

    #[error("storage capacity {capacity_gb}GB is below the 240GB minimum")]
    StorageTooSmall { capacity_gb: u32 },

    #[error("processor has no integrated graphics and no graphics card was chosen")]
    GraphicsRequired,

    #[error("power supply provides {wattage}W but {required}W is required")]
    InsufficientPower { wattage: u32, required: u32 },
}

/// Wattage a power supply must deliver for the given processor and card draw.
///
/// `max(400, ceil(1.3 * (cpu_tdp + gpu_tdp)))`, computed in integers.
pub fn required_wattage(cpu_tdp: u32, gpu_tdp: u32) -> u32 {
    let draw = u64::from(cpu_tdp) + u64::from(gpu_tdp);
    let needed = (draw * u64::from(PSU_HEADROOM_PERCENT)).div_ceil(100);
    u32::try_from(needed).unwrap_or(u32::MAX).max(MIN_PSU_WATTAGE)
}

pub fn socket_matches(processor: &Processor, board: &Motherboard) -> bool {
    processor.socket == board.socket
}

/// Memory is usable on `board` and meets the capacity floor.
pub fn memory_fits(board: &Motherboard, memory: &MemoryModule) -> bool {
    memory.capacity_gb >= MIN_MEMORY_GB && memory.memory_type == board.memory_type
}

pub fn storage_fits(storage: &StorageDevice) -> bool {
    storage.capacity_gb >= MIN_STORAGE_GB
}

/// Wattage needed for a processor and an optional discrete card.
pub fn wattage_for(processor: &Processor, card: Option<&GraphicsCard>) -> u32 {
    required_wattage(processor.tdp, card.map_or(0, |c| c.tdp))
}

/// Check an assembled build against every compatibility rule.
///
/// Returns the first violation found, in rule order.
pub fn check_build(build: &CandidateBuild) -> Result<(), Violation> {
    let processor = &build.processor;
    let board = &build.motherboard;

    if !socket_matches(processor, board) {
        return Err(Violation::SocketMismatch {
            processor: processor.socket.clone(),
            board: board.socket.clone(),
        });
    }
    if build.memory.memory_type != board.memory_type {
        return Err(Violation::MemoryTypeMismatch {
            board: board.memory_type.clone(),
            memory: build.memory.memory_type.clone(),
        });
    }
    if build.memory.capacity_gb < MIN_MEMORY_GB {
        return Err(Violation::MemoryTooSmall { capacity_gb: build.memory.capacity_gb });
    }
    if !storage_fits(&build.storage) {
        return Err(Violation::StorageTooSmall { capacity_gb: build.storage.capacity_gb });
    }
    if !processor.integrated_graphics && !build.graphics.is_discrete() {
        return Err(Violation::GraphicsRequired);
    }
    let required = wattage_for(processor, build.graphics.card());
    if build.power_supply.wattage < required {
        return Err(Violation::InsufficientPower { wattage: build.power_supply.wattage, required });
    }
    Ok(())
}
