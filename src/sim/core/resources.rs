// ============================================
// Resources - Общие ресурсы симуляции
// ============================================

use std::time::Instant;

use super::{SimConfig, TickCounter};
use crate::sim::entity::Body;
use crate::sim::physics::MoveResolver;
use crate::sim::player::{MouseReceiver, Player, PlayerController};
use crate::sim::terrain::VoxelGrid;

/// Все ресурсы симуляции в одном месте
pub struct SimResources {
    pub config: SimConfig,

    // World data
    pub grid: VoxelGrid,

    // Player entity
    pub player: Player,
    pub player_controller: PlayerController,

    // Props (только статические коллизии)
    pub props: Vec<Body>,

    // Physics
    pub resolver: MoveResolver,

    // Input
    pub mouse_rx: MouseReceiver,

    // Timing
    pub tick_counter: TickCounter,
    /// Сколько тиков симуляции выполнено
    pub tick: u64,
    pub start_time: Instant,
}
