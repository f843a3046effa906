// ============================================
// Init System - Инициализация симуляции
// ============================================

use std::time::{Duration, Instant};
use ultraviolet::Vec3;

use crate::sim::core::{SimConfig, SimResources, TickCounter};
use crate::sim::entity::{Body, PROP_EXTENTS};
use crate::sim::physics::MoveResolver;
use crate::sim::player::{mouse_queue, MouseSender, Player, PlayerController};
use crate::sim::terrain::{generate_terrain, VoxelGrid};

/// Точка появления игрока (центр основания)
pub const SPAWN_POSITION: [f32; 3] = [0.5, 0.5, 1.0];

/// Высота, с которой падают пропы
const PROP_DROP_HEIGHT: f32 = 5.0;

/// Шаг между пропами по X
const PROP_SPACING: f32 = 5.0;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Создать начальные ресурсы. Отправитель очереди мыши отдаётся наружу
    /// для потока ввода.
    pub fn create_resources(config: SimConfig) -> (SimResources, MouseSender) {
        let mut grid = VoxelGrid::with_default_bounds();
        generate_terrain(&mut grid, &config.terrain_params());

        let [sx, sy, sz] = SPAWN_POSITION;
        let player = Player::new(Vec3::new(sx, sy, sz), config.player_extents());
        let player_controller = PlayerController::new(&config);

        let props = Self::spawn_props(config.prop_count);
        let resolver = MoveResolver::new(config.resolver_passes, config.contact_skin);

        let (mouse_tx, mouse_rx) = mouse_queue(config.input_queue_capacity);

        let now = Instant::now();
        let tick_counter = TickCounter::new(Duration::from_secs_f32(config.tick_seconds), now);

        log::info!(
            "Simulation ready: player at {:?}, {} props, tick {}s",
            player.body.position,
            props.len(),
            config.tick_seconds
        );

        let resources = SimResources {
            config,
            grid,
            player,
            player_controller,
            props,
            resolver,
            mouse_rx,
            tick_counter,
            tick: 0,
            start_time: now,
        };

        (resources, mouse_tx)
    }

    /// Пропы в ряд над землёй, по одному в клетке
    fn spawn_props(count: usize) -> Vec<Body> {
        (0..count)
            .map(|i| {
                let position = Vec3::new(PROP_SPACING * i as f32 + 0.5, PROP_SPACING + 0.5, PROP_DROP_HEIGHT);
                Body::new(position, PROP_EXTENTS)
            })
            .collect()
    }
}
