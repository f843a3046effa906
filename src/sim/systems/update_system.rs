// ============================================
// Update System - Один тик симуляции
// ============================================
// Порядок: ввод -> гравитация -> движение с коллизиями

use crate::sim::core::SimResources;
use crate::sim::physics::MoveOutcome;

use super::{GravitySystem, InputSystem, MoveSystem};

/// Что произошло за тик
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Номер тика (с единицы)
    pub tick: u64,
    /// Сколько движений мыши обработано
    pub mouse_moves: usize,
    /// Итог движения игрока
    pub player_move: MoveOutcome,
}

/// Система обновления игровой логики
pub struct UpdateSystem;

impl UpdateSystem {
    /// Основной цикл обновления
    pub fn update(resources: &mut SimResources) -> TickReport {
        let dt = resources.config.tick_seconds;

        // 1. Ввод (мышь + клавиши)
        let mouse_moves = InputSystem::update(resources, dt);

        // 2. Гравитация
        GravitySystem::update(resources, dt);

        // 3. Движение с коллизиями
        let player_move = MoveSystem::update(resources, dt);

        resources.tick += 1;

        TickReport {
            tick: resources.tick,
            mouse_moves,
            player_move,
        }
    }
}
