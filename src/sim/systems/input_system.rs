// ============================================
// Input System - Обработка ввода
// ============================================

use crate::sim::core::SimResources;

/// Система обработки ввода игрока
pub struct InputSystem;

impl InputSystem {
    /// Выгрести очередь мыши и обновить скорость игрока.
    /// Возвращает число обработанных движений мыши.
    pub fn update(resources: &mut SimResources, dt: f32) -> usize {
        let moves: Vec<_> = resources.mouse_rx.drain().collect();
        let count = moves.len();

        resources.player_controller.apply_look(&mut resources.player, moves);
        resources.player_controller.update(&mut resources.player, dt);

        count
    }
}
