// ============================================
// Move System - Движение тел с коллизиями
// ============================================
// Игрок и пропы не сталкиваются друг с другом, только с сеткой,
// поэтому пропы разрешаются параллельно (rayon).

use rayon::prelude::*;

use crate::sim::core::SimResources;
use crate::sim::physics::MoveOutcome;

/// Система движения
pub struct MoveSystem;

impl MoveSystem {
    /// Возвращает итог движения игрока
    pub fn update(resources: &mut SimResources, dt: f32) -> MoveOutcome {
        let grid = &resources.grid;
        let resolver = resources.resolver;

        let outcome = resolver.move_body(grid, &mut resources.player.body, dt);
        if !outcome.contacts.is_empty() {
            log::debug!(
                "player contacts {:?}, blocked {:?}, applied {:?}",
                outcome.contacts.iter().filter_map(|hit| hit.normal).collect::<Vec<_>>(),
                outcome.blocked,
                outcome.applied
            );
        }

        resources.props.par_iter_mut().for_each(|prop| {
            resolver.move_body(grid, prop, dt);
        });

        outcome
    }
}
