// ============================================
// Gravity System - Ускорение свободного падения
// ============================================

use crate::sim::core::SimResources;
use crate::sim::entity::Body;

/// Система гравитации для всех тел
pub struct GravitySystem;

impl GravitySystem {
    pub fn update(resources: &mut SimResources, dt: f32) {
        let gravity = resources.config.gravity;
        let terminal = resources.config.terminal_velocity;

        Self::apply(&mut resources.player.body, gravity, terminal, dt);
        for prop in &mut resources.props {
            Self::apply(prop, gravity, terminal, dt);
        }
    }

    /// Гравитация по -Z, скорость падения ограничена `terminal`
    pub fn apply(body: &mut Body, gravity: f32, terminal: f32, dt: f32) {
        body.velocity.z -= gravity * dt;
        body.velocity.z = body.velocity.z.max(-terminal);
    }
}
