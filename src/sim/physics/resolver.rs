// ============================================
// Move Resolver - Движение со скольжением
// ============================================
// Broad phase один раз на тик, затем до 3 проходов:
// ближайший контакт -> сдвиг до него -> обнуление заблокированной оси.
// Оставшиеся две оси продолжают движение в следующем проходе.

use ultraviolet::Vec3;

use super::aabb::{Aabb, BoxExtents};
use super::broad_phase::gather_candidates;
use super::normal::{Axis, Normal};
use super::sweep::{sweep_aabb, SweepHit};
use crate::sim::entity::Body;
use crate::sim::terrain::VoxelQuery;

/// Проходов разрешения на тик (по одному на ось)
pub const MAX_PASSES: usize = 3;

/// Отступ от грани после контакта, чтобы округление не вернуло бокс в неё
pub const CONTACT_SKIN: f32 = 0.0005;

/// Итог разрешения движения за тик
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Новая позиция
    pub position: Vec3,
    /// Фактически применённое смещение
    pub applied: Vec3,
    /// Заблокированные оси (X, Y, Z)
    pub blocked: [bool; 3],
    /// Контакты по проходам, у каждого `normal` задан
    pub contacts: Vec<SweepHit>,
    /// Сколько проходов выполнено
    pub passes: usize,
    /// Сколько блоков-кандидатов дала broad phase
    pub candidates: usize,
}

impl MoveOutcome {
    fn unchanged(position: Vec3) -> Self {
        Self {
            position,
            applied: Vec3::zero(),
            blocked: [false; 3],
            contacts: Vec::new(),
            passes: 0,
            candidates: 0,
        }
    }

    pub fn is_blocked(&self, axis: Axis) -> bool {
        self.blocked[axis.index()]
    }

    /// Был ли удар о грань `normal`
    pub fn touched(&self, normal: Normal) -> bool {
        self.contacts.iter().any(|hit| hit.normal == Some(normal))
    }
}

/// Решатель движения AABB через воксельную сетку
#[derive(Debug, Clone, Copy)]
pub struct MoveResolver {
    pub max_passes: usize,
    pub contact_skin: f32,
}

impl MoveResolver {
    pub fn new(max_passes: usize, contact_skin: f32) -> Self {
        Self { max_passes, contact_skin }
    }

    /// Сдвинуть бокс с размерами `extents` из `position` на `displacement`
    pub fn resolve<W>(
        &self,
        world: &W,
        position: Vec3,
        extents: BoxExtents,
        displacement: Vec3,
    ) -> MoveOutcome
    where
        W: VoxelQuery + ?Sized,
    {
        if !is_finite(position) || !is_finite(displacement) {
            log::warn!(
                "non-finite move skipped: position {:?}, displacement {:?}",
                position, displacement
            );
            return MoveOutcome::unchanged(position);
        }

        if displacement == Vec3::zero() {
            return MoveOutcome::unchanged(position);
        }

        let start = Aabb::from_position_and_extents(position, extents);
        let candidates = gather_candidates(world, &start, displacement);

        let mut outcome = MoveOutcome::unchanged(position);
        outcome.candidates = candidates.len();

        let mut remaining = displacement;

        for pass in 0..self.max_passes {
            outcome.passes = pass + 1;

            let moving = Aabb::from_position_and_extents(outcome.position, extents);
            let origin = moving.center();

            let nearest = candidates
                .iter()
                .map(|fixed| sweep_aabb(fixed, &moving, origin, remaining))
                .fold(SweepHit::MISS, |best, hit| if hit.time < best.time { hit } else { best });

            let mut applied = remaining * nearest.time;
            if let Some(normal) = nearest.normal {
                applied += normal.vector() * self.contact_skin;
            }

            outcome.position += applied;
            outcome.applied += applied;
            remaining -= applied;

            let Some(normal) = nearest.normal else {
                break;
            };

            outcome.contacts.push(nearest);

            let axis = normal.axis();
            if !normal.blocks(axis.of(remaining)) {
                break;
            }

            *axis.of_mut(&mut remaining) = 0.0;
            outcome.blocked[axis.index()] = true;

            log::debug!(
                "pass {}: hit {:?} at t = {:.6}, remaining {:?}",
                pass, normal, nearest.time, remaining
            );
        }

        outcome
    }

    /// Сдвинуть тело на `velocity * dt`, обнулив скорость по заблокированным осям
    pub fn move_body<W>(&self, world: &W, body: &mut Body, dt: f32) -> MoveOutcome
    where
        W: VoxelQuery + ?Sized,
    {
        let outcome = self.resolve(world, body.position, body.extents, body.velocity * dt);

        body.position = outcome.position;
        for axis in Axis::ALL {
            if outcome.is_blocked(axis) {
                *axis.of_mut(&mut body.velocity) = 0.0;
            }
        }
        body.on_ground = outcome.touched(Normal::Up);

        outcome
    }
}

impl Default for MoveResolver {
    fn default() -> Self {
        Self::new(MAX_PASSES, CONTACT_SKIN)
    }
}

fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
