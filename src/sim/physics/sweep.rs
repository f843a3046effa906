// ============================================
// Swept AABB - Время столкновения (slab test)
// ============================================
// Неподвижный бокс расширяется на полуразмеры движущегося,
// движущийся сводится к точке `origin`, летящей на `delta`.
// По каждой активной оси - интервал [t_near, t_far], итог - их пересечение.

use ultraviolet::Vec3;

use super::aabb::Aabb;
use super::normal::{Axis, Normal};

/// Компонента скорости меньше этого считается нулевой
pub const SWEEP_EPSILON: f32 = 1e-7;

/// Результат swept-теста: доля смещения до контакта и грань
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Время контакта в [0, 1]
    pub time: f32,
    /// Грань препятствия; `Some` тогда и только тогда, когда `time < 1.0`
    pub normal: Option<Normal>,
}

impl SweepHit {
    /// Столкновения в пределах смещения нет
    pub const MISS: SweepHit = SweepHit { time: 1.0, normal: None };

    pub fn is_hit(&self) -> bool {
        self.normal.is_some()
    }
}

/// Самый ранний контакт движущегося бокса с неподвижным.
///
/// `moving` - бокс в начале смещения, `origin` - его опорная точка
/// (берётся как есть, вызывающий может сдвинуть её), `delta` - смещение за тик.
/// При равных временах входа побеждает ось, обработанная позже (X, Y, Z).
pub fn sweep_aabb(fixed: &Aabb, moving: &Aabb, origin: Vec3, delta: Vec3) -> SweepHit {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis: Option<Axis> = None;

    for axis in Axis::ALL {
        let half = moving.half_extent(axis);
        let (min, max) = fixed.bounds(axis);
        let (lo, hi) = (min - half, max + half);
        let o = axis.of(origin);
        let d = axis.of(delta);

        if d.abs() < SWEEP_EPSILON {
            // Ось стоит: пересечение только если уже строго внутри
            if !(o > lo && o < hi) {
                return SweepHit::MISS;
            }
            continue;
        }

        let (near, far) = if d > 0.0 { (lo, hi) } else { (hi, lo) };
        let t_near = (near - o) / d;
        let t_far = (far - o) / d;

        if t_near >= t_enter {
            t_enter = t_near;
            enter_axis = Some(axis);
        }
        if t_far < t_exit {
            t_exit = t_far;
        }

        if t_enter >= t_exit {
            return SweepHit::MISS;
        }
    }

    let Some(axis) = enter_axis else {
        return SweepHit::MISS;
    };

    if t_enter >= 1.0 || t_exit <= 0.0 {
        return SweepHit::MISS;
    }

    SweepHit {
        time: t_enter.clamp(0.0, 1.0),
        normal: Some(Normal::facing(axis, axis.of(delta))),
    }
}
