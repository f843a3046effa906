// ============================================
// Body - Движущееся тело (игрок или проп)
// ============================================
// Позиция - центр основания хитбокса, Z вверх.
// AABB не кэшируется: строится заново при каждом запросе.

use ultraviolet::Vec3;

use crate::sim::physics::{Aabb, BoxExtents};

/// Хитбокс игрока: 0.6 x 0.6, рост 1.75
pub const PLAYER_EXTENTS: BoxExtents = BoxExtents { width: 0.6, depth: 0.6, height: 1.75 };

/// Хитбокс пропа
pub const PROP_EXTENTS: BoxExtents = BoxExtents { width: 0.6, depth: 0.6, height: 1.75 };

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Позиция ног (нижняя точка хитбокса)
    pub position: Vec3,
    /// Скорость, единиц в секунду
    pub velocity: Vec3,
    /// Размеры хитбокса
    pub extents: BoxExtents,
    /// Стоит ли на блоке (по итогам последнего тика)
    pub on_ground: bool,
}

impl Body {
    pub fn new(position: Vec3, extents: BoxExtents) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            extents,
            on_ground: false,
        }
    }

    /// Мировой AABB в текущей позиции
    pub fn aabb(&self) -> Aabb {
        Aabb::from_position_and_extents(self.position, self.extents)
    }

    pub fn is_finite(&self) -> bool {
        let p = self.position;
        let v = self.velocity;
        [p.x, p.y, p.z, v.x, v.y, v.z].iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_follows_position() {
        let mut body = Body::new(Vec3::new(0.0, 0.0, 1.0), PLAYER_EXTENTS);
        let before = body.aabb();
        assert_eq!(before.min_z, 1.0);
        assert_eq!(before.max_z, 2.75);

        body.position.z = 3.0;
        let after = body.aabb();
        assert_eq!(after.min_z, 3.0);
        assert_eq!(after.max_z, 4.75);
    }

    #[test]
    fn test_finite_check() {
        let mut body = Body::new(Vec3::zero(), PROP_EXTENTS);
        assert!(body.is_finite());
        body.velocity.y = f32::NAN;
        assert!(!body.is_finite());
    }
}
