// ============================================
// AABB - Axis-aligned bounding box
// ============================================
// Неизменяемый: expand/translated возвращают новый бокс

use ultraviolet::Vec3;

use super::normal::Axis;

/// Размеры хитбокса сущности
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxExtents {
    /// Ширина по X
    pub width: f32,
    /// Глубина по Y
    pub depth: f32,
    /// Высота по Z (вверх от позиции)
    pub height: f32,
}

impl BoxExtents {
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self { width, depth, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub max_z: f32,
}

impl Aabb {
    /// Паникует если min > max по любой оси: это ошибка вызывающего кода
    pub fn new(min_x: f32, min_y: f32, min_z: f32, max_x: f32, max_y: f32, max_z: f32) -> Self {
        assert!(
            min_x <= max_x && min_y <= max_y && min_z <= max_z,
            "invalid AABB: min ({}, {}, {}) > max ({}, {}, {})",
            min_x, min_y, min_z, max_x, max_y, max_z
        );
        Self { min_x, min_y, min_z, max_x, max_y, max_z }
    }

    /// Бокс сущности: X/Y по центру позиции, Z от ног вверх на height
    pub fn from_position_and_extents(position: Vec3, extents: BoxExtents) -> Self {
        Self::new(
            position.x - extents.width * 0.5,
            position.y - extents.depth * 0.5,
            position.z,
            position.x + extents.width * 0.5,
            position.y + extents.depth * 0.5,
            position.z + extents.height,
        )
    }

    /// Единичный куб клетки (x, y, z)
    pub fn unit_cell(x: i32, y: i32, z: i32) -> Self {
        let (x, y, z) = (x as f32, y as f32, z as f32);
        Self::new(x, y, z, x + 1.0, y + 1.0, z + 1.0)
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(self.min_x, self.min_y, self.min_z)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.max_x, self.max_y, self.max_z)
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    pub fn half_width(&self) -> f32 {
        (self.max_x - self.min_x) * 0.5
    }

    pub fn half_depth(&self) -> f32 {
        (self.max_y - self.min_y) * 0.5
    }

    pub fn half_height(&self) -> f32 {
        (self.max_z - self.min_z) * 0.5
    }

    pub fn half_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.half_width(),
            Axis::Y => self.half_depth(),
            Axis::Z => self.half_height(),
        }
    }

    /// Границы (min, max) по оси
    pub fn bounds(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
            Axis::Z => (self.min_z, self.max_z),
        }
    }

    /// Растянуть бокс в сторону движения. Противоположная сторона не меняется,
    /// нулевая дельта оставляет ось как есть.
    pub fn expand(&self, dx: f32, dy: f32, dz: f32) -> Self {
        let mut out = *self;

        if dx > 0.0 {
            out.max_x += dx;
        } else if dx < 0.0 {
            out.min_x += dx;
        }

        if dy > 0.0 {
            out.max_y += dy;
        } else if dy < 0.0 {
            out.min_y += dy;
        }

        if dz > 0.0 {
            out.max_z += dz;
        } else if dz < 0.0 {
            out.min_z += dz;
        }

        out
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            min_z: self.min_z + offset.z,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
            max_z: self.max_z + offset.z,
        }
    }

    /// Строгое пересечение: касание гранями - не пересечение
    pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
        a.max_x > b.min_x && a.min_x < b.max_x &&
            a.max_y > b.min_y && a.min_y < b.max_y &&
            a.max_z > b.min_z && a.min_z < b.max_z
    }

    pub fn is_finite(&self) -> bool {
        [self.min_x, self.min_y, self.min_z, self.max_x, self.max_y, self.max_z]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn unit() -> Aabb {
        Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_intersects_if_inside() {
        let outer = unit();
        let inner = Aabb::new(0.2, 0.2, 0.2, 0.8, 0.8, 0.8);
        assert!(Aabb::intersects(&outer, &inner));
        assert!(Aabb::intersects(&inner, &outer));
    }

    #[test]
    fn test_intersects_if_disjoint() {
        let first = unit();
        let second = Aabb::new(0.0, 2.0, 0.0, 1.0, 3.0, 1.0);
        assert!(!Aabb::intersects(&first, &second));
        assert!(!Aabb::intersects(&second, &first));
    }

    #[test]
    fn test_intersects_overlapping() {
        let first = unit();
        let second = Aabb::new(0.0, 0.5, 0.0, 1.0, 1.5, 1.0);
        assert!(Aabb::intersects(&first, &second));
        assert!(Aabb::intersects(&second, &first));
    }

    #[test]
    fn test_touching_is_not_intersecting() {
        let first = unit();
        let touching = [
            Aabb::new(0.0, 1.0, 0.0, 1.0, 2.0, 1.0),
            Aabb::new(1.0, 0.0, 0.0, 2.0, 1.0, 1.0),
            Aabb::new(1.0, 1.0, 0.0, 2.0, 2.0, 1.0),
            Aabb::new(0.0, 0.0, 1.0, 1.0, 1.0, 2.0),
        ];
        for second in touching {
            assert!(!Aabb::intersects(&first, &second));
            assert!(!Aabb::intersects(&second, &first));
        }
    }

    #[test]
    fn test_intersects_if_same() {
        let first = unit();
        assert!(Aabb::intersects(&first, &first));
    }

    #[test]
    fn test_intersects_symmetric_grid() {
        let base = Aabb::new(-0.5, -0.5, -0.5, 0.5, 0.5, 0.5);
        for i in -4..=4 {
            for j in -4..=4 {
                let offset = Vec3::new(i as f32 * 0.25, j as f32 * 0.3, (i - j) as f32 * 0.2);
                let other = base.translated(offset);
                assert_eq!(Aabb::intersects(&base, &other), Aabb::intersects(&other, &base));
            }
        }
    }

    #[test]
    fn test_expand_positive() {
        let subject = unit().expand(0.2, 0.2, 0.2);
        assert!((subject.min_x - 0.0).abs() < EPS);
        assert!((subject.min_y - 0.0).abs() < EPS);
        assert!((subject.min_z - 0.0).abs() < EPS);
        assert!((subject.max_x - 1.2).abs() < EPS);
        assert!((subject.max_y - 1.2).abs() < EPS);
        assert!((subject.max_z - 1.2).abs() < EPS);
    }

    #[test]
    fn test_expand_negative() {
        let subject = unit().expand(-0.2, -0.2, -0.2);
        assert!((subject.min_x + 0.2).abs() < EPS);
        assert!((subject.min_y + 0.2).abs() < EPS);
        assert!((subject.min_z + 0.2).abs() < EPS);
        assert!((subject.max_x - 1.0).abs() < EPS);
        assert!((subject.max_y - 1.0).abs() < EPS);
        assert!((subject.max_z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_expand_single_axis() {
        let base = unit();
        let grown = base.expand(0.7, 0.0, 0.0);
        assert!((grown.max_x - 1.7).abs() < EPS);
        assert_eq!(grown.min_x, base.min_x);
        assert_eq!(grown.min_y, base.min_y);
        assert_eq!(grown.min_z, base.min_z);
        assert_eq!(grown.max_y, base.max_y);
        assert_eq!(grown.max_z, base.max_z);

        let grown = base.expand(-0.7, 0.0, 0.0);
        assert!((grown.min_x + 0.7).abs() < EPS);
        assert_eq!(grown.max_x, base.max_x);
        assert_eq!(grown.max_y, base.max_y);

        assert_eq!(base.expand(0.0, 0.0, 0.0), base);
    }

    #[test]
    fn test_from_position_and_extents() {
        let aabb = Aabb::from_position_and_extents(
            Vec3::new(1.5, 2.5, 1.0),
            BoxExtents::new(0.6, 0.6, 1.75),
        );
        assert!((aabb.min_x - 1.2).abs() < EPS);
        assert!((aabb.max_x - 1.8).abs() < EPS);
        assert!((aabb.min_y - 2.2).abs() < EPS);
        assert!((aabb.max_y - 2.8).abs() < EPS);
        assert_eq!(aabb.min_z, 1.0);
        assert_eq!(aabb.max_z, 2.75);
        assert!((aabb.half_width() - 0.3).abs() < EPS);
        assert!((aabb.half_depth() - 0.3).abs() < EPS);
        assert!((aabb.half_height() - 0.875).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "invalid AABB")]
    fn test_inverted_box_panics() {
        let _ = Aabb::new(1.0, 0.0, 0.0, 0.0, 1.0, 1.0);
    }
}
