// ============================================
// Broad Phase - Кандидаты-блоки для swept AABB
// ============================================
// Объём заметания = бокс, растянутый на смещение за тик.
// Лишние клетки допустимы, пропущенные - нет.

use ultraviolet::Vec3;

use super::aabb::Aabb;
use crate::sim::terrain::VoxelQuery;

/// Собрать AABB всех твёрдых клеток, которых бокс может коснуться
/// при движении на `displacement`
pub fn gather_candidates<W>(world: &W, moving: &Aabb, displacement: Vec3) -> Vec<Aabb>
where
    W: VoxelQuery + ?Sized,
{
    let finite_delta = displacement.x.is_finite()
        && displacement.y.is_finite()
        && displacement.z.is_finite();
    let swept = moving.expand(displacement.x, displacement.y, displacement.z);

    if !finite_delta || !swept.is_finite() {
        log::warn!("non-finite sweep {:?} + {:?}, no candidates", moving, displacement);
        return Vec::new();
    }

    let mut min_x = swept.min_x.floor() as i32;
    let mut min_y = swept.min_y.floor() as i32;
    let mut min_z = swept.min_z.floor() as i32;
    let mut max_x = swept.max_x.floor() as i32;
    let mut max_y = swept.max_y.floor() as i32;
    let mut max_z = swept.max_z.floor() as i32;

    // За границами мира блоков нет, перебираем только пересечение
    if let Some((lo, hi)) = world.bounds() {
        min_x = min_x.max(lo[0]);
        min_y = min_y.max(lo[1]);
        min_z = min_z.max(lo[2]);
        max_x = max_x.min(hi[0]);
        max_y = max_y.min(hi[1]);
        max_z = max_z.min(hi[2]);
    }

    if min_x > max_x || min_y > max_y || min_z > max_z {
        return Vec::new();
    }

    let mut candidates = Vec::new();

    for z in min_z..=max_z {
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if world.has_block(x, y, z) {
                    candidates.push(Aabb::unit_cell(x, y, z));
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::BoxExtents;
    use crate::sim::terrain::VoxelGrid;
    use std::cell::Cell;

    fn body_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::from_position_and_extents(Vec3::new(x, y, z), BoxExtents::new(0.6, 0.6, 0.5))
    }

    #[test]
    fn test_finds_block_in_path() {
        let mut grid = VoxelGrid::new([-8, -8, 0], [16, 16, 8]);
        grid.set_block(2, 2, 1);

        let found = gather_candidates(&grid, &body_at(1.5, 2.5, 1.2), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(found, vec![Aabb::unit_cell(2, 2, 1)]);
    }

    #[test]
    fn test_ignores_block_behind() {
        let mut grid = VoxelGrid::new([-8, -8, 0], [16, 16, 8]);
        grid.set_block(-1, 2, 1);

        let found = gather_candidates(&grid, &body_at(1.5, 2.5, 1.2), Vec3::new(1.0, 0.0, 0.0));
        assert!(found.is_empty());
    }

    #[test]
    fn test_fast_sweep_covers_whole_path() {
        // Смещение на 5 блоков за тик: все клетки на пути должны попасть
        let world = |_x: i32, y: i32, z: i32| y == 2 && z == 1;
        let found = gather_candidates(&world, &body_at(0.5, 2.5, 1.2), Vec3::new(5.0, 0.0, 0.0));

        for x in 0..=5 {
            assert!(found.contains(&Aabb::unit_cell(x, 2, 1)), "missing cell x = {}", x);
        }
    }

    #[test]
    fn test_negative_sweep_uses_floor() {
        let world = |x: i32, y: i32, z: i32| x == -2 && y == 0 && z == 0;
        let found = gather_candidates(&world, &body_at(0.0, 0.5, 0.2), Vec3::new(-1.5, 0.0, 0.0));
        assert_eq!(found, vec![Aabb::unit_cell(-2, 0, 0)]);
    }

    #[test]
    fn test_never_misses_touched_cell() {
        // Перебор: каждая клетка, которую пересекает объём заметания, должна быть найдена
        let moving = body_at(0.3, -0.7, 1.1);
        let displacement = Vec3::new(1.3, -0.9, -0.6);
        let swept = moving.expand(displacement.x, displacement.y, displacement.z);
        let solid = |_x: i32, _y: i32, _z: i32| true;
        let found = gather_candidates(&solid, &moving, displacement);

        for x in -4..4 {
            for y in -4..4 {
                for z in -4..4 {
                    let cell = Aabb::unit_cell(x, y, z);
                    if Aabb::intersects(&cell, &swept) {
                        assert!(found.contains(&cell), "missing ({}, {}, {})", x, y, z);
                    }
                }
            }
        }
    }

    #[test]
    fn test_non_finite_sweep_is_empty() {
        let solid = |_x: i32, _y: i32, _z: i32| true;
        let found = gather_candidates(&solid, &body_at(0.0, 0.0, 0.0), Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(found.is_empty());

        let found = gather_candidates(&solid, &body_at(0.0, 0.0, 0.0), Vec3::new(0.0, f32::INFINITY, 0.0));
        assert!(found.is_empty());
    }

    /// Сетка, считающая запросы
    struct CountingGrid {
        grid: VoxelGrid,
        queries: Cell<usize>,
    }

    impl VoxelQuery for CountingGrid {
        fn has_block(&self, x: i32, y: i32, z: i32) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.grid.has_block(x, y, z)
        }

        fn bounds(&self) -> Option<([i32; 3], [i32; 3])> {
            self.grid.bounds()
        }
    }

    #[test]
    fn test_long_sweep_clamped_to_grid() {
        let mut grid = VoxelGrid::new([0, 0, 0], [4, 4, 4]);
        grid.set_block(3, 3, 3);
        let world = CountingGrid { grid, queries: Cell::new(0) };

        let found = gather_candidates(&world, &body_at(0.5, 0.5, 1.0), Vec3::new(200.0, 200.0, 200.0));

        assert_eq!(found, vec![Aabb::unit_cell(3, 3, 3)]);
        assert!(world.queries.get() <= 4 * 4 * 4, "queries: {}", world.queries.get());
    }

    #[test]
    fn test_sweep_outside_grid_queries_nothing() {
        let grid = VoxelGrid::new([0, 0, 0], [4, 4, 4]);
        let world = CountingGrid { grid, queries: Cell::new(0) };

        let found = gather_candidates(&world, &body_at(100.5, 100.5, 50.0), Vec3::new(-30.0, 0.0, 0.0));

        assert!(found.is_empty());
        assert_eq!(world.queries.get(), 0);
    }
}
