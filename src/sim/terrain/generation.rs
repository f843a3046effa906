// ============================================
// Terrain Generation - Демо-мир для симуляции
// ============================================
// Пол на z = 0, редкие столбики по хешу, чистая точка спавна
// и фиксированная арка для проверки коллизий.

use super::grid::VoxelGrid;

/// Параметры генерации
#[derive(Debug, Clone, Copy)]
pub struct TerrainParams {
    /// Сид мира
    pub seed: u64,
    /// Шанс столбика в колонке: 1 из N
    pub pillar_rarity: u32,
    /// Максимальная высота столбика (в блоках над полом)
    pub max_pillar_height: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 0,
            pillar_rarity: 15,
            max_pillar_height: 3,
        }
    }
}

/// Hash3D возвращает значение в диапазоне 0.0..1.0
#[inline(always)]
pub fn hash3d(x: i32, y: i32, z: i32) -> f32 {
    let n = x.wrapping_mul(374761393)
        .wrapping_add(y.wrapping_mul(668265263))
        .wrapping_add(z.wrapping_mul(1274126177));
    let n = (n ^ (n >> 13)).wrapping_mul(1911520717);
    ((n as u32) as f32) / (u32::MAX as f32)
}

/// Заполнить сетку демо-террейном
pub fn generate_terrain(grid: &mut VoxelGrid, params: &TerrainParams) {
    let min = grid.min();
    let size = grid.size();
    let seed = (params.seed ^ (params.seed >> 32)) as i32;
    let rarity = params.pillar_rarity.max(1) as f32;

    for x in min[0]..min[0] + size[0] as i32 {
        for y in min[1]..min[1] + size[1] as i32 {
            grid.set_block(x, y, 0);

            if hash3d(x, y, seed) * rarity >= 1.0 {
                continue;
            }

            let roll = hash3d(x, y, seed.wrapping_add(1));
            let height = (roll * (params.max_pillar_height + 1) as f32) as i32;
            for z in 1..=height.min(params.max_pillar_height as i32) {
                grid.set_block(x, y, z);
            }
        }
    }

    // Спавн игрока
    for z in 1..=4 {
        grid.reset_block(0, 0, z);
    }

    place_arch(grid);

    log::info!(
        "Terrain generated: seed {}, {} solid blocks",
        params.seed,
        grid.solid_count()
    );
}

/// Две колонны высотой 4 с перемычкой и проёмом 1x2 посередине
fn place_arch(grid: &mut VoxelGrid) {
    for z in 1..=4 {
        grid.set_block(2, 2, z);
        grid.set_block(4, 2, z);
    }
    grid.set_block(3, 2, 1);
    grid.set_block(3, 2, 4);
    grid.reset_block(3, 2, 2);
    grid.reset_block(3, 2, 3);
}
