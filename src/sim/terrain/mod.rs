// ============================================
// Terrain Module - Сетка блоков мира
// ============================================

pub mod grid;
pub mod generation;

pub use grid::{VoxelGrid, VoxelQuery, WORLD_MIN, WORLD_SIZE};
pub use generation::{generate_terrain, hash3d, TerrainParams};
