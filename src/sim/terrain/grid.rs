// ============================================
// Voxel Grid - Плотная сетка твёрдых блоков
// ============================================
// Один бит на клетку (vob), линейная индексация через ndshape.
// Запрос за пределами сетки - всегда пусто, без паники.

use ndshape::{RuntimeShape, Shape};
use vob::Vob;

/// Минимальный угол мира по умолчанию (x, y, z)
pub const WORLD_MIN: [i32; 3] = [-128, -128, 0];

/// Размер мира по умолчанию в блоках
pub const WORLD_SIZE: [u32; 3] = [256, 256, 128];

/// Read-only запрос к миру: есть ли твёрдый блок в клетке.
///
/// Функция тотальная: любые `i32` допустимы, вне мира - `false`.
pub trait VoxelQuery {
    fn has_block(&self, x: i32, y: i32, z: i32) -> bool;

    /// Включительные границы клеток, вне которых блоков точно нет.
    /// `None` - мир без известных границ.
    fn bounds(&self) -> Option<([i32; 3], [i32; 3])> {
        None
    }
}

/// Любое замыкание `(x, y, z) -> bool` тоже годится как мир
impl<F> VoxelQuery for F
where
    F: Fn(i32, i32, i32) -> bool,
{
    fn has_block(&self, x: i32, y: i32, z: i32) -> bool {
        self(x, y, z)
    }
}

/// Плотная воксельная сетка
pub struct VoxelGrid {
    /// Мировая координата клетки с индексом [0, 0, 0]
    min: [i32; 3],
    shape: RuntimeShape<u32, 3>,
    blocks: Vob,
}

impl VoxelGrid {
    pub fn new(min: [i32; 3], size: [u32; 3]) -> Self {
        let shape = RuntimeShape::<u32, 3>::new(size);
        let mut blocks = Vob::new();
        blocks.resize(shape.usize(), false);
        Self { min, shape, blocks }
    }

    /// Сетка стандартного размера (256 x 256 x 128)
    pub fn with_default_bounds() -> Self {
        Self::new(WORLD_MIN, WORLD_SIZE)
    }

    pub fn min(&self) -> [i32; 3] {
        self.min
    }

    pub fn size(&self) -> [u32; 3] {
        self.shape.as_array()
    }

    /// Линейный индекс клетки или None если она вне сетки
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let size = self.shape.as_array();
        let local = [
            i64::from(x) - i64::from(self.min[0]),
            i64::from(y) - i64::from(self.min[1]),
            i64::from(z) - i64::from(self.min[2]),
        ];

        for axis in 0..3 {
            if local[axis] < 0 || local[axis] >= i64::from(size[axis]) {
                return None;
            }
        }

        let linear = self.shape.linearize([local[0] as u32, local[1] as u32, local[2] as u32]);
        Some(linear as usize)
    }

    /// Лежит ли клетка внутри сетки
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z).is_some()
    }

    /// Поставить блок. Возвращает false если клетка вне сетки.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32) -> bool {
        self.write(x, y, z, true)
    }

    /// Убрать блок. Возвращает false если клетка вне сетки.
    pub fn reset_block(&mut self, x: i32, y: i32, z: i32) -> bool {
        self.write(x, y, z, false)
    }

    fn write(&mut self, x: i32, y: i32, z: i32, solid: bool) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.blocks.set(i, solid);
                true
            }
            None => {
                log::trace!("write outside grid ignored: ({}, {}, {})", x, y, z);
                false
            }
        }
    }

    /// Количество твёрдых блоков
    pub fn solid_count(&self) -> usize {
        self.blocks.iter_set_bits(..).count()
    }
}

impl VoxelQuery for VoxelGrid {
    fn has_block(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z)
            .and_then(|i| self.blocks.get(i))
            .unwrap_or(false)
    }

    fn bounds(&self) -> Option<([i32; 3], [i32; 3])> {
        // Пустая сетка даёт max < min, то есть пустой диапазон
        let size = self.size();
        let max = [0, 1, 2].map(|i| {
            let last = i64::from(self.min[i]) + i64::from(size[i]) - 1;
            last.min(i64::from(i32::MAX)) as i32
        });
        Some((self.min, max))
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::with_default_bounds()
    }
}
