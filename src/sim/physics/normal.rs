// ============================================
// Normal - Грань блока, в которую врезались
// ============================================

use ultraviolet::Vec3;

/// Ось координат (Z - вверх)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Компонента вектора по этой оси
    #[inline]
    pub fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Ссылка на компоненту для записи
    #[inline]
    pub fn of_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Нормаль грани вокселя. Закрытое перечисление, из произвольного
/// вектора не строится.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normal {
    Up,
    Down,
    North,
    South,
    West,
    East,
}

impl Normal {
    pub const ALL: [Normal; 6] = [
        Normal::Up,
        Normal::Down,
        Normal::North,
        Normal::South,
        Normal::West,
        Normal::East,
    ];

    /// Единичный вектор нормали
    pub fn vector(self) -> Vec3 {
        match self {
            Normal::Up => Vec3::new(0.0, 0.0, 1.0),
            Normal::Down => Vec3::new(0.0, 0.0, -1.0),
            Normal::North => Vec3::new(0.0, 1.0, 0.0),
            Normal::South => Vec3::new(0.0, -1.0, 0.0),
            Normal::West => Vec3::new(-1.0, 0.0, 0.0),
            Normal::East => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Normal::Up | Normal::Down => Axis::Z,
            Normal::North | Normal::South => Axis::Y,
            Normal::West | Normal::East => Axis::X,
        }
    }

    /// Грань, к которой приближаемся при движении по оси со знаком `delta`.
    /// Движение в +X упирается в западную грань препятствия.
    pub fn facing(axis: Axis, delta: f32) -> Normal {
        let positive = delta > 0.0;
        match axis {
            Axis::X => if positive { Normal::West } else { Normal::East },
            Axis::Y => if positive { Normal::South } else { Normal::North },
            Axis::Z => if positive { Normal::Down } else { Normal::Up },
        }
    }

    /// Блокирует ли эта грань движение с компонентой `component` по её оси
    pub fn blocks(self, component: f32) -> bool {
        let n = self.axis().of(self.vector());
        component * n < 0.0
    }
}
