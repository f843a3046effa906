// ============================================
// Player Entity - Физическая сущность игрока
// ============================================
// Хранит тело и направление взгляда, обрабатывает ввод.
// Z - вверх, yaw отсчитывается от +X в градусах.

use ultraviolet::Vec3;

use super::input::{InputState, MouseMove};
use crate::sim::core::SimConfig;
use crate::sim::entity::Body;
use crate::sim::physics::BoxExtents;

/// Высота глаз от ног
pub const EYE_HEIGHT: f32 = 1.5;

/// Ограничение наклона головы, градусы
pub const PITCH_LIMIT: f32 = 90.0;

/// Вектор ввода короче этого считается нулевым
const INPUT_EPSILON: f32 = 1e-7;

/// Игрок - физическая сущность в мире
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,

    /// Горизонтальный угол поворота (yaw), градусы
    pub yaw: f32,

    /// Вертикальный угол головы (pitch), градусы
    pub pitch: f32,
}

impl Player {
    pub fn new(position: Vec3, extents: BoxExtents) -> Self {
        Self {
            body: Body::new(position, extents),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Позиция глаз
    pub fn eye_position(&self) -> Vec3 {
        self.body.position + Vec3::new(0.0, 0.0, EYE_HEIGHT)
    }

    /// Горизонтальное направление вперёд
    pub fn forward_horizontal(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), yaw.sin(), 0.0)
    }

    /// Горизонтальный вектор вправо
    pub fn right_horizontal(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), -yaw.cos(), 0.0)
    }
}

/// Контроллер игрока - ввод в скорость
pub struct PlayerController {
    /// Состояние клавиш
    pub input: InputState,

    /// Градусов на единицу смещения мыши
    pub sensitivity: f32,

    ground_friction: f32,
    air_friction: f32,
    ground_acceleration: f32,
    air_acceleration: f32,
    jump_velocity: f32,
}

impl PlayerController {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            input: InputState::default(),
            sensitivity: config.mouse_sensitivity,
            ground_friction: config.ground_friction,
            air_friction: config.air_friction,
            ground_acceleration: config.ground_acceleration,
            air_acceleration: config.air_acceleration,
            jump_velocity: config.jump_velocity,
        }
    }

    /// Применить накопленные движения мыши, по порядку
    pub fn apply_look<I>(&self, player: &mut Player, moves: I)
    where
        I: IntoIterator<Item = MouseMove>,
    {
        for mv in moves {
            player.pitch += mv.dy as f32 * self.sensitivity;
            player.yaw -= mv.dx as f32 * self.sensitivity;
            player.pitch = player.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Нормализованное направление движения по клавишам
    pub fn wish_direction(&self, player: &Player) -> Vec3 {
        let forward = player.forward_horizontal();
        let right = player.right_horizontal();

        let mut dir = Vec3::zero();
        if self.input.forward { dir += forward; }
        if self.input.backward { dir -= forward; }
        if self.input.right { dir += right; }
        if self.input.left { dir -= right; }

        if dir.x.abs() > INPUT_EPSILON || dir.y.abs() > INPUT_EPSILON {
            dir.normalized()
        } else {
            Vec3::zero()
        }
    }

    /// Обновить горизонтальную скорость и прыжок
    pub fn update(&mut self, player: &mut Player, dt: f32) {
        let dir = self.wish_direction(player);
        let body = &mut player.body;

        let (friction, acceleration) = if body.on_ground {
            (self.ground_friction, self.ground_acceleration)
        } else {
            (self.air_friction, self.air_acceleration)
        };

        body.velocity.x = body.velocity.x * friction + dir.x * acceleration * dt;
        body.velocity.y = body.velocity.y * friction + dir.y * acceleration * dt;

        // Прыжок срабатывает один раз на нажатие
        if body.on_ground && self.input.jump {
            self.input.jump = false;
            body.velocity.z = self.jump_velocity;
            body.on_ground = false;
        }
    }
}
