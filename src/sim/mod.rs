// ============================================
// Sim Module - Воксельная симуляция
// ============================================
// Игрок и пропы двигаются под вводом и гравитацией,
// сталкиваясь с сеткой блоков (swept AABB)

pub mod terrain;
pub mod physics;
pub mod entity;
pub mod player;

pub mod core;
pub mod systems;

pub use self::core::app::run;
