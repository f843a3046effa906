// ============================================
// Player Module - Игрок и ввод
// ============================================

mod player;
mod input;

pub use player::*;
pub use input::*;
