// ============================================
// Entity Module - Физические тела
// ============================================

mod body;

pub use body::{Body, PLAYER_EXTENTS, PROP_EXTENTS};
