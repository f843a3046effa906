// ============================================
// Physics Module - Непрерывные коллизии с вокселями
// ============================================
// broad phase -> swept AABB (slab) -> скольжение по осям

mod aabb;
mod normal;
mod broad_phase;
mod sweep;
mod resolver;

pub use aabb::{Aabb, BoxExtents};
pub use normal::{Axis, Normal};
pub use broad_phase::gather_candidates;
pub use sweep::{sweep_aabb, SweepHit, SWEEP_EPSILON};
pub use resolver::{MoveOutcome, MoveResolver, CONTACT_SKIN, MAX_PASSES};
