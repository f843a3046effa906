// ============================================
// Systems Module - ECS-подобные системы
// ============================================

mod input_system;
mod gravity_system;
mod move_system;
mod update_system;
mod init_system;

pub use input_system::InputSystem;
pub use gravity_system::GravitySystem;
pub use move_system::MoveSystem;
pub use update_system::{UpdateSystem, TickReport};
pub use init_system::InitSystem;
