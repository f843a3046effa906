// ============================================
// Core Module - Основные компоненты и ресурсы
// ============================================

pub mod app;
mod resources;
mod config;
mod tick;

pub use app::App;
pub use resources::SimResources;
pub use config::{SimConfig, ConfigError, CONFIG_ENV_VAR};
pub use tick::TickCounter;
