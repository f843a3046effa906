// ============================================
// Config - Настройки симуляции
// ============================================
// JSON-файл (serde), любое поле можно опустить - возьмётся значение
// по умолчанию. Путь: первый аргумент командной строки или VOXEL_SWEEP_CONFIG.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::physics::BoxExtents;
use crate::sim::terrain::TerrainParams;

/// Переменная окружения с путём к конфигу
pub const CONFIG_ENV_VAR: &str = "VOXEL_SWEEP_CONFIG";

/// Ошибки загрузки конфигурации
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Длина тика в секундах
    pub tick_seconds: f32,
    /// Сколько тиков крутить headless-прогон
    pub run_ticks: u64,

    // --- Физика ---
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_velocity: f32,
    /// Проходов разрешения коллизий на тик
    pub resolver_passes: usize,
    /// Отступ от грани после контакта
    pub contact_skin: f32,

    // --- Управление ---
    pub ground_friction: f32,
    pub air_friction: f32,
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    /// Градусов поворота на единицу смещения мыши
    pub mouse_sensitivity: f32,
    /// Ёмкость очереди движений мыши
    pub input_queue_capacity: usize,

    // --- Мир ---
    pub world_seed: u64,
    pub pillar_rarity: u32,
    pub max_pillar_height: u32,
    pub prop_count: usize,
    /// Ширина, глубина, высота хитбокса игрока
    pub player_extents: [f32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 0.05,
            run_ticks: 600,
            gravity: 28.0,
            terminal_velocity: 50.0,
            jump_velocity: 9.0,
            resolver_passes: 3,
            contact_skin: 0.0005,
            ground_friction: 0.85,
            air_friction: 0.95,
            ground_acceleration: 15.0,
            air_acceleration: 5.0,
            mouse_sensitivity: 0.3,
            input_queue_capacity: 1024,
            world_seed: 1,
            pillar_rarity: 15,
            max_pillar_height: 3,
            prop_count: 10,
            player_extents: [0.6, 0.6, 1.75],
        }
    }
}

impl SimConfig {
    /// Разобрать и проверить JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Загрузить из файла
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Путь из аргумента или переменной окружения; без пути - значения по умолчанию
    pub fn from_args_or_env() -> Result<Self, ConfigError> {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

        match path {
            Some(path) => {
                log::info!("Loading config from {}", path);
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_seconds > 0.0 && self.tick_seconds.is_finite()) {
            return Err(ConfigError::Invalid(format!("tick_seconds must be positive, got {}", self.tick_seconds)));
        }
        if self.resolver_passes == 0 {
            return Err(ConfigError::Invalid("resolver_passes must be at least 1".into()));
        }
        if self.input_queue_capacity == 0 {
            return Err(ConfigError::Invalid("input_queue_capacity must be at least 1".into()));
        }
        if self.player_extents.iter().any(|e| !(*e > 0.0 && e.is_finite())) {
            return Err(ConfigError::Invalid(format!("player_extents must be positive, got {:?}", self.player_extents)));
        }
        if self.contact_skin < 0.0 || !self.contact_skin.is_finite() {
            return Err(ConfigError::Invalid(format!("contact_skin must be non-negative, got {}", self.contact_skin)));
        }
        Ok(())
    }

    pub fn player_extents(&self) -> BoxExtents {
        let [width, depth, height] = self.player_extents;
        BoxExtents::new(width, depth, height)
    }

    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            seed: self.world_seed,
            pillar_rarity: self.pillar_rarity,
            max_pillar_height: self.max_pillar_height,
        }
    }
}
