// ============================================
// Tick Counter - Фиксированный шаг симуляции
// ============================================

use std::time::{Duration, Instant};

/// Считает, сколько целых тиков прошло с прошлого вызова
#[derive(Debug, Clone)]
pub struct TickCounter {
    resolution: Duration,
    last_tick: Instant,
    ticks: u64,
}

impl TickCounter {
    pub fn new(resolution: Duration, now: Instant) -> Self {
        assert!(!resolution.is_zero(), "tick resolution must be non-zero");
        Self {
            resolution,
            last_tick: now,
            ticks: 0,
        }
    }

    /// Продвинуть счётчик до `now` целыми шагами. Возвращает число новых тиков.
    pub fn update(&mut self, now: Instant) -> u64 {
        let mut due = 0;
        while now.saturating_duration_since(self.last_tick) >= self.resolution {
            self.last_tick += self.resolution;
            due += 1;
        }
        self.ticks += due;
        due
    }

    /// Всего тиков
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Момент следующего тика
    pub fn next_tick_at(&self) -> Instant {
        self.last_tick + self.resolution
    }
}
