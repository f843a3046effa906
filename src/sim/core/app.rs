// ============================================
// App - Главный цикл симуляции
// ============================================
// Окна нет: клавиши задаёт скриптовый пилот, мышь кормит
// отдельный поток через ограниченную очередь.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::sim::core::{SimConfig, SimResources};
use crate::sim::player::{InputState, MouseSender};
use crate::sim::systems::{InitSystem, TickReport, UpdateSystem};

/// Как часто писать статус игрока, в тиках
const STATUS_INTERVAL: u64 = 20;

/// Больше тиков за один проход цикла не догоняем
const MAX_CATCH_UP: u64 = 5;

/// Пауза потока мыши между движениями
const MOUSE_FEED_INTERVAL: Duration = Duration::from_millis(10);

/// Главное приложение
pub struct App {
    resources: SimResources,
}

impl App {
    pub fn new(config: SimConfig) -> (Self, MouseSender) {
        let (resources, mouse_tx) = InitSystem::create_resources(config);
        (Self { resources }, mouse_tx)
    }

    pub fn resources(&self) -> &SimResources {
        &self.resources
    }

    /// Один тик: скриптовые клавиши, затем обновление мира
    pub fn tick(&mut self) -> TickReport {
        let next = self.resources.tick + 1;
        let jump_pending = self.resources.player_controller.input.jump;
        let mut keys = scripted_keys(next);
        // Прыжок держится, пока контроллер его не израсходует
        keys.jump |= jump_pending;
        self.resources.player_controller.input = keys;

        let report = UpdateSystem::update(&mut self.resources);

        if report.tick % STATUS_INTERVAL == 0 {
            let player = &self.resources.player;
            let body = &player.body;
            let eye = player.eye_position();
            log::info!(
                "tick {}: eye at ({:.2}, {:.2}, {:.2}), velocity ({:.2}, {:.2}, {:.2}), on_ground {}, yaw {:.1}",
                report.tick,
                eye.x,
                eye.y,
                eye.z,
                body.velocity.x,
                body.velocity.y,
                body.velocity.z,
                body.on_ground,
                player.yaw
            );
        }

        report
    }

    /// Крутить тики с фиксированным шагом до `run_ticks`
    pub fn run_to_end(&mut self) {
        let target = self.resources.config.run_ticks;

        while self.resources.tick < target {
            let due = self.resources.tick_counter.update(Instant::now());
            if due > MAX_CATCH_UP {
                log::debug!("Falling behind: skipping {} ticks", due - MAX_CATCH_UP);
            }

            for _ in 0..due.min(MAX_CATCH_UP) {
                if self.resources.tick >= target {
                    break;
                }
                self.tick();
            }

            let wait = self
                .resources
                .tick_counter
                .next_tick_at()
                .saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
    }
}

/// Клавиши пилота: идём вперёд, периодически прыгаем и уходим вбок
pub fn scripted_keys(tick: u64) -> InputState {
    let phase = tick % 200;
    InputState {
        forward: phase < 150,
        backward: phase >= 150,
        left: (60..100).contains(&phase),
        right: (100..140).contains(&phase),
        jump: tick % 40 == 0,
    }
}

/// Поток мыши: медленно поворачивает взгляд, пока не поднят флаг
fn spawn_mouse_feeder(
    mouse_tx: MouseSender,
    stop: Arc<AtomicBool>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("mouse-input".into())
        .spawn(move || {
            let mut step: u32 = 0;
            while !stop.load(Ordering::Relaxed) {
                let dx = if (step / 100) % 2 == 0 { 1.0 } else { -1.0 };
                mouse_tx.push(dx, 0.0);
                step = step.wrapping_add(1);
                thread::sleep(MOUSE_FEED_INTERVAL);
            }
        })
}

pub fn run() {
    env_logger::init();

    let config = match SimConfig::from_args_or_env() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {}, using defaults", e);
            SimConfig::default()
        }
    };
    log::info!(
        "Running {} ticks of {}s, seed {}",
        config.run_ticks,
        config.tick_seconds,
        config.world_seed
    );

    let (mut app, mouse_tx) = App::new(config);

    let stop = Arc::new(AtomicBool::new(false));
    let feeder = match spawn_mouse_feeder(mouse_tx, stop.clone()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Failed to spawn mouse thread: {}", e);
            None
        }
    };

    app.run_to_end();

    stop.store(true, Ordering::Relaxed);
    if let Some(handle) = feeder {
        if handle.join().is_err() {
            log::warn!("Mouse thread panicked");
        }
    }

    let res = app.resources();
    log::info!(
        "Finished {} ticks in {:.2}s, player at {:?}",
        res.tick,
        res.start_time.elapsed().as_secs_f32(),
        res.player.body.position
    );
}
