use crate::systems::kinematics;

use super::scene::Scene;
use super::GameCore;

/// Monotonic millisecond clock driving [`GameCore::run`].
pub trait FrameClock {
    fn now_ms(&mut self) -> f64;
}

/// Clock that advances by a fixed amount on every read.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    now_ms: f64,
    step_ms: f64,
}

impl FixedStepClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self { now_ms: start_ms, step_ms }
    }

    /// 60 Hz display refresh starting at t=0.
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }
}

impl FrameClock for FixedStepClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        now
    }
}

/// Real time in milliseconds. `Date.now()` in the browser, where
/// `std::time::Instant` is unavailable; elapsed time since construction
/// natively.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for WallClock {
    fn now_ms(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

pub(super) fn tick<S: Scene>(core: &mut GameCore<S>, now_ms: f64) -> f64 {
    // No previous timestamp on the first frame: step by zero instead of
    // jumping by the time since page load.
    let dt = match core.last_time_ms {
        Some(last) => ((now_ms - last) / 1000.0).max(0.0),
        None => 0.0,
    };
    core.last_time_ms = Some(now_ms);
    advance(core, dt);
    dt
}

pub(super) fn advance<S: Scene>(core: &mut GameCore<S>, dt: f64) {
    let started_ms = if core.perf_enabled { Some(core.perf_clock.now_ms()) } else { None };

    let viewport = core.scene.viewport();
    let report = kinematics::step(&mut core.sprites, dt, &viewport);

    for sprite in core.sprites.iter().filter(|s| s.is_free()) {
        core.scene.set_transform(sprite.id, sprite.pos, sprite.rotation);
    }
    core.frame += 1;

    if let Some(started_ms) = started_ms {
        let step_ms = core.perf_clock.now_ms() - started_ms;
        let captured = core.sprites.iter().filter(|s| s.is_captured).count() as u32;
        let frame = core.frame;
        core.perf_stats.record(step_ms, dt, report, captured, frame);
    }
}

pub(super) fn run<S, C, P>(core: &mut GameCore<S>, clock: &mut C, mut keep_running: P) -> u64
where
    S: Scene,
    C: FrameClock,
    P: FnMut(&GameCore<S>) -> bool,
{
    let mut frames = 0;
    while keep_running(&*core) {
        let now = clock.now_ms();
        tick(core, now);
        frames += 1;
    }
    frames
}
