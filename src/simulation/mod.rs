//! GameCore - one running game
//!
//! Owns every piece of mutable game state (sprites, score, the live drag
//! session, frame timing) and the scene it renders into. Orchestration only:
//! motion is in systems/kinematics, the drag state machine in systems/drag,
//! scoring in systems/capture.
//!
//! Everything runs on a single thread. Frame ticks and pointer events each
//! run to completion, so one call never observes a half-applied update from
//! another.

use crate::core::utils::random::RandomSource;
use crate::domain::config::GameConfig;
use crate::domain::geometry::Vec2;
use crate::domain::sprite::{Sprite, SpriteId};
use crate::systems::capture::ScoreBoard;
use crate::systems::drag::{DragController, DragState, DropOutcome};

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/scene.rs"]
mod scene;
#[path = "render/buffer_scene.rs"]
mod buffer_scene;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use buffer_scene::{BufferScene, SceneNode, FLAG_CAPTURED, FLAG_DRAGGING, TRANSFORM_STRIDE};
pub use facade::DragonGame;
pub use init::spawn_sprites;
pub use perf_stats::PerfStats;
pub use scene::{Scene, SceneTarget};
pub use step::{FixedStepClock, FrameClock, WallClock};

pub struct GameCore<S: Scene> {
    config: GameConfig,
    scene: S,
    sprites: Vec<Sprite>,
    drag: DragController,
    score: ScoreBoard,

    // Frame timing
    last_time_ms: Option<f64>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    perf_clock: Box<dyn FrameClock>,
}

impl<S: Scene> GameCore<S> {
    /// Place one sprite per scene element and publish the initial frame.
    pub fn new<R: RandomSource>(scene: S, config: GameConfig, rng: &mut R) -> Self {
        init::create_game_core(scene, config, rng)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.index())
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn captured_count(&self) -> usize {
        self.sprites.iter().filter(|s| s.is_captured).count()
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Clock used to time each step when perf metrics are on.
    pub fn set_perf_clock<C: FrameClock + 'static>(&mut self, clock: C) {
        settings::set_perf_clock(self, Box::new(clock));
    }

    /// Last frame's perf snapshot (zeros when perf is disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Forget the previous frame timestamp; the next tick moves nothing.
    pub fn reset_clock(&mut self) {
        settings::reset_clock(self);
    }

    /// Frame callback. `now_ms` comes from a monotonic clock.
    /// Returns the step size in seconds (0 on the first tick).
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        step::tick(self, now_ms)
    }

    /// Step free sprites by an explicit `dt` in seconds.
    pub fn advance(&mut self, dt: f64) {
        step::advance(self, dt);
    }

    /// Tick repeatedly from `clock` while `keep_running` says so.
    /// Returns the number of frames run.
    pub fn run<C, P>(&mut self, clock: &mut C, keep_running: P) -> u64
    where
        C: FrameClock,
        P: FnMut(&Self) -> bool,
    {
        step::run(self, clock, keep_running)
    }

    /// Pointer pressed over sprite `id`. Returns true if a drag started.
    pub fn pointer_down(&mut self, id: SpriteId, pointer: Vec2) -> bool {
        commands::pointer_down(self, id, pointer)
    }

    /// Pointer moved anywhere in the document. Returns true if a sprite moved.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        commands::pointer_move(self, pointer)
    }

    /// Pointer released. `None` when no drag was live.
    pub fn pointer_up(&mut self) -> Option<DropOutcome> {
        commands::pointer_up(self)
    }

    /// Capture sprite `id`. Returns false if it was already captured.
    pub fn capture(&mut self, id: SpriteId) -> bool {
        commands::capture(self, id)
    }

    fn commit_transform(&mut self, id: SpriteId) {
        if let Some(sprite) = self.sprites.get(id.index()) {
            self.scene.set_transform(id, sprite.pos, sprite.rotation);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
