use std::f64::consts::TAU;

use crate::core::utils::random::RandomSource;
use crate::domain::config::{GameConfig, StartPosition};
use crate::domain::geometry::Vec2;
use crate::domain::sprite::{Sprite, SpriteId};
use crate::systems::capture::ScoreBoard;
use crate::systems::drag::DragController;

use super::perf_stats::PerfStats;
use super::scene::Scene;
use super::step::WallClock;
use super::GameCore;

pub(super) fn create_game_core<S: Scene, R: RandomSource>(
    scene: S,
    config: GameConfig,
    rng: &mut R,
) -> GameCore<S> {
    let sprites = spawn_sprites(&scene, &config, rng);
    let mut core = GameCore {
        config,
        scene,
        sprites,
        drag: DragController::new(),
        score: ScoreBoard::new(),
        last_time_ms: None,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        perf_clock: Box::new(WallClock::new()),
    };

    let label = core.score.label();
    core.scene.set_score_text(&label);
    console_log!("Updating score display to: {}", core.score.score());

    for sprite in &core.sprites {
        core.scene.set_transform(sprite.id, sprite.pos, sprite.rotation);
    }
    console_log!("Dragons initialized: {}", core.sprites.len());

    core
}

/// Build the starting state for every sprite element in `scene`.
///
/// The first `config.start_positions.len()` sprites use the fixed layout, the
/// rest get a random spot. Random draws happen in a fixed order per sprite
/// (position if needed, speed, heading, rotation, spin) so a seeded source
/// reproduces the same layout.
pub fn spawn_sprites<S, R>(scene: &S, config: &GameConfig, rng: &mut R) -> Vec<Sprite>
where
    S: Scene + ?Sized,
    R: RandomSource + ?Sized,
{
    let viewport = scene.viewport();
    let (speed_min, speed_max) = config.speed_range_px_per_sec();
    let count = scene.sprite_count();
    let mut sprites = Vec::with_capacity(count);

    for index in 0..count {
        let id = SpriteId(index as u32);
        let start = match config.start_positions.get(index) {
            Some(p) => *p,
            None => {
                let p_x = rng.next_f64();
                let p_y = rng.next_f64();
                StartPosition::new(p_x, p_y)
            }
        };
        let pos = Vec2::new(viewport.width * start.p_x, viewport.height * start.p_y);

        let measured = scene.measure(id).unwrap_or_default();
        let size = Vec2::new(
            or_default_size(measured.x, config.default_sprite_size),
            or_default_size(measured.y, config.default_sprite_size),
        );

        let speed = rng.range(speed_min, speed_max);
        let angle = rng.next_f64() * TAU;
        let rotation = rng.next_f64() * 360.0;
        let rotate_speed = rng.range(-config.rotation_speed_max, config.rotation_speed_max);

        let mut sprite = Sprite::new(id, pos, size);
        sprite.velocity = Vec2::from_polar(angle, speed);
        sprite.rotation = rotation;
        sprite.rotate_speed = rotate_speed;
        sprites.push(sprite);
    }

    sprites
}

#[inline]
fn or_default_size(measured: f64, fallback: f64) -> f64 {
    if measured > 0.0 {
        measured
    } else {
        fallback
    }
}
