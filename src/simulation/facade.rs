use wasm_bindgen::prelude::*;

use crate::core::utils::random::Xorshift32;
use crate::domain::config::GameConfig;
use crate::domain::geometry::{Rect, Vec2};
use crate::domain::sprite::SpriteId;
use crate::systems::drag::{DragState, DropOutcome};

use super::buffer_scene::{BufferScene, TRANSFORM_STRIDE};
use super::perf_stats::PerfStats;
use super::GameCore;

/// JS-driven game over an in-memory scene.
///
/// The host owns rendering and input: it calls `tick` from its frame callback,
/// forwards pointer events, and reads sprite transforms from the packed buffer
/// at `transforms_ptr()` (`TRANSFORM_STRIDE` f64 per sprite).
#[wasm_bindgen]
pub struct DragonGame {
    core: GameCore<BufferScene>,
}

impl DragonGame {
    /// Build a game over `sprite_sizes`, a flat `[w0, h0, w1, h1, ...]` list.
    /// An odd-length list is rejected rather than dropping the stray value.
    pub fn try_new(
        viewport_width: f64,
        viewport_height: f64,
        sprite_sizes: &[f64],
        seed: u32,
        config: GameConfig,
    ) -> Result<Self, String> {
        if sprite_sizes.len() % 2 != 0 {
            return Err(format!(
                "sprite_sizes must hold width/height pairs, got {} values",
                sprite_sizes.len()
            ));
        }
        let sizes: Vec<Vec2> = sprite_sizes
            .chunks_exact(2)
            .map(|wh| Vec2::new(wh[0], wh[1]))
            .collect();
        let scene = BufferScene::new(Rect::new(0.0, 0.0, viewport_width, viewport_height), &sizes);
        let mut rng = Xorshift32::new(seed);
        Ok(Self {
            core: GameCore::new(scene, config, &mut rng),
        })
    }

    pub fn core(&self) -> &GameCore<BufferScene> {
        &self.core
    }
}

#[wasm_bindgen]
impl DragonGame {
    /// `sprite_sizes` is a flat `[w0, h0, w1, h1, ...]` list, one pair per sprite.
    #[wasm_bindgen(constructor)]
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        sprite_sizes: &[f64],
        seed: u32,
    ) -> Result<DragonGame, JsValue> {
        Self::try_new(viewport_width, viewport_height, sprite_sizes, seed, GameConfig::default())
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        viewport_width: f64,
        viewport_height: f64,
        sprite_sizes: &[f64],
        seed: u32,
        config_json: &str,
    ) -> Result<DragonGame, JsValue> {
        GameConfig::from_json(config_json)
            .and_then(|config| Self::try_new(viewport_width, viewport_height, sprite_sizes, seed, config))
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.core.score() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> usize { self.core.sprite_count() }

    #[wasm_bindgen(getter)]
    pub fn captured_count(&self) -> usize { self.core.captured_count() }

    pub fn score_text(&self) -> String {
        self.core.scene().score_text().to_string()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Index of the sprite under the pointer, if any.
    pub fn active_drag(&self) -> Option<u32> {
        match self.core.drag_state() {
            DragState::Dragging(id) => Some(id.0),
            DragState::Idle => None,
        }
    }

    pub fn is_captured(&self, index: u32) -> bool {
        self.core
            .sprite(SpriteId(index))
            .map(|s| s.is_captured)
            .unwrap_or(false)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core
            .scene_mut()
            .set_viewport(Rect::new(0.0, 0.0, width, height));
    }

    pub fn set_capture_zone(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.core
            .scene_mut()
            .set_capture_zone(Some(Rect::new(left, top, width, height)));
    }

    pub fn clear_capture_zone(&mut self) {
        self.core.scene_mut().set_capture_zone(None);
    }

    /// Frame callback; `now_ms` is the frame timestamp. Returns dt in seconds.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        self.core.tick(now_ms)
    }

    pub fn reset_clock(&mut self) {
        self.core.reset_clock();
    }

    pub fn pointer_down(&mut self, index: u32, x: f64, y: f64) -> bool {
        self.core.pointer_down(SpriteId(index), Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.core.pointer_move(Vec2::new(x, y))
    }

    /// Returns true if the drop captured the sprite.
    pub fn pointer_up(&mut self) -> bool {
        matches!(self.core.pointer_up(), Some(DropOutcome::OnTarget(_)))
    }

    pub fn capture(&mut self, index: u32) -> bool {
        self.core.capture(SpriteId(index))
    }

    /// Get pointer to the packed transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f64 {
        self.core.scene().transforms().as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.scene().transforms().len()
    }

    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
