//! Dragon Catch Engine - floating sprites with drag-and-drop capture in WASM
//!
//! Dragons drift around the viewport and bounce off its edges. Drag one onto
//! the capture box to take it out of play and score a point.
//!
//! Architecture:
//! - core/        - logging macros, injectable randomness
//! - domain/      - geometry, sprite state, configuration
//! - systems/     - kinematics, pointer drag, capture/score
//! - simulation/  - GameCore orchestration, scene boundary, JS facade
//! - api/         - DOM scene and browser boot (frame loop, listeners)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🐉 Dragon Catch WASM engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::boot::{start_game, GameHandle};
pub use api::dom::DomScene;
pub use crate::core::utils::random::{RandomSource, Xorshift32};
pub use domain::config::{DomConfig, GameConfig, StartPosition};
pub use domain::geometry::{overlaps, Rect, Vec2};
pub use domain::sprite::{Sprite, SpriteId};
pub use simulation::{
    BufferScene, DragonGame, FixedStepClock, FrameClock, GameCore, PerfStats, Scene, SceneTarget, WallClock,
};
pub use systems::drag::{DragState, DropOutcome};
