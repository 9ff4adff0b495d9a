//! Game configuration
//!
//! Every tunable lives here: kinematic constants, fixed start layout, stacking
//! orders and the DOM hooks the browser binding looks up. JS may pass a partial
//! JSON document; omitted fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Normalized start position as fractions of the viewport size
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct StartPosition {
    #[serde(rename = "pX")]
    pub p_x: f64,
    #[serde(rename = "pY")]
    pub p_y: f64,
}

impl StartPosition {
    pub const fn new(p_x: f64, p_y: f64) -> Self {
        Self { p_x, p_y }
    }
}

/// Top-left, bottom-right, bottom-left, top-right.
pub const DEFAULT_START_POSITIONS: [StartPosition; 4] = [
    StartPosition::new(0.15, 0.10),
    StartPosition::new(0.80, 0.85),
    StartPosition::new(0.10, 0.75),
    StartPosition::new(0.75, 0.20),
];

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Base speed range in pixels per nominal frame
    pub speed_min: f64,
    pub speed_max: f64,
    /// Converts per-frame speed units to per-second
    pub frames_per_second: f64,
    /// Spin is drawn from [-max, max) degrees per second
    pub rotation_speed_max: f64,
    pub start_positions: Vec<StartPosition>,
    /// Used per dimension when an element has not been laid out yet
    pub default_sprite_size: f64,
    pub drag_z_index: i32,
    pub rest_z_index: i32,
    pub captured_z_index: i32,
    pub dom: DomConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed_min: 1.0,
            speed_max: 3.0,
            frames_per_second: 60.0,
            rotation_speed_max: 30.0,
            start_positions: DEFAULT_START_POSITIONS.to_vec(),
            default_sprite_size: 50.0,
            drag_z_index: 100,
            rest_z_index: 0,
            captured_z_index: -1,
            dom: DomConfig::default(),
        }
    }
}

/// Element lookups and class names used by the browser binding
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomConfig {
    pub sprite_selector: String,
    pub score_id: String,
    pub capture_zone_id: String,
    pub instructions_id: String,
    pub close_instructions_id: String,
    pub dragging_class: String,
    pub captured_class: String,
    pub hidden_class: String,
    /// Score display `top` once the instructions panel is dismissed
    pub score_top_after_dismiss: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            sprite_selector: ".floating-dragon".to_string(),
            score_id: "score-display".to_string(),
            capture_zone_id: "capture-box".to_string(),
            instructions_id: "instructions".to_string(),
            close_instructions_id: "close-instructions".to_string(),
            dragging_class: "dragging".to_string(),
            captured_class: "captured".to_string(),
            hidden_class: "hidden".to_string(),
            score_top_after_dismiss: "20px".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.speed_min.is_finite() && self.speed_max.is_finite()) {
            return Err("speedMin and speedMax must be finite".to_string());
        }
        if self.speed_min < 0.0 || self.speed_min > self.speed_max {
            return Err(format!(
                "invalid speed range [{}, {})",
                self.speed_min, self.speed_max
            ));
        }
        if !(self.frames_per_second > 0.0) {
            return Err(format!("framesPerSecond must be positive, got {}", self.frames_per_second));
        }
        if !(self.rotation_speed_max >= 0.0) {
            return Err(format!(
                "rotationSpeedMax must be non-negative, got {}",
                self.rotation_speed_max
            ));
        }
        if !(self.default_sprite_size > 0.0) {
            return Err(format!(
                "defaultSpriteSize must be positive, got {}",
                self.default_sprite_size
            ));
        }
        for (i, p) in self.start_positions.iter().enumerate() {
            if !(0.0..=1.0).contains(&p.p_x) || !(0.0..=1.0).contains(&p.p_y) {
                return Err(format!("startPositions[{}] must lie within [0, 1]", i));
            }
        }
        Ok(())
    }

    /// Speed range scaled to pixels per second.
    pub fn speed_range_px_per_sec(&self) -> (f64, f64) {
        (
            self.speed_min * self.frames_per_second,
            self.speed_max * self.frames_per_second,
        )
    }
}
