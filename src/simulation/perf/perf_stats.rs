use wasm_bindgen::prelude::*;

use crate::systems::kinematics::StepReport;

/// Snapshot of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) dt_ms: f64,
    pub(super) sprites_stepped: u32,
    pub(super) bounces: u32,
    pub(super) captured: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record(&mut self, step_ms: f64, dt: f64, report: StepReport, captured: u32, frame: u64) {
        self.step_ms = step_ms;
        self.dt_ms = dt * 1000.0;
        self.sprites_stepped = report.stepped;
        self.bounces = report.bounces;
        self.captured = captured;
        self.frame = frame;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn sprites_stepped(&self) -> u32 { self.sprites_stepped }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
    #[wasm_bindgen(getter)]
    pub fn captured(&self) -> u32 { self.captured }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
