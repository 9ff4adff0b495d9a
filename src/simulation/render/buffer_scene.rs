use crate::domain::geometry::{Rect, Vec2};
use crate::domain::sprite::SpriteId;

use super::scene::{Scene, SceneTarget};

/// f64 slots per sprite in the transform buffer: x, y, rotation, z, flags
pub const TRANSFORM_STRIDE: usize = 5;

pub const FLAG_DRAGGING: u32 = 1 << 0;
pub const FLAG_CAPTURED: u32 = 1 << 1;

/// Headless stand-in for one sprite element
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub size: Vec2,
    pub pos: Vec2,
    pub rotation: f64,
    pub z_index: i32,
    pub dragging: bool,
    pub captured: bool,
}

impl SceneNode {
    fn new(size: Vec2) -> Self {
        Self {
            size,
            pos: Vec2::zero(),
            rotation: 0.0,
            z_index: 0,
            dragging: false,
            captured: false,
        }
    }

    fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.dragging {
            flags |= FLAG_DRAGGING;
        }
        if self.captured {
            flags |= FLAG_CAPTURED;
        }
        flags
    }
}

/// Scene kept entirely in memory.
///
/// Drives the JS-facing [`crate::simulation::DragonGame`] (JS reads the packed
/// transform buffer and renders however it likes) and every headless test.
#[derive(Clone, Debug)]
pub struct BufferScene {
    viewport: Rect,
    capture_zone: Option<Rect>,
    nodes: Vec<SceneNode>,
    transforms: Vec<f64>,
    score_text: String,
    score_updates: u32,
}

impl BufferScene {
    /// One node per entry of `sizes`. A zero size behaves like an element
    /// that has not been laid out yet.
    pub fn new(viewport: Rect, sizes: &[Vec2]) -> Self {
        let nodes: Vec<SceneNode> = sizes.iter().map(|s| SceneNode::new(*s)).collect();
        let mut scene = Self {
            viewport,
            capture_zone: None,
            transforms: vec![0.0; nodes.len() * TRANSFORM_STRIDE],
            nodes,
            score_text: String::new(),
            score_updates: 0,
        };
        for idx in 0..scene.nodes.len() {
            scene.sync(idx);
        }
        scene
    }

    pub fn with_capture_zone(mut self, zone: Rect) -> Self {
        self.capture_zone = Some(zone);
        self
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_capture_zone(&mut self, zone: Option<Rect>) {
        self.capture_zone = zone;
    }

    pub fn capture_zone(&self) -> Option<Rect> {
        self.capture_zone
    }

    pub fn node(&self, id: SpriteId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// How many times the score text was written.
    pub fn score_updates(&self) -> u32 {
        self.score_updates
    }

    /// Packed `[x, y, rotation, z, flags]` per sprite.
    pub fn transforms(&self) -> &[f64] {
        &self.transforms
    }

    fn sync(&mut self, idx: usize) {
        let Some(node) = self.nodes.get(idx) else {
            return;
        };
        let base = idx * TRANSFORM_STRIDE;
        let slot = &mut self.transforms[base..base + TRANSFORM_STRIDE];
        slot[0] = node.pos.x;
        slot[1] = node.pos.y;
        slot[2] = node.rotation;
        slot[3] = f64::from(node.z_index);
        slot[4] = f64::from(node.flags());
    }

    fn with_node<F>(&mut self, id: SpriteId, f: F)
    where
        F: FnOnce(&mut SceneNode),
    {
        let idx = id.index();
        if let Some(node) = self.nodes.get_mut(idx) {
            f(node);
            self.sync(idx);
        }
    }
}

impl Scene for BufferScene {
    fn sprite_count(&self) -> usize {
        self.nodes.len()
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn measure(&self, id: SpriteId) -> Option<Vec2> {
        self.node(id).map(|n| n.size)
    }

    fn bounds(&self, target: SceneTarget) -> Option<Rect> {
        match target {
            SceneTarget::Sprite(id) => self.node(id).map(|n| Rect::from_origin_size(n.pos, n.size)),
            SceneTarget::CaptureZone => self.capture_zone,
        }
    }

    fn set_transform(&mut self, id: SpriteId, pos: Vec2, rotation: f64) {
        self.with_node(id, |n| {
            n.pos = pos;
            n.rotation = rotation;
        });
    }

    fn set_z_index(&mut self, id: SpriteId, z_index: i32) {
        self.with_node(id, |n| n.z_index = z_index);
    }

    fn set_dragging(&mut self, id: SpriteId, dragging: bool) {
        self.with_node(id, |n| n.dragging = dragging);
    }

    fn set_captured(&mut self, id: SpriteId) {
        self.with_node(id, |n| n.captured = true);
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
        self.score_updates += 1;
    }
}
