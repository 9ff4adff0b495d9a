use crate::domain::geometry::{Rect, Vec2};
use crate::domain::sprite::SpriteId;

/// Something whose on-screen bounds can be queried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTarget {
    Sprite(SpriteId),
    CaptureZone,
}

/// Render boundary seen by the game core.
///
/// The core only ever talks to sprites through their [`SpriteId`]; the scene
/// maps ids to whatever actually draws them (DOM elements, a transform buffer
/// read by JS, a test recorder).
pub trait Scene {
    /// Number of sprite elements registered with the scene.
    fn sprite_count(&self) -> usize;

    /// Current viewport rectangle. Re-read every frame.
    fn viewport(&self) -> Rect;

    /// Rendered size of a sprite element, if it has been laid out.
    fn measure(&self, id: SpriteId) -> Option<Vec2>;

    /// On-screen bounds; `None` when the target does not exist.
    fn bounds(&self, target: SceneTarget) -> Option<Rect>;

    fn set_transform(&mut self, id: SpriteId, pos: Vec2, rotation: f64);

    fn set_z_index(&mut self, id: SpriteId, z_index: i32);

    fn set_dragging(&mut self, id: SpriteId, dragging: bool);

    /// Hide a captured sprite.
    fn set_captured(&mut self, id: SpriteId);

    fn set_score_text(&mut self, text: &str);
}
