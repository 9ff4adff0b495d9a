use super::geometry::Vec2;

/// Handle into the scene registry (index of the sprite's visual element).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

impl SpriteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kinematic and interaction state of one floating dragon
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    /// Top-left corner in viewport pixels
    pub pos: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Degrees, unbounded
    pub rotation: f64,
    /// Degrees per second
    pub rotate_speed: f64,
    /// Measured once at startup
    pub size: Vec2,
    /// Position currently owned by the pointer
    pub is_dragging: bool,
    /// Terminal: never cleared once set
    pub is_captured: bool,
}

impl Sprite {
    pub fn new(id: SpriteId, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            velocity: Vec2::zero(),
            rotation: 0.0,
            rotate_speed: 0.0,
            size,
            is_dragging: false,
            is_captured: false,
        }
    }

    /// Neither dragged nor captured, so the kinematics engine owns it.
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.is_dragging && !self.is_captured
    }
}
