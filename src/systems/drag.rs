//! Pointer drag state machine
//!
//! `Idle -> Dragging(s)` on pointer-down, position overrides on pointer-move,
//! and a drop decision on pointer-up. Only one sprite can be dragged at a time.

use crate::domain::geometry::Vec2;
use crate::domain::sprite::{Sprite, SpriteId};

/// Live ownership of one sprite's position by the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub sprite: SpriteId,
    /// Pointer position minus sprite origin at drag start
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(SpriteId),
}

/// How a drag ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped on the capture zone; the sprite is still flagged as dragging
    /// until the capture coordinator takes it.
    OnTarget(SpriteId),
    /// Dropped elsewhere; the sprite is free again with its old velocity.
    Released(SpriteId),
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn state(&self) -> DragState {
        match self.session {
            Some(s) => DragState::Dragging(s.sprite),
            None => DragState::Idle,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn active_sprite(&self) -> Option<SpriteId> {
        self.session.map(|s| s.sprite)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start dragging `sprite` from `pointer`.
    ///
    /// Rejected (returns false, nothing changes) when the sprite is captured
    /// or another drag is already live.
    pub fn begin(&mut self, sprite: &mut Sprite, pointer: Vec2) -> bool {
        if sprite.is_captured || sprite.is_dragging || self.session.is_some() {
            return false;
        }
        sprite.is_dragging = true;
        self.session = Some(DragSession {
            sprite: sprite.id,
            offset: pointer - sprite.pos,
        });
        true
    }

    /// Move the dragged sprite under the pointer. No clamping to the viewport.
    pub fn drag_to(&self, sprites: &mut [Sprite], pointer: Vec2) -> Option<SpriteId> {
        let session = self.session?;
        let sprite = sprites.get_mut(session.sprite.index())?;
        sprite.pos = pointer - session.offset;
        Some(session.sprite)
    }

    /// End the drag. `on_target` decides whether the drop landed on the
    /// capture zone. The session is cleared either way.
    pub fn finish<F>(&mut self, sprites: &mut [Sprite], on_target: F) -> Option<DropOutcome>
    where
        F: FnOnce(&Sprite) -> bool,
    {
        let session = self.session.take()?;
        let sprite = sprites.get_mut(session.sprite.index())?;
        if on_target(sprite) {
            Some(DropOutcome::OnTarget(session.sprite))
        } else {
            sprite.is_dragging = false;
            Some(DropOutcome::Released(session.sprite))
        }
    }

    /// Drop the session without a drop decision (sprite captured mid-drag).
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites() -> Vec<Sprite> {
        (0..3)
            .map(|i| {
                let mut s = Sprite::new(
                    SpriteId(i),
                    Vec2::new(100.0 * i as f64, 50.0),
                    Vec2::new(40.0, 40.0),
                );
                s.velocity = Vec2::new(120.0, -60.0);
                s
            })
            .collect()
    }

    #[test]
    fn begin_records_offset_and_flags_sprite() {
        let mut sprites = sprites();
        let mut drag = DragController::new();

        assert!(drag.begin(&mut sprites[1], Vec2::new(110.0, 65.0)));

        assert!(sprites[1].is_dragging);
        assert_eq!(drag.state(), DragState::Dragging(SpriteId(1)));
        assert_eq!(drag.session().map(|s| s.offset), Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn second_begin_is_rejected_while_dragging() {
        let mut sprites = sprites();
        let mut drag = DragController::new();
        assert!(drag.begin(&mut sprites[0], Vec2::new(5.0, 55.0)));

        let before = sprites[2].clone();
        assert!(!drag.begin(&mut sprites[2], Vec2::new(205.0, 55.0)));

        assert_eq!(sprites[2], before);
        assert_eq!(drag.active_sprite(), Some(SpriteId(0)));
    }

    #[test]
    fn captured_sprite_cannot_be_dragged() {
        let mut sprites = sprites();
        sprites[0].is_captured = true;
        let mut drag = DragController::new();

        assert!(!drag.begin(&mut sprites[0], Vec2::new(5.0, 55.0)));
        assert!(!sprites[0].is_dragging);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn drag_to_follows_pointer_without_clamping() {
        let mut sprites = sprites();
        let mut drag = DragController::new();
        drag.begin(&mut sprites[0], Vec2::new(10.0, 60.0));
        sprites[0].rotation = 42.0;

        assert_eq!(drag.drag_to(&mut sprites, Vec2::new(-40.0, -90.0)), Some(SpriteId(0)));

        assert_eq!(sprites[0].pos, Vec2::new(-50.0, -100.0));
        assert_eq!(sprites[0].rotation, 42.0);
    }

    #[test]
    fn move_and_finish_without_session_are_noops() {
        let mut sprites = sprites();
        let snapshot = sprites.clone();
        let mut drag = DragController::new();

        assert_eq!(drag.drag_to(&mut sprites, Vec2::new(1.0, 1.0)), None);
        assert_eq!(drag.finish(&mut sprites, |_| true), None);
        assert_eq!(sprites, snapshot);
    }

    #[test]
    fn release_off_target_frees_sprite_and_keeps_velocity() {
        let mut sprites = sprites();
        let mut drag = DragController::new();
        drag.begin(&mut sprites[2], Vec2::new(210.0, 60.0));
        drag.drag_to(&mut sprites, Vec2::new(900.0, 20.0));

        let outcome = drag.finish(&mut sprites, |_| false);

        assert_eq!(outcome, Some(DropOutcome::Released(SpriteId(2))));
        assert!(!sprites[2].is_dragging);
        assert_eq!(sprites[2].pos, Vec2::new(890.0, 10.0));
        assert_eq!(sprites[2].velocity, Vec2::new(120.0, -60.0));
        assert!(!drag.is_active());
    }

    #[test]
    fn release_on_target_leaves_capture_to_coordinator() {
        let mut sprites = sprites();
        let mut drag = DragController::new();
        drag.begin(&mut sprites[1], Vec2::new(120.0, 70.0));

        let outcome = drag.finish(&mut sprites, |s| s.id == SpriteId(1));

        assert_eq!(outcome, Some(DropOutcome::OnTarget(SpriteId(1))));
        assert!(sprites[1].is_dragging);
        assert_eq!(drag.state(), DragState::Idle);
    }
}
