//! Kinematics - per-frame motion for free sprites
//!
//! Explicit Euler integration followed by axis-aligned elastic bounce against
//! the viewport. Dragged and captured sprites are never touched here.

use crate::domain::geometry::Rect;
use crate::domain::sprite::Sprite;

/// What one [`step`] did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub stepped: u32,
    pub bounces: u32,
}

/// Advance every free sprite by `dt` seconds and resolve boundary contacts.
///
/// Positions are relative to the viewport origin; only `viewport.width` and
/// `viewport.height` are used.
pub fn step(sprites: &mut [Sprite], dt: f64, viewport: &Rect) -> StepReport {
    let mut report = StepReport::default();
    for sprite in sprites.iter_mut().filter(|s| s.is_free()) {
        integrate(sprite, dt);
        report.bounces += resolve_bounds(sprite, viewport);
        report.stepped += 1;
    }
    report
}

#[inline]
pub fn integrate(sprite: &mut Sprite, dt: f64) {
    sprite.pos += sprite.velocity * dt;
    sprite.rotation += sprite.rotate_speed * dt;
}

/// Clamp to the viewport and reflect velocity, checking left, right, top,
/// bottom in that order. Returns the number of reflections applied.
///
/// When the viewport is narrower (or shorter) than the sprite the far limit
/// is clamped to 0, pinning the sprite to the near edge on that axis.
pub fn resolve_bounds(sprite: &mut Sprite, viewport: &Rect) -> u32 {
    let max_x = (viewport.width - sprite.size.x).max(0.0);
    let max_y = (viewport.height - sprite.size.y).max(0.0);
    let mut bounces = 0;

    if sprite.pos.x < 0.0 {
        sprite.pos.x = 0.0;
        sprite.velocity.x = -sprite.velocity.x;
        bounces += 1;
    }
    if sprite.pos.x > max_x {
        sprite.pos.x = max_x;
        sprite.velocity.x = -sprite.velocity.x;
        bounces += 1;
    }
    if sprite.pos.y < 0.0 {
        sprite.pos.y = 0.0;
        sprite.velocity.y = -sprite.velocity.y;
        bounces += 1;
    }
    if sprite.pos.y > max_y {
        sprite.pos.y = max_y;
        sprite.velocity.y = -sprite.velocity.y;
        bounces += 1;
    }

    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Vec2;
    use crate::domain::sprite::SpriteId;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn sprite_at(x: f64, y: f64, vx: f64, vy: f64) -> Sprite {
        let mut s = Sprite::new(SpriteId(0), Vec2::new(x, y), Vec2::new(50.0, 50.0));
        s.velocity = Vec2::new(vx, vy);
        s
    }

    #[test]
    fn integrates_position_and_rotation() {
        let mut sprites = vec![sprite_at(100.0, 100.0, 60.0, -30.0)];
        sprites[0].rotate_speed = 20.0;
        sprites[0].rotation = 350.0;

        let report = step(&mut sprites, 0.5, &viewport());

        assert_eq!(sprites[0].pos, Vec2::new(130.0, 85.0));
        // Rotation is not normalized.
        assert_eq!(sprites[0].rotation, 360.0);
        assert_eq!(report, StepReport { stepped: 1, bounces: 0 });
    }

    #[test]
    fn left_wall_clamps_and_reflects() {
        // x=5 moving at -50 px/s for 0.2 s lands at x=-5.
        let mut sprites = vec![sprite_at(5.0, 100.0, -50.0, 0.0)];
        let report = step(&mut sprites, 0.2, &viewport());

        assert_eq!(sprites[0].pos.x, 0.0);
        assert_eq!(sprites[0].velocity.x, 50.0);
        assert_eq!(report.bounces, 1);
    }

    #[test]
    fn right_and_bottom_walls_use_sprite_size() {
        let mut sprites = vec![sprite_at(945.0, 745.0, 100.0, 100.0)];
        step(&mut sprites, 0.1, &viewport());

        assert_eq!(sprites[0].pos, Vec2::new(950.0, 750.0));
        assert_eq!(sprites[0].velocity, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn corner_hit_bounces_both_axes() {
        let mut sprites = vec![sprite_at(1.0, 1.0, -40.0, -70.0)];
        let report = step(&mut sprites, 0.1, &viewport());

        assert_eq!(sprites[0].pos, Vec2::zero());
        assert_eq!(sprites[0].velocity, Vec2::new(40.0, 70.0));
        assert_eq!(report.bounces, 2);
    }

    #[test]
    fn bounce_preserves_speed_magnitude() {
        let mut sprites = vec![sprite_at(990.0, 400.0, 173.5, -12.25)];
        let before = sprites[0].velocity;
        step(&mut sprites, 1.0 / 60.0, &viewport());

        assert_eq!(sprites[0].velocity.x.abs(), before.x.abs());
        assert_eq!(sprites[0].velocity.y, before.y);
    }

    #[test]
    fn dragged_and_captured_sprites_are_skipped() {
        let mut dragged = sprite_at(-200.0, 10.0, 100.0, 0.0);
        dragged.is_dragging = true;
        let mut captured = sprite_at(300.0, 300.0, 100.0, 100.0);
        captured.is_captured = true;
        let mut sprites = vec![dragged.clone(), captured.clone()];

        let report = step(&mut sprites, 1.0, &viewport());

        assert_eq!(sprites[0], dragged);
        assert_eq!(sprites[1], captured);
        assert_eq!(report.stepped, 0);
    }

    #[test]
    fn zero_dt_leaves_sprites_in_place() {
        let mut sprites = vec![sprite_at(400.0, 300.0, 180.0, -180.0)];
        step(&mut sprites, 0.0, &viewport());
        assert_eq!(sprites[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn many_steps_keep_sprites_in_bounds() {
        let mut sprites: Vec<Sprite> = (0..8)
            .map(|i| {
                let f = i as f64;
                let mut s = sprite_at(100.0 * f, 90.0 * f, 170.0 - 40.0 * f, 35.0 * f - 120.0);
                s.id = SpriteId(i);
                s.size = Vec2::new(30.0 + 10.0 * f, 60.0 - 5.0 * f);
                s
            })
            .collect();

        for _ in 0..2000 {
            step(&mut sprites, 1.0 / 60.0, &viewport());
            for s in &sprites {
                assert!(s.pos.x >= 0.0 && s.pos.x <= 1000.0 - s.size.x, "x out of bounds: {:?}", s);
                assert!(s.pos.y >= 0.0 && s.pos.y <= 800.0 - s.size.y, "y out of bounds: {:?}", s);
            }
        }
    }

    #[test]
    fn viewport_smaller_than_sprite_pins_to_origin() {
        let tiny = Rect::new(0.0, 0.0, 30.0, 30.0);
        let mut sprites = vec![sprite_at(10.0, 10.0, 90.0, -90.0)];

        for _ in 0..10 {
            step(&mut sprites, 0.1, &tiny);
            assert_eq!(sprites[0].pos, Vec2::zero());
            assert_eq!(sprites[0].velocity.x.abs(), 90.0);
            assert_eq!(sprites[0].velocity.y.abs(), 90.0);
        }
    }
}
