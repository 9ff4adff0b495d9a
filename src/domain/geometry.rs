//! Viewport-space geometry: points, rectangles and the drop-zone overlap test.

/// 2D vector in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector for `angle` radians, scaled by `magnitude`.
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Self {
            x: angle.cos() * magnitude,
            y: angle.sin() * magnitude,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Axis-aligned rectangle (same shape as a DOM `getBoundingClientRect()` result)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Strict containment: points on an edge are outside.
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right() && p.y > self.top && p.y < self.bottom()
    }
}

/// Center-in-rect test: true iff the center of `a` lies strictly inside `b`.
///
/// Not an intersection test: a sprite whose edge touches
/// the drop zone without its center entering it does not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    b.contains_strict(a.center())
}

/// [`overlaps`] over optional bounds; a missing rectangle never overlaps.
pub fn overlaps_opt(a: Option<Rect>, b: Option<Rect>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => overlaps(&a, &b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_box() -> Rect {
        Rect::from_edges(400.0, 350.0, 600.0, 450.0)
    }

    #[test]
    fn center_inside_target_overlaps() {
        // 100x100 sprite centered on (500, 400)
        let sprite = Rect::new(450.0, 350.0, 100.0, 100.0);
        assert!(overlaps(&sprite, &capture_box()));
    }

    #[test]
    fn center_outside_target_does_not_overlap() {
        let sprite = Rect::new(300.0, 350.0, 100.0, 100.0);
        assert_eq!(sprite.center(), Vec2::new(350.0, 400.0));
        assert!(!overlaps(&sprite, &capture_box()));
    }

    #[test]
    fn edge_overlap_without_center_is_not_a_hit() {
        // Right half of the sprite sits inside the box, center stays at x=390.
        let sprite = Rect::new(240.0, 300.0, 300.0, 200.0);
        assert!(sprite.right() > capture_box().left);
        assert!(!overlaps(&sprite, &capture_box()));
    }

    #[test]
    fn center_on_boundary_is_outside() {
        let sprite = Rect::new(350.0, 350.0, 100.0, 100.0);
        assert_eq!(sprite.center().x, 400.0);
        assert!(!overlaps(&sprite, &capture_box()));
    }

    #[test]
    fn missing_rect_never_overlaps() {
        let sprite = Rect::new(450.0, 350.0, 100.0, 100.0);
        assert!(!overlaps_opt(None, Some(capture_box())));
        assert!(!overlaps_opt(Some(sprite), None));
        assert!(overlaps_opt(Some(sprite), Some(capture_box())));
    }

    #[test]
    fn polar_velocity_has_requested_speed() {
        let v = Vec2::from_polar(1.2, 120.0);
        assert!((v.length() - 120.0).abs() < 1e-9);
    }
}
