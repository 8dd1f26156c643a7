//! Half-plane triangle test

use glam::Vec2;

/// Signed area term of the triangle (p1, p2, p3), up to a factor of two
#[inline]
pub fn sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Check whether `pt` lies inside the triangle (v1, v2, v3)
///
/// The point is inside when it sits on the same side of all three edges,
/// regardless of winding order.
pub fn point_in_triangle(pt: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    let b1 = sign(pt, v1, v2) < 0.0;
    let b2 = sign(pt, v2, v3) < 0.0;
    let b3 = sign(pt, v3, v1) < 0.0;

    b1 == b2 && b2 == b3
}
