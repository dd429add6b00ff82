//! Collision and containment checks
//!
//! All comparisons are strict: touching an edge is not a hit.

use glam::Vec2;

use crate::levels::Rect;

/// Does the circle's bounding box overlap the rectangle?
///
/// The orb is tested as a square of half-width `radius` around its center,
/// so `pos.x + radius == rect.x` is a miss.
pub fn circle_box_overlaps_rect(pos: Vec2, radius: f32, rect: &Rect) -> bool {
    pos.x + radius > rect.x
        && pos.x - radius < rect.x + rect.w
        && pos.y + radius > rect.y
        && pos.y - radius < rect.y + rect.h
}

/// Are two circles closer than their combined radii?
pub fn circles_touch(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Is the point outside `[0, bounds.x] x [0, bounds.y]`?
pub fn out_of_bounds(pos: Vec2, bounds: Vec2) -> bool {
    pos.x < 0.0 || pos.x > bounds.x || pos.y < 0.0 || pos.y > bounds.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let rect = Rect::new(100.0, 0.0, 50.0, 100.0);
        // Right edge of the orb's box sits exactly on the rect's left edge
        assert!(!circle_box_overlaps_rect(Vec2::new(92.0, 50.0), 8.0, &rect));
        assert!(circle_box_overlaps_rect(Vec2::new(92.5, 50.0), 8.0, &rect));
        // Bottom edge
        assert!(!circle_box_overlaps_rect(Vec2::new(125.0, 108.0), 8.0, &rect));
        assert!(circle_box_overlaps_rect(Vec2::new(125.0, 107.9), 8.0, &rect));
    }

    #[test]
    fn test_box_corner_counts() {
        // Box-vs-box test: a corner graze counts even where the circle would miss
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(circle_box_overlaps_rect(Vec2::new(17.0, 17.0), 8.0, &rect));
    }

    #[test]
    fn test_circles_touch_is_strict() {
        assert!(!circles_touch(Vec2::ZERO, 20.0, Vec2::new(28.0, 0.0), 8.0));
        assert!(circles_touch(Vec2::ZERO, 20.0, Vec2::new(27.9, 0.0), 8.0));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Vec2::new(800.0, 600.0);
        assert!(!out_of_bounds(Vec2::ZERO, bounds));
        assert!(!out_of_bounds(bounds, bounds));
        assert!(out_of_bounds(Vec2::new(-0.01, 10.0), bounds));
        assert!(out_of_bounds(Vec2::new(10.0, 600.01), bounds));
    }
}
