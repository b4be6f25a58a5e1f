//! Axis-aligned box primitives and small vector helpers.

use glam::Vec3;

use crate::config::{PLAYER_DEPTH, PLAYER_HEIGHT, PLAYER_WIDTH};

/// Componentwise absolute-difference proximity test.
pub fn close_to(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance
        && (a.y - b.y).abs() < tolerance
        && (a.z - b.z).abs() < tolerance
}

/// Axis-aligned bounding box. `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap on all three axes. Boxes that merely touch on a
    /// face do not intersect, which is what lets the player rest
    /// exactly on an obstacle top without re-colliding every tick.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
            && self.max.z > other.min.z
            && self.min.z < other.max.z
    }

    /// Per-axis penetration depths against `other`: the lesser of the
    /// two possible push-out distances on each axis, or 0.0 where the
    /// boxes are disjoint on that axis.
    pub fn overlap_depths(&self, other: &Aabb) -> Vec3 {
        Vec3::new(
            overlap_1d(self.min.x, self.max.x, other.min.x, other.max.x),
            overlap_1d(self.min.y, self.max.y, other.min.y, other.max.y),
            overlap_1d(self.min.z, self.max.z, other.min.z, other.max.z),
        )
    }
}

fn overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    if a_max > b_min && a_min < b_max {
        (a_max - b_min).min(b_max - a_min)
    } else {
        0.0
    }
}

/// Player box for a given feet position: centered horizontally, feet
/// at `position.y`.
pub fn player_aabb(position: Vec3) -> Aabb {
    let center = position + Vec3::new(0.0, PLAYER_HEIGHT * 0.5, 0.0);
    Aabb::from_center_size(
        center,
        Vec3::new(PLAYER_WIDTH, PLAYER_HEIGHT, PLAYER_DEPTH),
    )
}
