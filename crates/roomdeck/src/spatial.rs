//! Spatial primitives shared by the scene model and both renderers.
//!
//! Room space is meters, +Y up, with the floor at `y = 0`. Floor-plane
//! points are carried as [`Vec2`] where `.x` is world x and `.y` is world z.

use glam::{Vec2, Vec3};

/// Items are kept within `[-ROOM_LIMIT, ROOM_LIMIT]` on x and z when moved.
pub const ROOM_LIMIT: f32 = 7.0;

/// Axis-aligned box dimensions of a furniture item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BoxSize {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Y of the box center when it rests on the floor.
    pub fn resting_y(&self) -> f32 {
        self.height / 2.0
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Unrotated footprint corners around the box center, in the order
    /// (-w,-d), (+w,-d), (+w,+d), (-w,+d).
    pub fn footprint(&self) -> [Vec2; 4] {
        let hw = self.width / 2.0;
        let hd = self.depth / 2.0;
        [
            Vec2::new(-hw, -hd),
            Vec2::new(hw, -hd),
            Vec2::new(hw, hd),
            Vec2::new(-hw, hd),
        ]
    }
}

/// Rotate a floor-plane offset by `angle` radians:
/// `x' = x·cosθ − z·sinθ`, `z' = x·sinθ + z·cosθ`.
pub fn rotate_xz(p: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

pub fn clamp_to_room(v: f32) -> f32 {
    v.clamp(-ROOM_LIMIT, ROOM_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_maps_x_onto_z() {
        let p = rotate_xz(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!((p - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn footprint_is_centered() {
        let corners = BoxSize::new(2.0, 1.0, 4.0).footprint();
        let sum: Vec2 = corners.iter().copied().sum();
        assert_eq!(sum, Vec2::ZERO);
        assert_eq!(corners[2], Vec2::new(1.0, 2.0));
    }

    #[test]
    fn clamp_keeps_room_bounds() {
        assert_eq!(clamp_to_room(9.3), 7.0);
        assert_eq!(clamp_to_room(-7.4), -7.0);
        assert_eq!(clamp_to_room(3.2), 3.2);
    }
}
