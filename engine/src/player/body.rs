//! Kinematic body state.

use glam::{Quat, Vec2, Vec3};

use crate::config::BodyTuning;

/// The character's kinematic body.
///
/// Mutated only by whichever subsystem holds motion authority for the tick;
/// the camera pipeline reads a snapshot and never sees this struct mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Feet position in world space
    pub position: Vec3,
    /// Facing angle around +Y in radians (0 faces -Z)
    pub yaw: f32,
    /// Collider radius
    pub radius: f32,
    /// Collider height (shrinks while crouched)
    pub height: f32,
    /// Collider center relative to the feet
    pub center: Vec3,
    /// Y scale applied to the visual model
    pub visual_scale: f32,
    /// Signed vertical speed in m/s
    pub vertical_velocity: f32,
    /// Persistent horizontal velocity while airborne
    pub air_momentum: Vec3,
    /// When false, moves ignore collision
    pub collision_enabled: bool,
    /// When false, gravity is not integrated
    pub gravity_enabled: bool,
}

impl Body {
    /// Standing body at `position` with the collider centered at half height.
    pub fn new(position: Vec3, radius: f32, height: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            radius,
            height,
            center: Vec3::new(0.0, height * 0.5, 0.0),
            visual_scale: 1.0,
            vertical_velocity: 0.0,
            air_momentum: Vec3::ZERO,
            collision_enabled: true,
            gravity_enabled: true,
        }
    }

    /// Standing body built from tuning.
    pub fn from_tuning(position: Vec3, tuning: &BodyTuning) -> Self {
        Self {
            center: tuning.standing_center,
            ..Self::new(position, tuning.radius, tuning.standing_height)
        }
    }

    /// Rotation taking body-local space (-Z forward) to world space.
    #[inline]
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw)
    }

    /// Horizontal facing direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right direction, perpendicular to [`forward`](Self::forward).
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// World-space collider center.
    #[inline]
    pub fn collider_center(&self) -> Vec3 {
        self.position + self.center
    }

    /// Half extents of the collider's bounding box.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.radius, self.height * 0.5, self.radius)
    }

    /// Camera-relative input axes mapped onto the horizontal plane.
    ///
    /// Not normalized: a half-pushed stick gives a shorter vector.
    #[inline]
    pub fn move_direction(&self, axis: Vec2) -> Vec3 {
        self.right() * axis.x + self.forward() * axis.y
    }
}
