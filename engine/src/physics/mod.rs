//! Physics module
//!
//! The locomotion core never owns collision geometry. Everything it needs from
//! the world goes through [`CollisionProvider`]: rays for ground, wall and
//! ledge probes, a sphere cast for crouch clearance, and a sweep-and-slide move.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, Y up, -Z forward at yaw 0.
//!
//! # Submodules
//!
//! - [`collision`] - Ray/AABB/plane primitives and [`RayHit`]
//! - [`static_world`] - [`StaticWorld`], a box-and-plane provider for tests and tools

pub mod collision;
pub mod static_world;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::player::Body;

pub use collision::{RayHit, aabb_surface_normal, ray_aabb_intersect};
pub use static_world::{StaticBox, StaticPlane, StaticWorld};

/// Bit set of collision layers a query should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Layer that shapes land on unless told otherwise.
    pub const DEFAULT: LayerMask = LayerMask(1);

    /// True when the two masks share at least one layer.
    #[inline]
    pub fn contains(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// Queries the locomotion core issues against static world geometry.
///
/// Implementations are expected to be pure queries: none of these calls may
/// mutate the world or the body.
pub trait CollisionProvider {
    /// Cast a ray; `direction` need not be normalized.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// Sweep a sphere from `origin` along `direction`.
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// Sweep the body's collider along `delta` with slide response and return
    /// the displacement actually achieved. Bodies with collision disabled move
    /// freely.
    fn move_and_collide(&self, body: &Body, delta: Vec3) -> Vec3;
}
