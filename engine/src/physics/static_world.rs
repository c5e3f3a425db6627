//! Static collision world
//!
//! A small [`CollisionProvider`] over axis-aligned boxes and one-sided planes.
//! It is enough to stand the locomotion core up without a physics engine:
//! floors, walls, ledges and ramps. Sphere casts inflate boxes by the sphere
//! radius (Minkowski sum, corners stay square), and move-and-collide sweeps
//! the body's bounding box with iterative slide response.

use glam::Vec3;

use super::collision::{
    RayHit, aabb_surface_normal, ray_aabb_intersect, ray_plane_intersect, sweep_point_aabb,
    sweep_support_plane,
};
use super::{CollisionProvider, LayerMask};
use crate::player::Body;

/// Slide iterations per move before remaining motion is dropped.
const MAX_SLIDE_ITERATIONS: usize = 4;

/// Contacts with a normal at least this upright stop downward motion instead
/// of sliding along the surface.
const FLOOR_NORMAL_Y: f32 = 0.7;

/// Solid axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBox {
    pub min: Vec3,
    pub max: Vec3,
    pub layer: LayerMask,
}

/// Infinite one-sided plane, solid behind its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPlane {
    pub point: Vec3,
    pub normal: Vec3,
    pub layer: LayerMask,
}

/// Collection of static shapes answering locomotion queries.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    boxes: Vec<StaticBox>,
    planes: Vec<StaticPlane>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box on the default layer.
    pub fn add_box(&mut self, min: Vec3, max: Vec3) -> &mut Self {
        self.add_box_on_layer(min, max, LayerMask::DEFAULT)
    }

    /// Add a box on an explicit layer.
    ///
    /// # Arguments
    ///
    /// * `min` - One corner of the box
    /// * `max` - Opposite corner (corners are reordered if swapped)
    /// * `layer` - Layer bits tested against each query's mask
    pub fn add_box_on_layer(&mut self, min: Vec3, max: Vec3, layer: LayerMask) -> &mut Self {
        self.boxes.push(StaticBox {
            min: min.min(max),
            max: min.max(max),
            layer,
        });
        self
    }

    /// Add an infinite plane on the default layer.
    ///
    /// A zero normal is ignored.
    pub fn add_plane(&mut self, point: Vec3, normal: Vec3) -> &mut Self {
        let normal = normal.normalize_or_zero();
        if normal != Vec3::ZERO {
            self.planes.push(StaticPlane {
                point,
                normal,
                layer: LayerMask::DEFAULT,
            });
        }
        self
    }

    /// Flat ground at the given height.
    pub fn with_ground(height: f32) -> Self {
        let mut world = Self::new();
        world.add_plane(Vec3::new(0.0, height, 0.0), Vec3::Y);
        world
    }

    pub fn boxes(&self) -> &[StaticBox] {
        &self.boxes
    }

    pub fn planes(&self) -> &[StaticPlane] {
        &self.planes
    }

    /// Nearest hit of a ray against all shapes inflated by `inflate`.
    fn cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        inflate: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        let mut best: Option<RayHit> = None;
        let mut consider = |t: f32, normal: Vec3| {
            if t <= max_distance && best.is_none_or(|b| t < b.distance) {
                best = Some(RayHit::new(origin + dir * t - normal * inflate, normal, t));
            }
        };

        for b in self.boxes.iter().filter(|b| mask.contains(b.layer)) {
            let (lo, hi) = (b.min - Vec3::splat(inflate), b.max + Vec3::splat(inflate));
            if let Some(t) = ray_aabb_intersect(origin, dir, lo, hi) {
                consider(t, aabb_surface_normal(origin + dir * t, lo, hi));
            }
        }
        for p in self.planes.iter().filter(|p| mask.contains(p.layer)) {
            let shifted = p.point + p.normal * inflate;
            if let Some(t) = ray_plane_intersect(origin, dir, shifted, p.normal) {
                consider(t, p.normal);
            }
        }

        best
    }

    /// Earliest contact of a box (center, half extents) swept along `delta`.
    fn first_contact(&self, center: Vec3, half: Vec3, delta: Vec3) -> Option<(f32, Vec3)> {
        let mut best: Option<(f32, Vec3)> = None;
        let mut consider = |t: f32, normal: Vec3| {
            if best.is_none_or(|(bt, _)| t < bt) {
                best = Some((t, normal));
            }
        };

        for b in &self.boxes {
            if let Some((t, n)) = sweep_point_aabb(center, delta, b.min - half, b.max + half) {
                consider(t, n);
            }
        }
        for p in &self.planes {
            // Corner of the box deepest along -normal
            let support = center - half * p.normal.signum();
            if let Some(t) = sweep_support_plane(support, delta, p.point, p.normal) {
                consider(t, p.normal);
            }
        }

        best
    }
}

impl CollisionProvider for StaticWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.cast(origin, direction, max_distance, 0.0, mask)
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.cast(origin, direction, max_distance, radius.max(0.0), mask)
    }

    fn move_and_collide(&self, body: &Body, delta: Vec3) -> Vec3 {
        if !body.collision_enabled {
            return delta;
        }

        let half = body.half_extents();
        let start = body.collider_center();
        let mut center = start;
        let mut remaining = delta;

        for _ in 0..MAX_SLIDE_ITERATIONS {
            if remaining.length_squared() < 1e-12 {
                break;
            }
            let Some((t, normal)) = self.first_contact(center, half, remaining) else {
                center += remaining;
                break;
            };

            center += remaining * t;
            let mut rest = remaining * (1.0 - t);
            if normal.y >= FLOOR_NORMAL_Y && rest.y < 0.0 {
                // Standing contact: drop the push into the floor, keep the rest
                rest.y = 0.0;
            }
            remaining = rest - normal * rest.dot(normal).min(0.0);
        }

        center - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(position: Vec3) -> Body {
        Body::new(position, 0.5, 2.0)
    }

    #[test]
    fn test_raycast_hits_ground_plane() {
        let world = StaticWorld::with_ground(0.0);
        let hit = world
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 5.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
        assert!(hit.point.y.abs() < 1e-5);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let world = StaticWorld::with_ground(0.0);
        assert!(world
            .raycast(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y, 2.0, LayerMask::ALL)
            .is_none());
    }

    #[test]
    fn test_raycast_respects_layer_mask() {
        let mut world = StaticWorld::new();
        world.add_box_on_layer(Vec3::new(-1.0, -1.0, -3.0), Vec3::new(1.0, 1.0, -2.0), LayerMask(0b10));
        assert!(world.raycast(Vec3::ZERO, Vec3::NEG_Z, 5.0, LayerMask::DEFAULT).is_none());
        let hit = world.raycast(Vec3::ZERO, Vec3::NEG_Z, 5.0, LayerMask::ALL).unwrap();
        assert_eq!(hit.normal, Vec3::Z);
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_raycast_picks_nearest() {
        let mut world = StaticWorld::new();
        world
            .add_box(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -5.0))
            .add_box(Vec3::new(-1.0, -1.0, -3.0), Vec3::new(1.0, 1.0, -2.0));
        let hit = world.raycast(Vec3::ZERO, Vec3::NEG_Z, 10.0, LayerMask::ALL).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_cast_hits_earlier_than_ray() {
        let mut world = StaticWorld::new();
        world.add_box(Vec3::new(-1.0, 3.0, -1.0), Vec3::new(1.0, 4.0, 1.0));
        let ray = world.raycast(Vec3::ZERO, Vec3::Y, 10.0, LayerMask::ALL).unwrap();
        let sphere = world.sphere_cast(Vec3::ZERO, 0.5, Vec3::Y, 10.0, LayerMask::ALL).unwrap();
        assert!((ray.distance - 3.0).abs() < 1e-5);
        assert!((sphere.distance - 2.5).abs() < 1e-5);
        assert!((sphere.point.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_on_flat_ground_keeps_horizontal_motion() {
        let world = StaticWorld::with_ground(0.0);
        let body = body_at(Vec3::ZERO);
        let actual = world.move_and_collide(&body, Vec3::new(0.0, -0.5, -0.5));
        assert!(actual.y.abs() < 1e-4);
        assert!((actual.z + 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_move_into_wall_stops_at_surface() {
        let mut world = StaticWorld::with_ground(0.0);
        world.add_box(Vec3::new(-5.0, 0.0, -3.0), Vec3::new(5.0, 4.0, -2.0));
        let body = body_at(Vec3::ZERO);
        let actual = world.move_and_collide(&body, Vec3::new(0.0, 0.0, -5.0));
        // Body front face (radius 0.5) stops at the wall face z=-2
        assert!((actual.z + 1.5).abs() < 1e-3, "got {actual:?}");
    }

    #[test]
    fn test_move_without_collision_passes_through() {
        let mut world = StaticWorld::with_ground(0.0);
        world.add_box(Vec3::new(-5.0, 0.0, -3.0), Vec3::new(5.0, 4.0, -2.0));
        let mut body = body_at(Vec3::ZERO);
        body.collision_enabled = false;
        let delta = Vec3::new(0.0, -1.0, -5.0);
        assert_eq!(world.move_and_collide(&body, delta), delta);
    }

    #[test]
    fn test_falling_body_lands_on_ground() {
        let world = StaticWorld::with_ground(0.0);
        let body = body_at(Vec3::new(0.0, 1.0, 0.0));
        let actual = world.move_and_collide(&body, Vec3::new(0.0, -3.0, 0.0));
        assert!((actual.y + 1.0).abs() < 1e-4);
    }
}
