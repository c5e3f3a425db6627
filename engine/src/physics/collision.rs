//! Collision primitives
//!
//! Ray and swept-box tests against axis-aligned boxes and infinite planes.
//! These back the [`StaticWorld`](super::StaticWorld) query provider.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used: entry and exit times are computed per axis and the
//! ray hits when the latest entry precedes the earliest exit.

use glam::Vec3;

/// Tolerance used to treat resting contact as "outside" a slab.
pub const CONTACT_EPSILON: f32 = 1e-4;

/// Result of a ray or shape cast against the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space position where the cast touched the surface
    pub point: Vec3,
    /// Outward surface normal at the hit (normalized)
    pub normal: Vec3,
    /// Distance travelled along the cast direction
    pub distance: f32,
}

impl RayHit {
    pub fn new(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
        }
    }
}

/// Ray-AABB intersection using the slab method.
///
/// Rays that start inside the box return `None`: a query issued from inside
/// geometry has no meaningful surface to report.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Entry distance along the ray (t >= 0)
/// * `None` - Miss, box behind the origin, or origin inside the box
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if d.abs() < 1e-10 {
            // Parallel to this slab: must already be between the planes
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let t1 = (lo - o) * inv;
        let t2 = (hi - o) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_min >= 0.0 {
        Some(t_min)
    } else {
        None
    }
}

/// Outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// Ray against a one-sided plane through `plane_point` facing `plane_normal`.
///
/// Only hits from the front side count.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `plane_point` - Any point on the plane
/// * `plane_normal` - Outward plane normal (normalized)
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the plane
/// * `None` - Ray parallel to or leaving the plane, or origin behind it
pub fn ray_plane_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray_dir.dot(plane_normal);
    if denom >= -1e-6 {
        return None;
    }
    let dist = (ray_origin - plane_point).dot(plane_normal);
    if dist < 0.0 {
        return None;
    }
    Some(dist / -denom)
}

/// Sweep a point along `delta` into an AABB.
///
/// A point resting on a face (within [`CONTACT_EPSILON`]) does not collide
/// with that face when moving parallel to it, and a point already buried in
/// the box is ignored so it can move out.
///
/// # Arguments
///
/// * `origin` - Start of the sweep (a box center when sweeping against a
///   Minkowski-inflated AABB)
/// * `delta` - Full displacement of the sweep
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some((t, normal))` - Fraction of `delta` in `[0, 1]` travelled before
///   contact, and the outward normal of the face hit
/// * `None` - No contact within `delta`
pub fn sweep_point_aabb(
    origin: Vec3,
    delta: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<(f32, Vec3)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let o = origin[axis];
        let d = delta[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if d.abs() < 1e-9 {
            if o <= lo + CONTACT_EPSILON || o >= hi - CONTACT_EPSILON {
                return None;
            }
            continue;
        }

        let (near, far, face) = if d > 0.0 {
            ((lo - o) / d, (hi - o) / d, -1.0)
        } else {
            ((hi - o) / d, (lo - o) / d, 1.0)
        };

        if near > t_enter {
            t_enter = near;
            normal = Vec3::ZERO;
            normal[axis] = face;
        }
        t_exit = t_exit.min(far);
    }

    let slack = CONTACT_EPSILON / delta.length().max(1e-6);
    if t_enter > t_exit || t_enter < -slack || t_enter > 1.0 {
        return None;
    }
    Some((t_enter.max(0.0), normal))
}

/// Sweep a box (given by its support point toward the plane) along `delta`
/// into a one-sided plane.
///
/// # Arguments
///
/// * `support` - Corner of the box deepest along `-plane_normal`
/// * `delta` - Full displacement of the sweep
/// * `plane_point` - Any point on the plane
/// * `plane_normal` - Outward plane normal (normalized)
///
/// # Returns
///
/// * `Some(t)` - Fraction of `delta` in `[0, 1]` travelled before contact
/// * `None` - Moving away from or parallel to the plane, already behind it,
///   or no contact within `delta`
pub fn sweep_support_plane(
    support: Vec3,
    delta: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let rate = delta.dot(plane_normal);
    if rate >= -1e-9 {
        return None;
    }
    let dist = (support - plane_point).dot(plane_normal);
    if dist < -CONTACT_EPSILON {
        // Already behind the plane, let it resolve outward
        return None;
    }
    let t = dist.max(0.0) / -rate;
    (t <= 1.0).then_some(t)
}
