//! Surface Probe
//!
//! Stateless multi-ray queries against the collision provider: "am I standing
//! on something walkable" and "is there a wall within kicking range".
//!
//! # Ground probe
//!
//! Five rays point straight down: one from the center and four offset along
//! ±forward and ±right by half the body radius. They start slightly above the
//! feet so a body resting exactly on a surface still registers it. The first
//! ray whose hit is flatter than the probe slope limit wins. The probe does not
//! look for the flattest hit.

use glam::Vec3;

use crate::config::{LocomotionConfig, ProbeTuning};
use crate::physics::{CollisionProvider, RayHit};

/// Snapshot of the surface under the body, rebuilt every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundState {
    /// A walkable-angle surface is within probe distance
    pub grounded: bool,
    /// Normal of the qualifying hit, or up when nothing was hit
    pub surface_normal: Vec3,
    /// Angle between `surface_normal` and up, in degrees
    pub slope_angle_deg: f32,
}

impl GroundState {
    /// Nothing below the body.
    pub const AIRBORNE: GroundState = GroundState {
        grounded: false,
        surface_normal: Vec3::Y,
        slope_angle_deg: 0.0,
    };

    /// Grounded on a surface with the given normal.
    pub fn on_surface(normal: Vec3) -> Self {
        Self {
            grounded: true,
            surface_normal: normal,
            slope_angle_deg: slope_angle_deg(normal),
        }
    }
}

impl Default for GroundState {
    fn default() -> Self {
        Self::AIRBORNE
    }
}

/// Angle of a surface with the given normal from horizontal, in degrees.
///
/// A degenerate normal is treated as flat.
#[inline]
pub fn slope_angle_deg(normal: Vec3) -> f32 {
    if normal.length_squared() < 1e-12 {
        return 0.0;
    }
    normal.angle_between(Vec3::Y).to_degrees()
}

/// True when two surface normals point within `tolerance_deg` of each other.
#[inline]
pub fn same_surface(a: Vec3, b: Vec3, tolerance_deg: f32) -> bool {
    if a.length_squared() < 1e-12 || b.length_squared() < 1e-12 {
        return false;
    }
    a.angle_between(b).to_degrees() < tolerance_deg
}

/// Issues ground and wall ray queries.
#[derive(Debug, Clone)]
pub struct SurfaceProbe {
    tuning: ProbeTuning,
}

impl SurfaceProbe {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self { tuning: config.probe }
    }

    pub fn tuning(&self) -> &ProbeTuning {
        &self.tuning
    }

    /// Probe the ground below `position` (the feet point).
    pub fn query_ground<W>(
        &self,
        world: &W,
        position: Vec3,
        forward: Vec3,
        right: Vec3,
        radius: f32,
    ) -> GroundState
    where
        W: CollisionProvider + ?Sized,
    {
        let t = &self.tuning;
        let origin = position + Vec3::Y * t.ray_margin;
        let ray_length = t.ground_check_distance + t.ray_margin;
        let offset = radius * t.ray_offset_factor;

        let origins = [
            origin,
            origin + forward * offset,
            origin - forward * offset,
            origin + right * offset,
            origin - right * offset,
        ];

        let mut last_hit: Option<RayHit> = None;
        for ray_origin in origins {
            let Some(hit) = world.raycast(ray_origin, Vec3::NEG_Y, ray_length, t.surface_mask)
            else {
                continue;
            };
            if slope_angle_deg(hit.normal) < t.probe_slope_limit_deg {
                return GroundState::on_surface(hit.normal);
            }
            last_hit = Some(hit);
        }

        match last_hit {
            // Touching something too steep to stand on: report its normal
            Some(hit) => GroundState {
                grounded: false,
                surface_normal: hit.normal,
                slope_angle_deg: slope_angle_deg(hit.normal),
            },
            None => GroundState::AIRBORNE,
        }
    }

    /// Look for a wall around the body at chest height.
    ///
    /// Directions are tried in the order -right, +right, -forward, +forward.
    /// A hit whose normal matches `ignore_normal` within `tolerance_deg` is
    /// skipped so the same wall is never reported twice in a row.
    #[allow(clippy::too_many_arguments)]
    pub fn query_near_wall<W>(
        &self,
        world: &W,
        position: Vec3,
        forward: Vec3,
        right: Vec3,
        max_distance: f32,
        ignore_normal: Option<Vec3>,
        tolerance_deg: f32,
    ) -> Option<RayHit>
    where
        W: CollisionProvider + ?Sized,
    {
        let origin = position + Vec3::Y * self.tuning.wall_probe_height;
        let directions = [-right, right, -forward, forward];

        directions.into_iter().find_map(|dir| {
            let hit = world.raycast(origin, dir, max_distance, self.tuning.surface_mask)?;
            match ignore_normal {
                Some(previous) if same_surface(previous, hit.normal, tolerance_deg) => {
                    tracing::trace!(normal = ?hit.normal, "skipping previously kicked wall");
                    None
                }
                _ => Some(hit),
            }
        })
    }
}
