//! Scalar and vector approach helpers.
//!
//! Everything that relaxes toward a target over time goes through here so the
//! camera, crouch and slide all use the same curves.

use glam::Vec3;

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by at most `max_delta`.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Frame-rate independent lerp factor: `min(dt * rate, 1)`.
#[inline]
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    (dt * rate).clamp(0.0, 1.0)
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` is the filter's scratch state and must persist between calls.
/// `smooth_time` is roughly the time to reach the target. Uses the
/// closed-form approximation from Game Programming Gems 4 (ch. 1.10); the
/// result never crosses `target`.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Crossed the target: land on it and stop
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Component of `v` lying in the plane with normal `n` (unit length).
#[inline]
pub fn project_on_plane(v: Vec3, n: Vec3) -> Vec3 {
    v - n * v.dot(n)
}
