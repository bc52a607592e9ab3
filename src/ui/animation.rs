// SPDX-License-Identifier: MPL-2.0
//! Time-indexed interpolation primitives used by widget transitions.
//!
//! Everything here is sampled against an explicit [`Instant`] rather than
//! driven by an internal clock, so the same value can be recomputed from
//! `view()` and from the periodic tick without drifting apart.
//!
//! - [`Tween`] interpolates between two values over a fixed duration with an
//!   [`Easing`] curve.
//! - [`Spring`] follows a damped harmonic oscillator released from rest,
//!   which gives the bouncy scale-in of the toast card.

use std::time::{Duration, Instant};

/// Distance from the target below which a spring counts as settled.
const VISIBILITY_THRESHOLD: f64 = 0.01;

/// Convergence tolerance for the cubic-bezier solver.
const BEZIER_EPSILON: f32 = 1e-5;

/// Easing curves mapping linear time fraction to progress fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Starts at full speed and decelerates (cubic-bezier 0, 0, 0.2, 1).
    LinearOutSlowIn,
    /// Arbitrary CSS-style cubic-bezier with fixed end points (0,0) and (1,1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Maps a time fraction in `[0, 1]` to an eased progress fraction.
    ///
    /// Inputs outside the unit interval are clamped.
    #[must_use]
    pub fn transform(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a cubic bezier whose end points are 0 and 1.
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solves `bezier_x(s) == x` for `s`, then returns `bezier_y(s)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson converges in a handful of steps for sane control points
    let mut s = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < BEZIER_EPSILON {
            return bezier(y1, y2, s);
        }
        let slope = bezier_derivative(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..48 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < BEZIER_EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}

/// Fixed-duration interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Signed so that degenerate durations pass through uninterpreted.
    duration_ms: i64,
    easing: Easing,
    started_at: Instant,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: i64, easing: Easing, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            started_at,
        }
    }

    /// Linear time fraction elapsed at `now`, in `[0, 1]`.
    ///
    /// A non-positive duration is already complete.
    #[must_use]
    pub fn fraction_at(&self, now: Instant) -> f32 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0;
        (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0) as f32
    }

    /// Interpolated value at `now`. Lands exactly on the end value once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let fraction = self.fraction_at(now);
        if fraction >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction_at(now) >= 1.0
    }
}

/// Damped spring released from rest at `from`, pulled toward `to`.
///
/// Uses unit mass, so the natural frequency is `sqrt(stiffness)` in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    from: f32,
    to: f32,
    damping_ratio: f32,
    stiffness: f32,
    started_at: Instant,
}

impl Spring {
    /// Noticeable overshoot before settling.
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    /// Critically damped: fastest approach with no overshoot.
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    pub const STIFFNESS_MEDIUM: f32 = 1500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;

    pub fn new(from: f32, to: f32, damping_ratio: f32, stiffness: f32, started_at: Instant) -> Self {
        Self {
            from,
            to,
            damping_ratio,
            stiffness,
            started_at,
        }
    }

    /// Signed distance from the target `t` seconds after release.
    fn displacement(&self, t: f64) -> f64 {
        let x0 = f64::from(self.from - self.to);
        let omega = f64::from(self.stiffness).sqrt();
        let zeta = f64::from(self.damping_ratio);

        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let b = zeta * omega * x0 / damped;
            (-zeta * omega * t).exp() * (x0 * (damped * t).cos() + b * (damped * t).sin())
        } else if zeta == 1.0 {
            (-omega * t).exp() * (x0 + omega * x0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let slow = -omega * (zeta - root);
            let fast = -omega * (zeta + root);
            let c_fast = -slow * x0 / (fast - slow);
            let c_slow = x0 - c_fast;
            c_slow * (slow * t).exp() + c_fast * (fast * t).exp()
        }
    }

    /// Time after release at which the spring is within the threshold for good.
    ///
    /// `None` when the spring never settles (zero or negative damping).
    #[must_use]
    pub fn settle_time(&self) -> Option<Duration> {
        let threshold = VISIBILITY_THRESHOLD;
        let x0 = f64::from(self.from - self.to);
        if x0.abs() <= threshold {
            return Some(Duration::ZERO);
        }

        let omega = f64::from(self.stiffness).sqrt();
        let zeta = f64::from(self.damping_ratio);
        if !(zeta > 0.0 && omega > 0.0) {
            return None;
        }

        if zeta < 1.0 {
            // Envelope of the oscillation decays as amplitude * e^(-zeta * omega * t)
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let b = zeta * omega * x0 / damped;
            let amplitude = (x0 * x0 + b * b).sqrt();
            let seconds = (amplitude / threshold).ln() / (zeta * omega);
            return Some(Duration::from_secs_f64(seconds.max(0.0)));
        }

        // Released from rest, the non-oscillating cases decay monotonically
        let mut hi = 1.0 / omega;
        while self.displacement(hi).abs() > threshold {
            hi *= 2.0;
            if hi > 3600.0 {
                return None;
            }
        }
        let mut lo = 0.0;
        for _ in 0..40 {
            let mid = (lo + hi) * 0.5;
            if self.displacement(mid).abs() > threshold {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some(Duration::from_secs_f64(hi))
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if let Some(settle) = self.settle_time() {
            if elapsed >= settle {
                return self.to;
            }
        }
        (f64::from(self.to) + self.displacement(elapsed.as_secs_f64())) as f32
    }

    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.settle_time()
            .is_some_and(|settle| now.saturating_duration_since(self.started_at) >= settle)
    }
}
