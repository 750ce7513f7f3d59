//! Phase-Angle Power Control Math
//!
//! ## Background
//!
//! A TRIAC fired at angle α after each zero crossing conducts for the rest
//! of that half cycle. For a resistive load the delivered power, as a
//! fraction of full-wave power, is:
//!
//! ```text
//! P(α) = (π - α + sin(2α)/2) / π        α ∈ [0, π]
//!
//! P(0) = 1     fire at the crossing, full power
//! P(π) = 0     never fire
//! dP/dα = (cos(2α) - 1) / π ≤ 0
//! ```
//!
//! Power is not linear in α: moving the firing point near the peak of the
//! sine changes power far more than moving it near a crossing. The table
//! inverts `P` so that equal index steps give equal power steps.
//!
//! `P` has no closed-form inverse, and being monotonic, bisection converges
//! unconditionally. 60 halvings of `[0, π]` reach f64 resolution.
//!
//! This file is also compiled into `build.rs`; it depends on `libm` only.

use core::f64::consts::PI;

/// Bisection steps when inverting the power curve.
pub const BISECTION_ITERATIONS: u32 = 60;

/// Fraction of full-wave power delivered when firing at `alpha` radians.
pub fn conduction_fraction(alpha: f64) -> f64 {
    (PI - alpha + libm::sin(2.0 * alpha) / 2.0) / PI
}

/// Firing angle (radians) that delivers `fraction` of full power.
///
/// Fractions outside `[0, 1]` saturate.
pub fn firing_angle(fraction: f64) -> f64 {
    if fraction.is_nan() || fraction <= 0.0 {
        return PI;
    }
    if fraction >= 1.0 {
        return 0.0;
    }

    let (mut lo, mut hi) = (0.0, PI);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        // P is decreasing: too much power means fire later
        if conduction_fraction(mid) > fraction {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Exact number of timer ticks in one mains half cycle.
pub fn half_cycle_ticks(uc_freq_hz: u32, prescaler: u16, ac_freq_hz: u16) -> f64 {
    let tick_hz = uc_freq_hz as f64 / prescaler as f64;
    tick_hz / (2.0 * ac_freq_hz as f64)
}

/// Firing delay in ticks for `level` out of `samples` evenly spaced levels.
///
/// `samples` must be at least 2; level `samples - 1` is full power.
pub fn firing_delay_ticks(level: usize, samples: usize, half_cycle: f64) -> u32 {
    let top = samples.saturating_sub(1).max(1);
    let fraction = level as f64 / top as f64;
    libm::round(firing_angle(fraction) / PI * half_cycle) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_HALF_CYCLE: f64 = 2_000_000.0 / 120.0;

    #[test]
    fn power_curve_endpoints() {
        assert!((conduction_fraction(0.0) - 1.0).abs() < 1e-12);
        assert!(conduction_fraction(PI).abs() < 1e-12);
        // Firing at the peak delivers exactly half the power
        assert!((conduction_fraction(PI / 2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn firing_angle_inverts_power_curve() {
        for &p in &[0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let alpha = firing_angle(p);
            assert!((conduction_fraction(alpha) - p).abs() < 1e-9, "p = {}", p);
        }
    }

    #[test]
    fn firing_angle_saturates() {
        assert_eq!(firing_angle(0.0), PI);
        assert_eq!(firing_angle(-0.5), PI);
        assert_eq!(firing_angle(f64::NAN), PI);
        assert_eq!(firing_angle(1.0), 0.0);
        assert_eq!(firing_angle(3.0), 0.0);
    }

    #[test]
    fn reference_half_cycle() {
        let ticks = half_cycle_ticks(16_000_000, 8, 60);
        assert!((ticks - REFERENCE_HALF_CYCLE).abs() < 1e-9);

        // 50Hz mains gives a longer half cycle
        assert!((half_cycle_ticks(16_000_000, 8, 50) - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn delay_endpoints() {
        assert_eq!(firing_delay_ticks(0, 501, REFERENCE_HALF_CYCLE), 16667);
        assert_eq!(firing_delay_ticks(500, 501, REFERENCE_HALF_CYCLE), 0);
        // Half power fires at the peak, a quarter cycle in
        assert_eq!(firing_delay_ticks(250, 501, REFERENCE_HALF_CYCLE), 8333);
    }
}
