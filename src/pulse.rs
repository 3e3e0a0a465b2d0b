//! Pulse animation function
//!
//! The sphere's size follows `BASE_SCALE + PULSE_AMPLITUDE * sin(speed * t)`,
//! evaluated once per rendered frame. The result always lies in
//! `[BASE_SCALE - PULSE_AMPLITUDE, BASE_SCALE + PULSE_AMPLITUDE]`.

use bevy::math::Vec3;
use std::f32::consts::TAU;

use crate::config::animation::{BASE_SCALE, PULSE_AMPLITUDE};

/// Uniform scale factor for the given speed (angular frequency) and elapsed seconds
pub fn pulse_scale(speed: f32, elapsed: f32) -> f32 {
    BASE_SCALE + PULSE_AMPLITUDE * (speed * elapsed).sin()
}

/// [`pulse_scale`] applied to all three axes
pub fn pulse_transform_scale(speed: f32, elapsed: f32) -> Vec3 {
    Vec3::splat(pulse_scale(speed, elapsed))
}

/// Seconds per full pulse cycle, `None` when the sphere is not pulsing
pub fn pulse_period(speed: f32) -> Option<f32> {
    if speed == 0.0 || !speed.is_finite() {
        return None;
    }
    Some(TAU / speed.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f32 = 1e-4;

    #[rstest]
    #[case(0.1)]
    #[case(1.0)]
    #[case(2.0)]
    #[case(3.0)]
    fn scale_stays_within_bounds(#[case] speed: f32) {
        for i in 0..2000 {
            let t = i as f32 * 0.037;
            let scale = pulse_scale(speed, t);
            assert!((0.5..=1.5).contains(&scale), "speed {speed} t {t} -> {scale}");
        }
    }

    #[rstest]
    #[case(0.1)]
    #[case(1.7)]
    #[case(3.0)]
    #[case(-2.0)]
    fn scale_at_time_zero_is_base(#[case] speed: f32) {
        assert_eq!(pulse_scale(speed, 0.0), 1.0);
    }

    #[rstest]
    #[case(0.1, 0.25)]
    #[case(1.0, 1.3)]
    #[case(2.5, 4.0)]
    fn scale_repeats_every_period(#[case] speed: f32, #[case] t: f32) {
        let period = pulse_period(speed).unwrap();
        let a = pulse_scale(speed, t);
        let b = pulse_scale(speed, t + period);
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn peak_and_trough_reach_the_extremes() {
        let speed = 2.0;
        let quarter = pulse_period(speed).unwrap() / 4.0;
        assert!((pulse_scale(speed, quarter) - 1.5).abs() < EPS);
        assert!((pulse_scale(speed, 3.0 * quarter) - 0.5).abs() < EPS);
    }

    #[test]
    fn zero_speed_holds_base_scale() {
        assert_eq!(pulse_scale(0.0, 123.0), 1.0);
        assert_eq!(pulse_period(0.0), None);
    }

    #[test]
    fn transform_scale_is_uniform() {
        let v = pulse_transform_scale(1.0, 0.8);
        assert_eq!(v.x, v.y);
        assert_eq!(v.y, v.z);
        assert_eq!(v.x, pulse_scale(1.0, 0.8));
    }
}
