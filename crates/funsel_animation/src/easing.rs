//! Easing functions for animations

use crate::spring::SpringInterpolator;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerate over the first 20%, then move at constant speed
    EaseIn,
    /// Move at constant speed, then decelerate over the last 20%
    EaseOut,
    /// Accelerate over the first 20% and decelerate over the last 20%
    EaseBoth,
    /// Damped spring or bounce, see [`SpringInterpolator`]
    Spring(SpringInterpolator),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => {
                if t < 0.2 {
                    25.0 / 9.0 * t * t
                } else {
                    10.0 / 9.0 * t - 1.0 / 9.0
                }
            }
            Easing::EaseOut => {
                if t > 0.8 {
                    -25.0 / 9.0 * t * t + 50.0 / 9.0 * t - 16.0 / 9.0
                } else {
                    10.0 / 9.0 * t
                }
            }
            // SMIL-style acceleration = deceleration = 0.2
            Easing::EaseBoth => {
                if t < 0.2 {
                    3.125 * t * t
                } else if t > 0.8 {
                    -3.125 * t * t + 6.25 * t - 2.125
                } else {
                    1.25 * t - 0.125
                }
            }
            // Evaluated in f64 so the oscillation stays smooth at high frame rates
            Easing::Spring(spring) => spring.curve(t as f64) as f32,
        }
    }

    /// The selector's bouncing spring as an easing
    pub fn spring() -> Self {
        Easing::Spring(SpringInterpolator::selector_bounce())
    }
}

impl From<SpringInterpolator> for Easing {
    fn from(spring: SpringInterpolator) -> Self {
        Easing::Spring(spring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseBoth];

    #[test]
    fn test_endpoints() {
        for easing in ALL.into_iter().chain([Easing::spring()]) {
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-5,
                "Easing {:?} should end at 1",
                easing
            );
        }
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "Easing {:?} should start at 0", easing);
        }
    }

    #[test]
    fn test_continuous_at_joins() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseBoth] {
            for join in [0.2f32, 0.8] {
                let below = easing.apply(join - 1e-4);
                let above = easing.apply(join + 1e-4);
                assert!((below - above).abs() < 1e-3, "Easing {:?} jumps at {join}", easing);
            }
        }
        assert!((Easing::EaseBoth.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "Easing {:?} should be monotonic", easing);
                prev = v;
            }
        }
    }

    #[test]
    fn test_spring_easing_matches_curve() {
        let spring = SpringInterpolator::selector_bounce();
        let easing = Easing::from(spring);
        assert!((easing.apply(0.3) as f64 - spring.curve(0.3f32 as f64)).abs() < 1e-6);
        assert!((easing.apply(0.0) - 0.25).abs() < 1e-6);
    }
}
