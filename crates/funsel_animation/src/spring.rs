//! Spring easing curve
//!
//! A damped oscillator around the rest value `1.0`. The oscillation
//! envelope shrinks linearly with `(1 - t)`, so every curve lands exactly
//! on `1.0` at `t = 1.0` whatever its amplitude, pulsation or phase.

use std::f64::consts::PI;

use thiserror::Error;

/// Errors raised when constructing a [`SpringInterpolator`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpringError {
    /// A parameter would make the pulsation undefined or non-finite
    #[error("invalid spring parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result type for spring construction
pub type Result<T> = std::result::Result<T, SpringError>;

/// Spring/bounce easing curve
///
/// Immutable once built. `pulsation = sqrt(stiffness / mass)` is cached at
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringInterpolator {
    /// How far the curve may swing away from its resting value
    amplitude: f64,
    /// Inertia: heavier springs oscillate slower and longer
    mass: f64,
    /// Spring constant: stiffer springs oscillate faster
    stiffness: f64,
    /// Phase offset in radians
    phase: f64,
    /// Reflect negative excursions instead of oscillating around rest
    bounce: bool,
    pulsation: f64,
}

impl SpringInterpolator {
    pub const DEFAULT_AMPLITUDE: f64 = 1.0;
    pub const DEFAULT_MASS: f64 = 0.058;
    pub const DEFAULT_STIFFNESS: f64 = 12.0;
    pub const DEFAULT_PHASE: f64 = 0.0;

    /// Create a spring curve, rejecting parameters that would yield NaN
    pub fn new(amplitude: f64, mass: f64, stiffness: f64, phase: f64, bounce: bool) -> Result<Self> {
        finite("amplitude", amplitude)?;
        finite("mass", mass)?;
        finite("stiffness", stiffness)?;
        finite("phase", phase)?;

        if mass <= 0.0 {
            return Err(SpringError::InvalidParameter {
                name: "mass",
                value: mass,
                reason: "must be greater than zero",
            });
        }
        if stiffness < 0.0 {
            return Err(SpringError::InvalidParameter {
                name: "stiffness",
                value: stiffness,
                reason: "must not be negative",
            });
        }

        let pulsation = (stiffness / mass).sqrt();
        if !pulsation.is_finite() {
            // e.g. a subnormal mass overflowing the ratio
            return Err(SpringError::InvalidParameter {
                name: "mass",
                value: mass,
                reason: "stiffness / mass overflows",
            });
        }

        Ok(Self {
            amplitude,
            mass,
            stiffness,
            phase,
            bounce,
            pulsation,
        })
    }

    /// The bouncing spring used by the selector's sliding rectangle
    pub fn selector_bounce() -> Self {
        Self {
            amplitude: 0.75,
            mass: 0.058,
            stiffness: 5.0,
            phase: 0.0,
            bounce: true,
            pulsation: (5.0f64 / 0.058).sqrt(),
        }
    }

    /// Evaluate the curve at normalized time `t`
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the
    /// oscillation.
    #[inline]
    pub fn curve(&self, t: f64) -> f64 {
        let raw = -(self.pulsation * t + self.phase + PI).cos() * (1.0 - t) * self.amplitude;
        if self.bounce {
            1.0 - raw.abs()
        } else {
            1.0 - raw
        }
    }

    /// Blend between `start` and `end` using the curve value at `t`
    pub fn interpolate(&self, start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * self.curve(t)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_bounce(&self) -> bool {
        self.bounce
    }

    /// Angular frequency of the oscillation
    pub fn pulsation(&self) -> f64 {
        self.pulsation
    }
}

impl Default for SpringInterpolator {
    fn default() -> Self {
        Self {
            amplitude: Self::DEFAULT_AMPLITUDE,
            mass: Self::DEFAULT_MASS,
            stiffness: Self::DEFAULT_STIFFNESS,
            phase: Self::DEFAULT_PHASE,
            bounce: false,
            pulsation: (Self::DEFAULT_STIFFNESS / Self::DEFAULT_MASS).sqrt(),
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpringError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
