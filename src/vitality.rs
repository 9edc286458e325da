//! Vitality weighting: how much a decaying cell counts for in a neighbor sum.
//!
//! A decaying state maps to a liveness `v` in [0, 1] (1 just after death,
//! 0 at final decay); each mode maps `v` to a signed contribution weight.
//! Engines never call the pure function per cell: weights depend only on the
//! discrete state, so they are sampled once per configure into a
//! [`WeightTable`].

use crate::error::ConfigError;
use crate::kinds::VitalityMode;

/// Required length of the user-curve sample buffer.
pub const CURVE_SAMPLES: usize = 128;

/// Curve samples and weights are confined to this range.
pub const CURVE_MIN: f32 = -2.0;
pub const CURVE_MAX: f32 = 2.0;

/// Parameters for the active vitality mode.
///
/// Mutable at any time from the caller's side; engines re-sample the weight
/// table at the next configure, so changes land on a step boundary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalitySettings {
    pub mode: VitalityMode,
    /// Liveness cutoff for Threshold, logistic midpoint for Sigmoid.
    pub threshold: f32,
    /// Signed scale for Ghost and Decay, in [-1, 1].
    pub ghost_factor: f32,
    /// Logistic steepness, in [1, 20].
    pub sigmoid_sharpness: f32,
    /// Exponent for Decay, in [0.5, 3].
    pub decay_power: f32,
    /// Exactly [`CURVE_SAMPLES`] values in [-2, 2] when mode is Curve.
    pub curve: Vec<f32>,
}

impl Default for VitalitySettings {
    fn default() -> Self {
        Self {
            mode: VitalityMode::None,
            threshold: 0.5,
            ghost_factor: 0.5,
            sigmoid_sharpness: 10.0,
            decay_power: 1.0,
            curve: Vec::new(),
        }
    }
}

impl VitalitySettings {
    pub fn new(mode: VitalityMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn ghost_factor(mut self, factor: f32) -> Self {
        self.ghost_factor = factor.clamp(-1.0, 1.0);
        self
    }

    pub fn sigmoid_sharpness(mut self, sharpness: f32) -> Self {
        self.sigmoid_sharpness = sharpness.clamp(1.0, 20.0);
        self
    }

    pub fn decay_power(mut self, power: f32) -> Self {
        self.decay_power = power.clamp(0.5, 3.0);
        self
    }

    /// Install a pre-sampled user curve and switch to Curve mode.
    /// Samples are clamped into [-2, 2]; the count must be exact.
    pub fn curve(mut self, samples: &[f32]) -> Result<Self, ConfigError> {
        if samples.len() != CURVE_SAMPLES {
            return Err(ConfigError::CurveSampleCount {
                got: samples.len(),
            });
        }
        self.mode = VitalityMode::Curve;
        self.curve = samples
            .iter()
            .map(|s| s.clamp(CURVE_MIN, CURVE_MAX))
            .collect();
        Ok(self)
    }

    /// Configure-time validation; per-cell evaluation is total afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == VitalityMode::Curve && self.curve.len() != CURVE_SAMPLES {
            return Err(ConfigError::CurveSampleCount {
                got: self.curve.len(),
            });
        }
        Ok(())
    }

    /// Contribution weight for liveness `v` in [0, 1]. Finite for every mode
    /// over the whole domain.
    pub fn weight(&self, v: f32) -> f32 {
        let v = v.clamp(0.0, 1.0);
        match self.mode {
            VitalityMode::None => 0.0,
            VitalityMode::Threshold => {
                if v >= self.threshold {
                    1.0
                } else {
                    0.0
                }
            }
            VitalityMode::Ghost => v * self.ghost_factor,
            VitalityMode::Sigmoid => {
                1.0 / (1.0 + (-(v - self.threshold) * self.sigmoid_sharpness).exp())
            }
            VitalityMode::Decay => self.ghost_factor * v.powf(self.decay_power),
            VitalityMode::Curve => sample_curve(&self.curve, v),
        }
    }
}

/// Monotone cubic (Fritsch-Carlson limited Hermite) interpolation of the
/// curve at position `v * 127`. The limiter keeps every knot interval free
/// of overshoot even when the surrounding control points are not monotonic.
fn sample_curve(curve: &[f32], v: f32) -> f32 {
    debug_assert_eq!(curve.len(), CURVE_SAMPLES);
    let pos = v * (CURVE_SAMPLES - 1) as f32;
    let i = (pos.floor() as usize).min(CURVE_SAMPLES - 2);
    let t = pos - i as f32;

    let secant = |k: usize| curve[k + 1] - curve[k];
    let tangent = |k: usize| -> f32 {
        if k == 0 {
            secant(0)
        } else if k == CURVE_SAMPLES - 1 {
            secant(CURVE_SAMPLES - 2)
        } else {
            let (a, b) = (secant(k - 1), secant(k));
            if a * b <= 0.0 {
                0.0
            } else {
                0.5 * (a + b)
            }
        }
    };

    let d = secant(i);
    let (mut m0, mut m1) = (tangent(i), tangent(i + 1));
    if d == 0.0 {
        m0 = 0.0;
        m1 = 0.0;
    } else {
        // Limit the tangent-to-secant ratios to the monotone region.
        let (alpha, beta) = (m0 / d, m1 / d);
        let s = alpha * alpha + beta * beta;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            m0 = tau * alpha * d;
            m1 = tau * beta * d;
        }
    }

    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    let y = curve[i] * h00 + m0 * h10 + curve[i + 1] * h01 + m1 * h11;
    y.clamp(CURVE_MIN, CURVE_MAX)
}

/// Liveness of a decaying state: 1 just after death, 0 at final decay.
/// Callers guarantee `2 <= state < num_states` and `num_states > 2`.
#[inline]
pub fn liveness(state: u8, num_states: u16) -> f32 {
    debug_assert!(num_states > 2 && (state as u16) < num_states && state >= 2);
    1.0 - (state as f32 - 1.0) / (num_states as f32 - 2.0)
}

/// Per-state contribution weights, sampled once at configure time.
///
/// Index by the stored cell state: dead is 0, alive is 1, decaying states
/// carry the mode weight at their liveness. Built the same way each time, so
/// both engines and any future backend share one source of truth.
#[derive(Clone, Debug)]
pub struct WeightTable {
    weights: Vec<f32>,
}

impl WeightTable {
    pub fn new(settings: &VitalitySettings, num_states: u16) -> Self {
        let mut weights = vec![0.0f32; num_states as usize];
        weights[1] = 1.0;
        for state in 2..num_states {
            weights[state as usize] = settings.weight(liveness(state as u8, num_states));
        }
        Self { weights }
    }

    #[inline(always)]
    pub fn get(&self, state: u8) -> f32 {
        self.weights[state as usize]
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
