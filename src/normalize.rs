//! Bias/gain intensity normalization
//!
//! Maps raw intensity samples onto a zero-mean, unit-variance-like scale
//! via the affine transform `(x + bias) * gain`, where `bias` is the
//! negated sample mean and `gain` the reciprocal standard deviation.

use thiserror::Error;

/// Faults raised while deriving normalization parameters
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Cannot derive bias/gain from an empty sample buffer")]
    EmptyInput,

    /// Standard deviation is zero (or not finite), so `1/stddev` is undefined
    #[error("Degenerate intensity distribution: standard deviation is {stddev}")]
    DegenerateDistribution { stddev: f64 },
}

/// Immutable affine normalization parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasGain {
    pub bias: f32,
    pub gain: f32,
}

impl BiasGain {
    #[must_use]
    pub fn new(bias: f32, gain: f32) -> Self {
        Self { bias, gain }
    }

    /// The neutral pair: `apply` becomes the identity function
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            bias: 0.0,
            gain: 1.0,
        }
    }

    /// Derive `bias = -mean` and `gain = 1/stddev` from raw samples
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty or all samples share the
    /// same value (zero standard deviation).
    pub fn from_samples(samples: &[f32]) -> Result<Self, NormalizeError> {
        let (mean, stddev) = mean_stddev(samples).ok_or(NormalizeError::EmptyInput)?;

        if stddev == 0.0 || !stddev.is_finite() {
            return Err(NormalizeError::DegenerateDistribution { stddev });
        }

        Ok(Self {
            bias: (-mean) as f32,
            gain: (1.0 / stddev) as f32,
        })
    }

    #[inline(always)]
    #[must_use]
    // Hot path: called for every pixel during normalization
    pub fn apply(&self, value: f32) -> f32 {
        (value + self.bias) * self.gain
    }

    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.bias == 0.0 && self.gain == 1.0
    }
}

/// Apply `(x + bias) * gain` elementwise, returning a new buffer
#[must_use]
pub fn apply_bias_gain(values: &[f32], params: BiasGain) -> Vec<f32> {
    values.iter().map(|&v| params.apply(v)).collect()
}

/// In-place variant of [`apply_bias_gain`] for large pixel buffers
pub fn apply_bias_gain_in_place(values: &mut [f32], params: BiasGain) {
    for v in values.iter_mut() {
        *v = params.apply(*v);
    }
}

/// Two-pass mean and population standard deviation, accumulated in f64
///
/// Returns `None` for an empty buffer.
#[must_use]
pub fn mean_stddev(samples: &[f32]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().map(|&v| f64::from(v)).sum::<f64>() / n;

    let variance = samples
        .iter()
        .map(|&v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Some((mean, variance.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    #[test]
    fn test_apply_bias_gain_elementwise() {
        let values = [0.0_f32, 1.0, -3.5, 128.0, 4096.0];
        let params = BiasGain::new(-2.0, 0.25);

        let out = apply_bias_gain(&values, params);
        assert_eq!(out.len(), values.len());
        for (&x, &y) in values.iter().zip(&out) {
            assert_relative_eq!(y, (x + -2.0) * 0.25);
        }
    }

    #[test]
    fn test_in_place_matches_allocating_variant() {
        let values = [10.0_f32, 20.0, 30.0, 40.0];
        let params = BiasGain::new(-25.0, 0.1);

        let expected = apply_bias_gain(&values, params);
        let mut buf = values;
        apply_bias_gain_in_place(&mut buf, params);
        assert_eq!(buf.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_not_idempotent_unless_identity() {
        let values = [1.0_f32, 2.0, 3.0];

        // A non-neutral pair applied twice differs from applied once
        let params = BiasGain::new(-1.0, 0.5);
        let once = apply_bias_gain(&values, params);
        let twice = apply_bias_gain(&once, params);
        assert_ne!(once, twice);

        // The identity pair is idempotent
        let identity = BiasGain::identity();
        assert!(identity.is_identity());
        let once = apply_bias_gain(&values, identity);
        let twice = apply_bias_gain(&once, identity);
        assert_eq!(once, twice);
        assert_eq!(once.as_slice(), values.as_slice());
    }

    #[test]
    fn test_mean_stddev_known_distribution() {
        // Eight 10s and eight 30s: mean 20, population stddev 10
        let mut samples = vec![10.0_f32; 8];
        samples.extend(vec![30.0_f32; 8]);

        let (mean, stddev) = mean_stddev(&samples).unwrap();
        assert_relative_eq!(mean, 20.0);
        assert_relative_eq!(stddev, 10.0);
    }

    #[test]
    fn test_mean_stddev_empty() {
        assert!(mean_stddev(&[]).is_none());
    }

    #[test]
    fn test_from_samples_derives_bias_and_gain() {
        let mut samples = vec![10.0_f32; 8];
        samples.extend(vec![30.0_f32; 8]);

        let params = BiasGain::from_samples(&samples).unwrap();
        assert_relative_eq!(params.bias, -20.0);
        assert_relative_eq!(params.gain, 0.1);

        // Normalized samples have zero mean and unit variance
        let normalized = apply_bias_gain(&samples, params);
        let (mean, stddev) = mean_stddev(&normalized).unwrap();
        assert_relative_eq!(mean, 0.0, epsilon = 1e-6);
        assert_relative_eq!(stddev, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_from_samples_rejects_empty() {
        assert_matches!(
            BiasGain::from_samples(&[]),
            Err(NormalizeError::EmptyInput)
        );
    }

    #[test]
    fn test_from_samples_rejects_constant_buffer() {
        let samples = vec![42.0_f32; 64];
        assert_matches!(
            BiasGain::from_samples(&samples),
            Err(NormalizeError::DegenerateDistribution { .. })
        );
    }
}
