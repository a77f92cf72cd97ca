//! Fixed-weight scoring transform used as a stochastic perturbation source.
//!
//! This is a single-hidden-layer feedforward pass with weights sampled once
//! from a zero-mean normal distribution. It is never trained; given a seed it
//! is a deterministic nonlinear map from a feature vector to a bounded
//! positive scalar.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Standard deviation of the weight initialization
const WEIGHT_STD_DEV: f64 = 0.1;

/// Floor applied to every output to guarantee strict positivity
const MIN_OUTPUT: f64 = 0.001;

/// A fixed-weight single-hidden-layer nonlinear transform.
///
/// `predict` is a pure function of the input and the weights; the struct
/// holds no mutable state across calls.
pub struct ScoringFunction {
    /// Weight matrix, one row per input feature
    weights: Vec<Vec<f64>>,
    num_features: usize,
    num_hidden: usize,
}

impl ScoringFunction {
    /// Samples a weight matrix of shape (num_features, num_hidden) from
    /// Normal(0, 0.1) using the supplied generator
    pub fn new<R: Rng>(num_features: usize, num_hidden: usize, rng: &mut R) -> Self {
        let normal = Normal::new(0.0, WEIGHT_STD_DEV).expect("valid distribution parameters");
        let weights = (0..num_features)
            .map(|_| (0..num_hidden).map(|_| normal.sample(rng)).collect())
            .collect();
        Self {
            weights,
            num_features,
            num_hidden,
        }
    }

    /// Runs the forward pass: rectified linear hidden layer, arithmetic mean
    /// aggregation, floored at 0.001.
    ///
    /// Never returns a negative or undefined value for finite inputs; any
    /// further clamping is the caller's responsibility.
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.num_features);

        let mut sum = 0.0;
        for j in 0..self.num_hidden {
            let mut activation = 0.0;
            for (i, feature) in features.iter().enumerate() {
                activation += feature * self.weights[i][j];
            }
            sum += activation.max(0.0);
        }

        (sum / self.num_hidden as f64).max(MIN_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn output_is_floored_at_minimum() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let scoring = ScoringFunction::new(10, 5, &mut rng);
        // All-zero features drive every hidden unit to zero; the floor applies.
        assert_eq!(scoring.predict(&[0.0; 10]), MIN_OUTPUT);
    }

    #[test]
    fn output_is_never_negative() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let scoring = ScoringFunction::new(6, 3, &mut rng);
            let features = [-1.0, 0.5, -0.3, 0.9, -0.7, 0.2];
            assert!(scoring.predict(&features) >= MIN_OUTPUT);
        }
    }

    #[test]
    fn predict_is_pure() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let scoring = ScoringFunction::new(10, 5, &mut rng);
        let features = [0.3; 10];
        let first = scoring.predict(&features);
        let second = scoring.predict(&features);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn identical_seeds_yield_identical_weights() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        let scoring_a = ScoringFunction::new(10, 5, &mut rng_a);
        let scoring_b = ScoringFunction::new(10, 5, &mut rng_b);
        let features = [0.1, 0.9, 0.4, 0.2, 0.8, 0.5, 0.6, 0.3, 0.7, 0.0];
        assert_eq!(
            scoring_a.predict(&features).to_bits(),
            scoring_b.predict(&features).to_bits()
        );
    }
}
