//! Classification algorithms.
//!
//! Currently a single-neuron [`Perceptron`] with a step activation, trained
//! online with the classic perceptron update rule.
//!
//! # Example
//!
//! ```
//! use densevec::classification::{Perceptron, PerceptronConfig};
//! use densevec::prelude::*;
//!
//! // AND gate
//! let inputs = vec![
//!     Vector::from_slice(&[0.0, 0.0]),
//!     Vector::from_slice(&[0.0, 1.0]),
//!     Vector::from_slice(&[1.0, 0.0]),
//!     Vector::from_slice(&[1.0, 1.0]),
//! ];
//! let targets = [0.0, 0.0, 0.0, 1.0];
//!
//! let config = PerceptronConfig::default()
//!     .with_learning_rate(0.1)
//!     .with_max_epochs(100);
//! let mut model = Perceptron::with_config(2, config).expect("valid config");
//! let summary = model.fit(&inputs, &targets).expect("training data is valid");
//!
//! assert!(summary.converged);
//! for (x, &t) in inputs.iter().zip(targets.iter()) {
//!     assert_eq!(model.predict(x).expect("input has 2 features"), t);
//! }
//! ```

use crate::error::{Result, VectorError};
use crate::primitives::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Perceptron hyperparameters.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    /// Step size of each weight update (default: 0.01)
    pub learning_rate: f64,
    /// Activation fires when the weighted sum reaches this value (default: 0.0)
    pub threshold: f64,
    /// Epoch budget for [`Perceptron::fit`] (default: 1000)
    pub max_epochs: usize,
    /// Seed for random weight initialisation; zeros when `None` (default: None)
    pub random_state: Option<u64>,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            threshold: 0.0,
            max_epochs: 1000,
            random_state: None,
        }
    }
}

impl PerceptronConfig {
    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the activation threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the epoch budget.
    #[must_use]
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Sets the seed for random weight initialisation.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Checks every hyperparameter against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidHyperparameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(VectorError::InvalidHyperparameter {
                param: "learning_rate",
                value: self.learning_rate.to_string(),
                constraint: "finite and > 0",
            });
        }
        if !self.threshold.is_finite() {
            return Err(VectorError::InvalidHyperparameter {
                param: "threshold",
                value: self.threshold.to_string(),
                constraint: "finite",
            });
        }
        if self.max_epochs == 0 {
            return Err(VectorError::InvalidHyperparameter {
                param: "max_epochs",
                value: self.max_epochs.to_string(),
                constraint: ">= 1",
            });
        }
        Ok(())
    }
}

/// Outcome of [`Perceptron::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Epochs actually run
    pub epochs: usize,
    /// True if the last epoch classified every sample correctly
    pub converged: bool,
    /// Misclassified samples in the last epoch
    pub final_errors: usize,
}

/// Single-neuron linear classifier with a step activation.
///
/// Owns its weight vector and bias. Outputs are `0.0` or `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vector,
    bias: f64,
    config: PerceptronConfig,
}

impl Perceptron {
    /// Creates a perceptron with `n_inputs` zero weights, zero bias and
    /// the default configuration.
    #[must_use]
    pub fn new(n_inputs: usize) -> Self {
        Self {
            weights: Vector::zeros(n_inputs),
            bias: 0.0,
            config: PerceptronConfig::default(),
        }
    }

    /// Creates a perceptron with a validated configuration.
    ///
    /// When `config.random_state` is set, weights and bias are drawn from
    /// U(-0.5, 0.5) with a generator seeded from it.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidHyperparameter`] if the config is invalid.
    pub fn with_config(n_inputs: usize, config: PerceptronConfig) -> Result<Self> {
        config.validate()?;

        let (weights, bias) = match config.random_state {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                let weights: Vector = (0..n_inputs).map(|_| rng.gen_range(-0.5..0.5)).collect();
                (weights, rng.gen_range(-0.5..0.5))
            }
            None => (Vector::zeros(n_inputs), 0.0),
        };

        Ok(Self {
            weights,
            bias,
            config,
        })
    }

    /// Number of inputs the perceptron expects.
    #[must_use]
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Current weights.
    #[must_use]
    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    /// Current bias.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PerceptronConfig {
        &self.config
    }

    /// Computes `weights · input + bias`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if `input` has the wrong length.
    pub fn weighted_sum(&self, input: &Vector) -> Result<f64> {
        Ok(self.weights.dot(input)? + self.bias)
    }

    /// Classifies `input`: `1.0` if the weighted sum reaches the threshold,
    /// otherwise `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if `input` has the wrong length.
    pub fn predict(&self, input: &Vector) -> Result<f64> {
        let z = self.weighted_sum(input)?;
        Ok(if z >= self.config.threshold { 1.0 } else { 0.0 })
    }

    /// Runs one online update on a single sample and returns the error
    /// `target - prediction` (one of -1, 0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] for a wrong-length input and
    /// [`VectorError::InvalidArgument`] if `target` is not 0 or 1. The
    /// perceptron is left unchanged on error.
    pub fn train(&mut self, input: &Vector, target: f64) -> Result<f64> {
        validate_target(target)?;
        let error = target - self.predict(input)?;
        if error != 0.0 {
            let step = self.config.learning_rate * error;
            for (w, x) in self.weights.as_mut_slice().iter_mut().zip(input.iter()) {
                *w += step * x;
            }
            self.bias += step;
            trace!(error, bias = self.bias, "perceptron weights updated");
        }
        Ok(error)
    }

    /// Trains over `inputs` in order for up to `max_epochs` epochs, stopping
    /// after the first epoch without a misclassification.
    ///
    /// Every sample is validated before any weight changes.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] when there are no samples,
    /// [`VectorError::SizeMismatch`] when sample and target counts differ or
    /// a sample has the wrong length, and [`VectorError::InvalidArgument`]
    /// for a non-binary target.
    pub fn fit(&mut self, inputs: &[Vector], targets: &[f64]) -> Result<TrainingSummary> {
        if inputs.is_empty() {
            return Err(VectorError::empty("fit"));
        }
        if inputs.len() != targets.len() {
            return Err(VectorError::size_mismatch(
                "fit",
                inputs.len(),
                targets.len(),
            ));
        }
        for (input, &target) in inputs.iter().zip(targets) {
            if input.len() != self.n_inputs() {
                return Err(VectorError::size_mismatch(
                    "fit",
                    self.n_inputs(),
                    input.len(),
                ));
            }
            validate_target(target)?;
        }

        let mut errors = 0;
        for epoch in 1..=self.config.max_epochs {
            errors = 0;
            for (input, &target) in inputs.iter().zip(targets) {
                if self.train(input, target)? != 0.0 {
                    errors += 1;
                }
            }
            debug!(epoch, errors, "perceptron epoch finished");

            if errors == 0 {
                info!(epochs = epoch, "perceptron converged");
                return Ok(TrainingSummary {
                    epochs: epoch,
                    converged: true,
                    final_errors: 0,
                });
            }
        }

        warn!(
            max_epochs = self.config.max_epochs,
            final_errors = errors,
            "perceptron did not converge"
        );
        Ok(TrainingSummary {
            epochs: self.config.max_epochs,
            converged: false,
            final_errors: errors,
        })
    }

    /// Fraction of samples classified correctly.
    ///
    /// # Errors
    ///
    /// Same input validation as [`Perceptron::fit`].
    pub fn score(&self, inputs: &[Vector], targets: &[f64]) -> Result<f64> {
        if inputs.is_empty() {
            return Err(VectorError::empty("score"));
        }
        if inputs.len() != targets.len() {
            return Err(VectorError::size_mismatch(
                "score",
                inputs.len(),
                targets.len(),
            ));
        }
        let mut correct = 0_usize;
        for (input, &target) in inputs.iter().zip(targets) {
            if self.predict(input)? == target {
                correct += 1;
            }
        }
        Ok(correct as f64 / inputs.len() as f64)
    }
}

fn validate_target(target: f64) -> Result<()> {
    if target != 0.0 && target != 1.0 {
        return Err(VectorError::invalid_argument(format!(
            "target must be 0 or 1, got {target}"
        )));
    }
    Ok(())
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weights: {} bias: {:.2}", self.weights, self.bias)
    }
}
