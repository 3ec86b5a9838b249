use log::{debug, trace};

use super::Solver;
use crate::{
    dataset,
    error::{LinErr, Result},
    model::LinearModel,
};

const DEFAULT_LEARNING_RATE: f64 = 0.01;
const DEFAULT_EPOCHS: usize = 1000;

/// Batch gradient descent on the mean squared error.
///
/// Always runs the full epoch budget, there is no convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
    epochs: usize,
    fit_intercept: bool,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on every epoch.
    /// * `epochs` - The exact amount of full passes over the dataset.
    /// * `fit_intercept` - Whether to learn a bias term.
    pub fn new(learning_rate: f64, epochs: usize, fit_intercept: bool) -> Self {
        Self {
            learning_rate,
            epochs,
            fit_intercept,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    fn validate(&self) -> Result<()> {
        let lr = self.learning_rate;
        if !lr.is_finite() || lr < 0.0 {
            return Err(LinErr::InvalidConfig(format!(
                "learning rate must be a non-negative finite number, got {lr}"
            )));
        }

        Ok(())
    }

    /// Makes a step in the opposite direction of the accumulated gradient.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient summed over every sample.
    /// * `inv_n` - The reciprocal of the amount of samples.
    fn update_params(&self, params: &mut [f64], grad: &[f64], inv_n: f64) {
        let lr = self.learning_rate;

        for (w, g) in params.iter_mut().zip(grad) {
            *w -= lr * (g * inv_n);
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE, DEFAULT_EPOCHS, true)
    }
}

impl Solver for GradientDescent {
    fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    fn solve(&self, x: &[Vec<f64>], y: &[f64]) -> Result<LinearModel> {
        let d = dataset::validate(x, y)?;
        self.validate()?;

        let n = x.len();
        let inv_n = 1.0 / n as f64;
        debug!(
            "gradient descent over {n} samples x {d} features, lr {}, {} epochs",
            self.learning_rate, self.epochs
        );

        let mut weights = vec![0.0; d];
        let mut bias = 0.0;
        let mut grad_w = vec![0.0; d];

        for epoch in 0..self.epochs {
            grad_w.fill(0.0);
            let mut grad_b = 0.0;
            let mut sq_err = 0.0;

            for (row, target) in x.iter().zip(y) {
                let intercept = if self.fit_intercept { bias } else { 0.0 };
                let err = dataset::dot(&weights, row) + intercept - target;

                for (g, v) in grad_w.iter_mut().zip(row) {
                    *g += err * v;
                }

                grad_b += err;
                sq_err += err * err;
            }

            self.update_params(&mut weights, &grad_w, inv_n);
            if self.fit_intercept {
                self.update_params(std::slice::from_mut(&mut bias), &[grad_b], inv_n);
            }

            trace!("epoch {epoch}: mse {}", sq_err * inv_n);
        }

        Ok(LinearModel::new(weights, bias, self.fit_intercept))
    }

    fn from_model(model: &LinearModel) -> Self {
        Self {
            fit_intercept: model.fit_intercept(),
            ..Self::default()
        }
    }
}
