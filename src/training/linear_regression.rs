use std::path::Path;

use log::debug;

use super::{FitStats, Regressor};
use crate::{
    error::{LinErr, Result},
    metrics,
    model::LinearModel,
    optimization::Solver,
};

/// A linear regressor trained by the solver `S`.
///
/// Owns its hyperparameters (the solver) and, once fitted or loaded, its parameters.
#[derive(Debug, Clone)]
pub struct LinearRegression<S: Solver> {
    solver: S,
    model: Option<LinearModel>,
    stats: Option<FitStats>,
}

impl<S: Solver> LinearRegression<S> {
    /// Returns a new unfitted `LinearRegression`.
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            model: None,
            stats: None,
        }
    }

    /// Wraps already known parameters, e.g. ones decoded from a stream.
    pub fn with_model(solver: S, model: LinearModel) -> Self {
        Self {
            solver,
            model: Some(model),
            stats: None,
        }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Statistics of the last successful `fit`, `None` for unfitted or loaded models.
    pub fn last_fit(&self) -> Option<FitStats> {
        self.stats
    }

    /// Loads a model saved by [`Regressor::save`] and rebuilds its trainer.
    ///
    /// Files only store `fit_intercept` and the ridge penalty, every other hyperparameter
    /// comes from [`Solver::from_model`]. A loaded `GradientDescent` trainer uses the
    /// default learning rate and epoch count if it is fit again.
    ///
    /// # Errors
    /// See [`LinearModel::load`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model = LinearModel::load(path)?;
        Ok(Self::with_model(S::from_model(&model), model))
    }

    fn fitted(&self) -> Result<&LinearModel> {
        self.model.as_ref().ok_or(LinErr::NotFitted)
    }
}

impl<S: Solver + Default> Default for LinearRegression<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Solver> Regressor for LinearRegression<S> {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let model = self.solver.solve(x, y)?;
        let y_pred = model.predict(x)?;
        let mse = metrics::mean_squared_error(y, &y_pred)?;
        let stats = FitStats::new(x.len(), model.n_features(), mse);

        debug!(
            "fitted {} weights, bias {}, training mse {}",
            model.n_features(),
            model.bias(),
            stats.mse()
        );

        self.model = Some(model);
        self.stats = Some(stats);
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        self.fitted()?.predict(x)
    }

    fn score(&self, x: &[Vec<f64>], y: &[f64]) -> Result<f64> {
        self.fitted()?.score(x, y)
    }

    fn model(&self) -> Option<&LinearModel> {
        self.model.as_ref()
    }
}
