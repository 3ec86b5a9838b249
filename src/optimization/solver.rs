use crate::{error::Result, model::LinearModel};

/// A strategy that fits the parameters of a linear model to a dataset.
pub trait Solver {
    /// Whether the produced models learn an intercept.
    fn fit_intercept(&self) -> bool;

    /// Fits a fresh model to `(x, y)`.
    ///
    /// Implementations validate the dataset and their own hyperparameters before doing
    /// any numeric work, and never touch a previously fitted model.
    ///
    /// # Errors
    /// Shape errors for invalid datasets, `LinErr::InvalidConfig` for unusable
    /// hyperparameters, plus any strategy specific failure.
    fn solve(&self, x: &[Vec<f64>], y: &[f64]) -> Result<LinearModel>;

    /// Rebuilds a solver matching the hyperparameters recorded in a loaded model.
    fn from_model(model: &LinearModel) -> Self
    where
        Self: Sized;
}
