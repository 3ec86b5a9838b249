use std::path::Path;

use crate::{
    error::{LinErr, Result},
    model::LinearModel,
};

/// A trainable linear regressor.
///
/// Abstracts over the fitting strategy so callers can hold any trainer as a
/// `Box<dyn Regressor>`.
pub trait Regressor {
    /// Fits the model to `(x, y)`, replacing any previous parameters on success.
    ///
    /// On failure the previous parameters are left untouched.
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predicts one target per row of `x`.
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Returns the R² score of the predictions on `(x, y)`.
    fn score(&self, x: &[Vec<f64>], y: &[f64]) -> Result<f64>;

    /// The fitted parameters, if any.
    fn model(&self) -> Option<&LinearModel>;

    /// Writes the fitted parameters to `path`.
    ///
    /// # Errors
    /// `LinErr::NotFitted` if there is nothing to save yet, otherwise see
    /// [`LinearModel::save`].
    fn save(&self, path: &Path) -> Result<()> {
        self.model().ok_or(LinErr::NotFitted)?.save(path)
    }
}
