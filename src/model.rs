use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    dataset::{self, Vector},
    error::{LinErr, Result},
    metrics,
    serialization::{self, FORMAT_VERSION, FormatOptions},
};

/// The learned parameters of a linear model `y = X·w + b`.
///
/// A `LinearModel` is always complete: the feature count is the length of the
/// weight vector, so both can only change together.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Vector,
    bias: f64,
    fit_intercept: bool,
    l2_lambda: Option<f64>,
}

impl LinearModel {
    /// Creates a new `LinearModel`.
    ///
    /// # Arguments
    /// * `weights` - One weight per feature.
    /// * `bias` - The additive intercept, only used when `fit_intercept` is set.
    /// * `fit_intercept` - Whether the model has an intercept term.
    pub fn new(weights: Vector, bias: f64, fit_intercept: bool) -> Self {
        Self {
            weights,
            bias,
            fit_intercept,
            l2_lambda: None,
        }
    }

    /// Tags the model with the ridge penalty it was solved with.
    pub fn with_l2_lambda(mut self, l2_lambda: f64) -> Self {
        self.l2_lambda = Some(l2_lambda);
        self
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// The ridge penalty, for models produced by the closed-form solver.
    pub fn l2_lambda(&self) -> Option<f64> {
        self.l2_lambda
    }

    fn intercept(&self) -> f64 {
        if self.fit_intercept { self.bias } else { 0.0 }
    }

    /// Predicts one target per row of `x`.
    ///
    /// # Errors
    /// `ShapeErr::FeatureCount` if any row width differs from `n_features`.
    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vector> {
        dataset::validate_features(x, self.n_features())?;

        let b = self.intercept();
        Ok(x.iter().map(|row| dataset::dot(&self.weights, row) + b).collect())
    }

    /// Returns the R² score of the model's predictions on `(x, y)`.
    ///
    /// # Errors
    /// Any validation error of `(x, y)`, or a feature count mismatch.
    pub fn score(&self, x: &[Vec<f64>], y: &[f64]) -> Result<f64> {
        dataset::validate(x, y)?;
        let y_pred = self.predict(x)?;
        metrics::r2_score(y, &y_pred)
    }

    /// Writes the model to `path` in the current format.
    ///
    /// # Errors
    /// `LinErr::FileAccess` if the file can't be created, `LinErr::Io` if writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_with(path, &FormatOptions::default())
    }

    /// Writes the model to `path` using explicit format options.
    pub fn save_with<P: AsRef<Path>>(&self, path: P, options: &FormatOptions) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| LinErr::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        serialization::encode(self, &mut writer, options)?;
        writer.flush()?;

        info!("saved model with {} features to {}", self.n_features(), path.display());
        Ok(())
    }

    /// Reads a model previously written by [`LinearModel::save`].
    ///
    /// # Errors
    /// `LinErr::FileAccess` if the file can't be opened, or any decoding error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LinErr::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let model = serialization::decode(BufReader::new(file), FORMAT_VERSION)?;
        info!("loaded model with {} features from {}", model.n_features(), path.display());
        Ok(model)
    }
}
