use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{LinErr, Result},
    optimization::{GradientDescent, NormalEquation},
};

fn default_learning_rate() -> f64 {
    GradientDescent::default().learning_rate()
}

fn default_epochs() -> usize {
    GradientDescent::default().epochs()
}

fn default_fit_intercept() -> bool {
    true
}

/// The specification for a `Regressor`.
///
/// Missing fields take the solver's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum TrainerSpec {
    GradientDescent {
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
        #[serde(default = "default_epochs")]
        epochs: usize,
        #[serde(default = "default_fit_intercept")]
        fit_intercept: bool,
    },
    RidgeNormalEquation {
        #[serde(default)]
        l2_lambda: f64,
        #[serde(default = "default_fit_intercept")]
        fit_intercept: bool,
    },
}

impl TrainerSpec {
    /// Parses a spec from a JSON document.
    ///
    /// # Errors
    /// `LinErr::Config` if the document isn't a valid spec.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON spec file.
    ///
    /// # Errors
    /// `LinErr::FileAccess` if the file can't be read, `LinErr::Config` if it isn't a valid spec.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LinErr::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }
}
