use std::path::Path;

use log::info;

use super::{LinearRegression, Regressor};
use crate::{
    error::Result,
    model::LinearModel,
    optimization::{GradientDescent, NormalEquation, Solver},
    specs::TrainerSpec,
};

/// Builds `Regressor`s given a specification.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new unfitted `Regressor` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the trainer.
    pub fn build(&self, spec: &TrainerSpec) -> Box<dyn Regressor> {
        match *spec {
            TrainerSpec::GradientDescent {
                learning_rate,
                epochs,
                fit_intercept,
            } => self.terminate_build(GradientDescent::new(learning_rate, epochs, fit_intercept)),
            TrainerSpec::RidgeNormalEquation {
                l2_lambda,
                fit_intercept,
            } => self.terminate_build(NormalEquation::new(l2_lambda, fit_intercept)),
        }
    }

    /// Loads a saved model and wraps it in the trainer that produced it.
    ///
    /// Files carrying an `l2_lambda` come from the closed-form solver, every other
    /// file is restored as a gradient descent trainer with the default learning rate
    /// and epoch count.
    ///
    /// # Errors
    /// See [`LinearModel::load`].
    pub fn restore<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn Regressor>> {
        let model = LinearModel::load(path)?;
        let trainer = match model.l2_lambda() {
            Some(_) => self.resolve_model::<NormalEquation>(model),
            None => self.resolve_model::<GradientDescent>(model),
        };

        Ok(trainer)
    }

    fn resolve_model<S>(&self, model: LinearModel) -> Box<dyn Regressor>
    where
        S: Solver + 'static,
    {
        let solver = S::from_model(&model);
        Box::new(LinearRegression::with_model(solver, model))
    }

    fn terminate_build<S>(&self, solver: S) -> Box<dyn Regressor>
    where
        S: Solver + std::fmt::Debug + 'static,
    {
        info!("building trainer {solver:?}");
        Box::new(LinearRegression::new(solver))
    }
}
