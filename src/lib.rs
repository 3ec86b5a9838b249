//! Linear regression `y ≈ X·w + b` trained by batch gradient descent or by the
//! (ridge regularized) normal equations, with a plain text model format for
//! reusing fitted parameters across runs.

pub mod dataset;
pub mod error;
pub mod linalg;
pub mod metrics;
pub mod model;
pub mod optimization;
pub mod serialization;
pub mod specs;
pub mod training;

pub use dataset::{Matrix, Vector};
pub use error::{LinErr, Result, ShapeErr};
pub use model::LinearModel;
pub use optimization::{GradientDescent, NormalEquation, Solver};
pub use specs::TrainerSpec;
pub use training::{FitStats, LinearRegression, Regressor, TrainerBuilder};
