mod builder;
mod linear_regression;
mod regressor;
mod stats;

pub use builder::TrainerBuilder;
pub use linear_regression::LinearRegression;
pub use regressor::Regressor;
pub use stats::FitStats;
