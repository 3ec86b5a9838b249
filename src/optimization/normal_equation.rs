use log::debug;
use ndarray::{Array1, Array2};

use super::Solver;
use crate::{
    dataset,
    error::{LinErr, Result},
    linalg,
    model::LinearModel,
};

/// Closed-form least squares with an optional ridge (L2) penalty.
///
/// Solves `(XcᵗXc + λI)·w = Xcᵗyc` on mean-centered data and recovers the intercept
/// from the means. With `l2_lambda == 0` this is ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEquation {
    l2_lambda: f64,
    fit_intercept: bool,
}

impl NormalEquation {
    /// Returns a new `NormalEquation`.
    ///
    /// # Arguments
    /// * `l2_lambda` - The ridge penalty added to the diagonal of the covariance matrix.
    /// * `fit_intercept` - Whether to center the data and learn a bias term.
    pub fn new(l2_lambda: f64, fit_intercept: bool) -> Self {
        Self {
            l2_lambda,
            fit_intercept,
        }
    }

    pub fn l2_lambda(&self) -> f64 {
        self.l2_lambda
    }

    fn validate(&self) -> Result<()> {
        let l2 = self.l2_lambda;
        if !l2.is_finite() || l2 < 0.0 {
            return Err(LinErr::InvalidConfig(format!(
                "l2 penalty must be a non-negative finite number, got {l2}"
            )));
        }

        Ok(())
    }
}

impl Default for NormalEquation {
    fn default() -> Self {
        Self::new(0.0, true)
    }
}

impl Solver for NormalEquation {
    fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    fn solve(&self, x: &[Vec<f64>], y: &[f64]) -> Result<LinearModel> {
        let d = dataset::validate(x, y)?;
        self.validate()?;

        debug!(
            "normal equation over {} samples x {d} features, l2 {}",
            x.len(),
            self.l2_lambda
        );

        let mut xc = dataset::to_array(x, d);
        let mut yc = Array1::from(y.to_vec());

        let (x_mean, y_mean) = if self.fit_intercept {
            let x_mean = dataset::column_means(x, d);
            let y_mean = dataset::mean(y);
            xc -= &x_mean;
            yc -= y_mean;
            (x_mean, y_mean)
        } else {
            (Array1::zeros(d), 0.0)
        };

        let mut a: Array2<f64> = xc.t().dot(&xc);
        a.diag_mut().mapv_inplace(|v| v + self.l2_lambda);
        let b = xc.t().dot(&yc);

        let weights = linalg::solve(a, b)?;
        let bias = if self.fit_intercept {
            y_mean - weights.dot(&x_mean)
        } else {
            0.0
        };

        let model = LinearModel::new(weights.to_vec(), bias, self.fit_intercept);
        Ok(model.with_l2_lambda(self.l2_lambda))
    }

    fn from_model(model: &LinearModel) -> Self {
        Self::new(model.l2_lambda().unwrap_or(0.0), model.fit_intercept())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    #[test]
    fn recovers_exact_line() {
        let x = vec![vec![1.], vec![2.], vec![3.]];
        let y = [3., 5., 7.];

        let model = NormalEquation::new(0.0, true).solve(&x, &y).unwrap();

        assert_close(model.weights()[0], 2.);
        assert_close(model.bias(), 1.);
        assert_close(model.score(&x, &y).unwrap(), 1.);
    }

    #[test]
    fn without_intercept_fits_through_origin() {
        let x = vec![vec![1.], vec![2.]];
        let y = [2., 4.];

        let model = NormalEquation::new(0.0, false).solve(&x, &y).unwrap();

        assert_close(model.weights()[0], 2.);
        assert_eq!(model.bias(), 0.);
    }

    #[test]
    fn duplicated_features_are_singular() {
        let x = vec![vec![1., 1.], vec![2., 2.], vec![3., 3.]];
        let y = [1., 2., 3.];

        for fit_intercept in [true, false] {
            let err = NormalEquation::new(0.0, fit_intercept)
                .solve(&x, &y)
                .unwrap_err();
            assert!(matches!(err, LinErr::SingularMatrix { .. }), "{err}");
        }
    }

    #[test]
    fn ridge_penalty_resolves_duplicated_features() {
        let x = vec![vec![1., 1.], vec![2., 2.], vec![3., 3.]];
        let y = [2., 4., 6.];

        let model = NormalEquation::new(0.5, true).solve(&x, &y).unwrap();

        // The penalty splits the slope evenly between both copies.
        assert_close(model.weights()[0], model.weights()[1]);
        assert_eq!(model.l2_lambda(), Some(0.5));
    }

    #[test]
    fn ridge_shrinks_weights() {
        let x = vec![vec![1.], vec![2.], vec![3.], vec![4.]];
        let y = [2., 4., 6., 8.];

        let ols = NormalEquation::new(0.0, true).solve(&x, &y).unwrap();
        let ridge = NormalEquation::new(10.0, true).solve(&x, &y).unwrap();

        assert!(ridge.weights()[0].abs() < ols.weights()[0].abs());
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let err = NormalEquation::new(-1.0, true)
            .solve(&[vec![1.]], &[1.])
            .unwrap_err();
        assert!(matches!(err, LinErr::InvalidConfig(_)));
    }

    #[test]
    fn non_finite_penalty_is_rejected() {
        for l2 in [f64::NAN, f64::INFINITY] {
            let err = NormalEquation::new(l2, true)
                .solve(&[vec![1.], vec![2.]], &[1., 2.])
                .unwrap_err();
            assert!(matches!(err, LinErr::InvalidConfig(_)), "{l2} gave {err}");
        }
    }

    #[test]
    fn loaded_models_restore_the_penalty() {
        let model = LinearModel::new(vec![1.], 0., false).with_l2_lambda(0.3);
        assert_eq!(NormalEquation::from_model(&model), NormalEquation::new(0.3, false));
    }
}
