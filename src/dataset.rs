use ndarray::{Array1, Array2};

use crate::error::{Result, ShapeErr};

/// A dense row-major feature matrix, one inner vector per sample.
pub type Matrix = Vec<Vec<f64>>;

/// A dense vector of targets, predictions or weights.
pub type Vector = Vec<f64>;

/// Checks that `(x, y)` is a usable training set.
///
/// # Arguments
/// * `x` - The feature matrix, one row per sample.
/// * `y` - The targets, one per row of `x`.
///
/// # Returns
/// The amount of features per sample.
///
/// # Errors
/// `ShapeErr::NoSamples` or `ShapeErr::NoFeatures` for an empty matrix,
/// `ShapeErr::TargetLength` if `y` doesn't have one value per row and
/// `ShapeErr::RaggedRow` if any row differs in width from the first.
pub fn validate(x: &[Vec<f64>], y: &[f64]) -> Result<usize> {
    let first = x.first().ok_or(ShapeErr::NoSamples)?;
    let d = first.len();

    if d == 0 {
        return Err(ShapeErr::NoFeatures.into());
    }

    if y.len() != x.len() {
        return Err(ShapeErr::TargetLength {
            got: y.len(),
            expected: x.len(),
        }
        .into());
    }

    if let Some((row, r)) = x.iter().enumerate().find(|(_, r)| r.len() != d) {
        return Err(ShapeErr::RaggedRow {
            row,
            got: r.len(),
            expected: d,
        }
        .into());
    }

    Ok(d)
}

/// Checks that every row of `x` has exactly `n_features` columns.
///
/// An empty matrix is valid.
pub fn validate_features(x: &[Vec<f64>], n_features: usize) -> Result<()> {
    match x.iter().enumerate().find(|(_, r)| r.len() != n_features) {
        Some((row, r)) => Err(ShapeErr::FeatureCount {
            row,
            got: r.len(),
            expected: n_features,
        }
        .into()),
        None => Ok(()),
    }
}

/// Copies a validated matrix into an owned `n x d` array.
pub(crate) fn to_array(x: &[Vec<f64>], d: usize) -> Array2<f64> {
    Array2::from_shape_fn((x.len(), d), |(i, j)| x[i][j])
}

/// Per-column means of a validated matrix, summed in row order.
pub(crate) fn column_means(x: &[Vec<f64>], d: usize) -> Array1<f64> {
    let mut sums = Array1::zeros(d);
    for row in x {
        for (s, v) in sums.iter_mut().zip(row) {
            *s += v;
        }
    }

    sums / x.len() as f64
}

/// The arithmetic mean of a non-empty slice.
pub(crate) fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

/// The dot product of two slices of equal length.
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}
