use crate::{
    dataset,
    error::{Result, ShapeErr},
};

fn check_lengths(y: &[f64], y_pred: &[f64]) -> Result<()> {
    if y.is_empty() {
        return Err(ShapeErr::NoSamples.into());
    }

    if y_pred.len() != y.len() {
        return Err(ShapeErr::TargetLength {
            got: y_pred.len(),
            expected: y.len(),
        }
        .into());
    }

    Ok(())
}

/// Coefficient of determination of `y_pred` against `y`.
///
/// When every target is identical (`ss_tot == 0`) the score is defined as `1.0`.
///
/// # Errors
/// `ShapeErr::NoSamples` for empty input, `ShapeErr::TargetLength` if the lengths differ.
pub fn r2_score(y: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y, y_pred)?;

    let mean_y = dataset::mean(y);
    let (ss_res, ss_tot) = y
        .iter()
        .zip(y_pred)
        .fold((0.0, 0.0), |(res, tot), (t, p)| {
            (res + (t - p).powi(2), tot + (t - mean_y).powi(2))
        });

    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Mean squared error of `y_pred` against `y`.
///
/// # Errors
/// Same as [`r2_score`].
pub fn mean_squared_error(y: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y, y_pred)?;

    let sum: f64 = y.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    Ok(sum / y.len() as f64)
}
