use ndarray::{Array1, Array2};

use crate::error::{LinErr, Result, ShapeErr};

/// Solves the dense square system `a · x = b` by Gauss–Jordan elimination with partial pivoting.
///
/// Both inputs are consumed and used as scratch space: when every column has been
/// processed `a` is the identity and `b` holds the solution.
///
/// # Arguments
/// * `a` - A `d x d` coefficient matrix.
/// * `b` - The right-hand side, of length `d`.
///
/// # Returns
/// The solution vector `x`.
///
/// # Errors
/// `LinErr::SingularMatrix` if a pivot column has no nonzero, non-NaN entry at or
/// below the diagonal, and `ShapeErr::NotSquare` / `ShapeErr::TargetLength` for malformed systems.
pub fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(ShapeErr::NotSquare { rows, cols }.into());
    }

    if b.len() != rows {
        return Err(ShapeErr::TargetLength {
            got: b.len(),
            expected: rows,
        }
        .into());
    }

    let d = rows;
    for c in 0..d {
        let (pivot_row, magnitude) = (c + 1..d)
            .map(|r| (r, a[[r, c]].abs()))
            .fold((c, a[[c, c]].abs()), |best, cand| {
                if cand.1 > best.1 || best.1.is_nan() { cand } else { best }
            });

        // A column of zeros and NaNs has no usable pivot.
        if magnitude == 0.0 || magnitude.is_nan() {
            return Err(LinErr::SingularMatrix { column: c });
        }

        if pivot_row != c {
            for j in 0..d {
                a.swap((c, j), (pivot_row, j));
            }
            b.swap(c, pivot_row);
        }

        let pivot = a[[c, c]];
        for j in c..d {
            a[[c, j]] /= pivot;
        }
        b[c] /= pivot;

        for r in (0..d).filter(|&r| r != c) {
            let factor = a[[r, c]];
            if factor == 0.0 {
                continue;
            }

            for j in c..d {
                a[[r, j]] -= factor * a[[c, j]];
            }
            b[r] -= factor * b[c];
        }
    }

    Ok(b)
}
