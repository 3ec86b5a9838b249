/// Statistics of the last successful fit.
///
/// This type keeps fields private to allow evolving the internal counters
/// without breaking the public API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitStats {
    samples: usize,
    features: usize,
    mse: f64,
}

impl FitStats {
    /// Creates a new `FitStats`.
    ///
    /// # Args
    /// * `samples` - Number of training samples.
    /// * `features` - Number of features per sample.
    /// * `mse` - Mean squared error of the fitted model on the training set.
    pub fn new(samples: usize, features: usize, mse: f64) -> Self {
        Self {
            samples,
            features,
            mse,
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn features(&self) -> usize {
        self.features
    }

    /// Returns the training mean squared error.
    pub fn mse(&self) -> f64 {
        self.mse
    }
}
