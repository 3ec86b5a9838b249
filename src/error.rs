use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, LinErr>;

/// A shape invariant violated by a dataset, a prediction input or a linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeErr {
    /// The feature matrix has no rows.
    NoSamples,
    /// The first row of the feature matrix has no columns.
    NoFeatures,
    /// A row is narrower or wider than the first one.
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    /// The target vector length doesn't match the amount of rows.
    TargetLength { got: usize, expected: usize },
    /// A prediction row doesn't match the fitted feature count.
    FeatureCount {
        row: usize,
        got: usize,
        expected: usize,
    },
    /// A linear system matrix that isn't square.
    NotSquare { rows: usize, cols: usize },
}

impl Display for ShapeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShapeErr::NoSamples => write!(f, "the feature matrix has no rows"),
            ShapeErr::NoFeatures => write!(f, "the feature matrix has zero features"),
            ShapeErr::RaggedRow { row, got, expected } => write!(
                f,
                "inconsistent row width at row {row}: got {got}, expected {expected}"
            ),
            ShapeErr::TargetLength { got, expected } => write!(
                f,
                "target length doesn't match the amount of rows: got {got}, expected {expected}"
            ),
            ShapeErr::FeatureCount { row, got, expected } => write!(
                f,
                "feature dimension mismatch at row {row}: got {got}, expected {expected}"
            ),
            ShapeErr::NotSquare { rows, cols } => {
                write!(f, "expected a square matrix, got {rows}x{cols}")
            }
        }
    }
}

/// The crate's error type.
#[derive(Debug)]
pub enum LinErr {
    Shape(ShapeErr),
    /// Elimination found no nonzero pivot for this column.
    SingularMatrix {
        column: usize,
    },
    /// The trainer was used for inference before being fitted or loaded.
    NotFitted,
    InvalidConfig(String),
    Config(serde_json::Error),
    Parse {
        field: String,
        value: String,
        reason: String,
    },
    MissingField(&'static str),
    DimensionMismatch {
        declared: usize,
        found: usize,
    },
    FormatVersion {
        found: u32,
        supported: u32,
    },
    /// A file could not be opened or created.
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },
    Io(io::Error),
}

impl LinErr {
    pub(crate) fn parse(field: &str, value: &str, reason: impl Display) -> Self {
        Self::Parse {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Display for LinErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinErr::Shape(e) => write!(f, "shape error: {e}"),
            LinErr::SingularMatrix { column } => write!(
                f,
                "singular matrix: no nonzero pivot in column {column}, the system has no unique solution"
            ),
            LinErr::NotFitted => write!(f, "the model has not been fitted"),
            LinErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            LinErr::Config(e) => write!(f, "invalid trainer spec: {e}"),
            LinErr::Parse {
                field,
                value,
                reason,
            } => write!(f, "invalid {field}: '{value}' ({reason})"),
            LinErr::MissingField(field) => write!(f, "missing required field: {field}"),
            LinErr::DimensionMismatch { declared, found } => write!(
                f,
                "weights length ({found}) doesn't match n_features ({declared})"
            ),
            LinErr::FormatVersion { found, supported } => write!(
                f,
                "unsupported model format version {found}, this reader supports up to v{supported}"
            ),
            LinErr::FileAccess { path, source } => {
                write!(f, "cannot open file {}: {source}", path.display())
            }
            LinErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for LinErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinErr::Config(e) => Some(e),
            LinErr::FileAccess { source, .. } => Some(source),
            LinErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeErr> for LinErr {
    fn from(value: ShapeErr) -> Self {
        Self::Shape(value)
    }
}

impl From<io::Error> for LinErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LinErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
