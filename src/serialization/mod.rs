mod deserialize;
mod serialize;

pub use deserialize::{ModelRecord, decode};
pub use serialize::encode;

/// The newest model file layout this crate reads and writes.
///
/// Bump on backward-incompatible layout changes.
pub const FORMAT_VERSION: u32 = 1;

/// Name written in the header of every model file.
pub const TOOL_NAME: &str = "linfit";

const MODEL_NAME: &str = "LinearRegression";
const DEFAULT_PRECISION: usize = 10;

/// Options for writing a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The version written in the header.
    pub version: u32,
    /// Fractional digits for every floating point value.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            precision: DEFAULT_PRECISION,
        }
    }
}
