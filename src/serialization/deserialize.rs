use std::{collections::HashMap, io::BufRead};

use log::{debug, warn};

use super::MODEL_NAME;
use crate::{
    error::{LinErr, Result},
    model::LinearModel,
};

const KNOWN_KEYS: [&str; 5] = ["n_features", "fit_intercept", "bias", "weights", "l2_lambda"];

/// The raw content of a model file: its header version and its `key=value` fields.
#[derive(Debug, Default)]
pub struct ModelRecord {
    version: Option<u32>,
    fields: HashMap<String, String>,
}

impl ModelRecord {
    /// Reads every `key=value` line of a model file.
    ///
    /// Blank lines and `#` comments are skipped, keys and values are trimmed and the
    /// last occurrence of a repeated key wins. Lines without `=` are skipped.
    ///
    /// # Arguments
    /// * `reader` - The model file.
    /// * `supported_version` - The newest header version accepted.
    ///
    /// # Errors
    /// `LinErr::FormatVersion` for a header newer than `supported_version`,
    /// `LinErr::Parse` for a malformed header and `LinErr::Io` on read failures.
    pub fn read<R: BufRead>(reader: R, supported_version: u32) -> Result<Self> {
        let mut record = Self::default();
        let mut first = true;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if std::mem::take(&mut first) && line.starts_with('#') {
                record.version = parse_header(line, supported_version)?;
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("skipping line {} without '=': {line}", lineno + 1);
                continue;
            };

            let key = key.trim();
            if !KNOWN_KEYS.contains(&key) {
                debug!("ignoring unknown key {key}");
            }

            record.fields.insert(key.to_string(), value.trim().to_string());
        }

        Ok(record)
    }

    /// The header version, `None` for files written without a header.
    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(LinErr::MissingField(key))
    }

    /// Builds the model described by this record.
    ///
    /// # Errors
    /// `LinErr::MissingField` if a required key is absent, `LinErr::Parse` for
    /// malformed values and `LinErr::DimensionMismatch` if the weight count isn't
    /// `n_features`.
    pub fn into_model(self) -> Result<LinearModel> {
        let n_features = self.require("n_features")?;
        let fit_intercept = self.require("fit_intercept")?;
        let bias = self.require("bias")?;
        let weights = self.require("weights")?;

        let n_features = n_features
            .parse::<usize>()
            .map_err(|e| LinErr::parse("n_features", n_features, e))?;
        let fit_intercept = parse_bool("fit_intercept", fit_intercept)?;
        let bias = parse_f64("bias", bias)?;
        let weights = parse_vec("weights", weights)?;

        if weights.len() != n_features {
            return Err(LinErr::DimensionMismatch {
                declared: n_features,
                found: weights.len(),
            });
        }

        let model = LinearModel::new(weights, bias, fit_intercept);
        match self.get("l2_lambda") {
            Some(l2_lambda) => Ok(model.with_l2_lambda(parse_f64("l2_lambda", l2_lambda)?)),
            None => Ok(model),
        }
    }
}

/// Reads a model written by [`encode`](super::encode).
///
/// # Arguments
/// * `reader` - The model file.
/// * `supported_version` - The newest header version accepted, usually
///   [`FORMAT_VERSION`](super::FORMAT_VERSION).
///
/// # Errors
/// See [`ModelRecord::read`] and [`ModelRecord::into_model`].
pub fn decode<R: BufRead>(reader: R, supported_version: u32) -> Result<LinearModel> {
    let record = ModelRecord::read(reader, supported_version)?;
    if record.version().is_none() {
        debug!("model file has no header, reading it as a legacy file");
    }

    record.into_model()
}

/// Parses a `# <tool> LinearRegression v<version>` header.
///
/// Returns `None` for comments that don't have the header's shape or name another model.
fn parse_header(line: &str, supported_version: u32) -> Result<Option<u32>> {
    let tokens: Vec<_> = line[1..].split_whitespace().collect();
    let [_, model, version] = tokens[..] else {
        return Ok(None);
    };

    let Some(digits) = version.strip_prefix('v') else {
        return Ok(None);
    };

    if model != MODEL_NAME || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    let found = digits
        .parse::<u32>()
        .map_err(|e| LinErr::parse("header", line, e))?;

    if found == 0 {
        return Err(LinErr::parse("header", line, "version must be positive"));
    }

    if found > supported_version {
        return Err(LinErr::FormatVersion {
            found,
            supported: supported_version,
        });
    }

    Ok(Some(found))
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(LinErr::parse(field, value, "expected one of true, false, 1, 0")),
    }
}

fn parse_f64(field: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| LinErr::parse(field, value, e))
}

/// Parses comma separated floats, an empty token reads as `0.0`.
fn parse_vec(field: &str, csv: &str) -> Result<Vec<f64>> {
    if csv.is_empty() {
        return Ok(Vec::new());
    }

    csv.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, token)| match token {
            "" => Ok(0.0),
            t => parse_f64(&format!("{field}[{i}]"), t),
        })
        .collect()
}
