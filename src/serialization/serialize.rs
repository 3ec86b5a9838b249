use std::io::Write;

use super::{FormatOptions, MODEL_NAME, TOOL_NAME};
use crate::{error::Result, model::LinearModel};

fn write_header<W: Write>(writer: &mut W, model_name: &str, version: u32) -> Result<()> {
    writeln!(writer, "# {TOOL_NAME} {model_name} v{version}")?;
    Ok(())
}

fn write_kv<W: Write>(writer: &mut W, key: &str, value: &str) -> Result<()> {
    writeln!(writer, "{key}={value}")?;
    Ok(())
}

fn write_vec<W: Write>(writer: &mut W, key: &str, values: &[f64], precision: usize) -> Result<()> {
    let joined = values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(",");

    write_kv(writer, key, &joined)
}

/// Writes `model` as a versioned `key=value` text record.
///
/// # Arguments
/// * `model` - The model to write.
/// * `writer` - The destination.
/// * `options` - The header version and the fractional digits for every float.
///
/// # Errors
/// `LinErr::Io` if any write fails.
pub fn encode<W: Write>(model: &LinearModel, writer: &mut W, options: &FormatOptions) -> Result<()> {
    let precision = options.precision;

    write_header(writer, MODEL_NAME, options.version)?;
    write_kv(writer, "n_features", &model.n_features().to_string())?;
    write_kv(writer, "fit_intercept", if model.fit_intercept() { "true" } else { "false" })?;
    write_kv(writer, "bias", &format!("{:.precision$}", model.bias()))?;
    write_vec(writer, "weights", model.weights(), precision)?;

    if let Some(l2_lambda) = model.l2_lambda() {
        write_kv(writer, "l2_lambda", &format!("{l2_lambda:.precision$}"))?;
    }

    Ok(())
}
