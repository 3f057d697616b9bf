//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}
