//! Output formatting module

mod json;
mod text;

use miette::Result;
use vinscout_core::VehicleRecord;

use crate::cli::OutputFormat;

pub fn output_record(record: &VehicleRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(record)?,
        OutputFormat::Text => text::output_record(record),
    }
    Ok(())
}

pub fn output_history(records: &[VehicleRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(records)?,
        OutputFormat::Text => text::output_history(records),
    }
    Ok(())
}
