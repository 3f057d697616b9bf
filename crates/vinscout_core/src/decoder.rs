//! Normalization of raw attribute pairs into a [`VehicleRecord`].
//!
//! Attribute names are matched exactly after trimming. Blank values are
//! treated as absent. When a name occurs more than once the last non-blank
//! value wins.

use std::collections::HashMap;

use tracing::debug;

use crate::error::DecodeError;
use crate::vehicle::{AttributePair, VehicleDetails, VehicleRecord};
use crate::vin::Vin;

/// Attribute names used by the decoding service.
pub mod names {
    pub const MODEL_YEAR: &str = "Model Year";
    pub const MAKE: &str = "Make";
    pub const MODEL: &str = "Model";
    pub const TRIM: &str = "Trim";
    pub const BODY_CLASS: &str = "Body Class";
    pub const DRIVE_TYPE: &str = "Drive Type";
    pub const ENGINE_MODEL: &str = "Engine Model";
    pub const FUEL_TYPE_PRIMARY: &str = "Fuel Type - Primary";
    pub const ENGINE_CYLINDERS: &str = "Engine Cylinders";
    pub const DISPLACEMENT_L: &str = "Displacement (L)";
    pub const TRANSMISSION_STYLE: &str = "Transmission Style";
}

const REQUIRED: [&str; 3] = [names::MODEL_YEAR, names::MAKE, names::MODEL];

/// Decodes `pairs` into a record for `vin`.
///
/// Fails with [`DecodeError::MissingCoreFields`] when any of `Model Year`,
/// `Make` or `Model` is absent or blank; nothing is constructed in that case.
pub fn decode(vin: &Vin, pairs: &[AttributePair]) -> Result<VehicleRecord, DecodeError> {
    let attributes = collect_attributes(pairs);
    debug!(
        "{} of {} attributes carry a value for {}",
        attributes.len(),
        pairs.len(),
        vin
    );

    let (Some(model_year), Some(make), Some(model)) = (
        attributes.get(names::MODEL_YEAR),
        attributes.get(names::MAKE),
        attributes.get(names::MODEL),
    ) else {
        let missing = REQUIRED
            .into_iter()
            .filter(|name| !attributes.contains_key(name))
            .collect();
        return Err(DecodeError::MissingCoreFields { missing });
    };

    let lookup = |name: &str| attributes.get(name).map(|value| (*value).to_string());

    let details = VehicleDetails {
        trim: lookup(names::TRIM),
        body_type: lookup(names::BODY_CLASS),
        drive_type: lookup(names::DRIVE_TYPE),
        engine_description: lookup(names::ENGINE_MODEL),
        fuel_type_primary: lookup(names::FUEL_TYPE_PRIMARY),
        engine_cylinder_count: lookup(names::ENGINE_CYLINDERS),
        displacement_liters: lookup(names::DISPLACEMENT_L),
        transmission_style: lookup(names::TRANSMISSION_STYLE),
    };

    Ok(VehicleRecord::from_parts(
        vin.clone(),
        (*model_year).to_string(),
        (*make).to_string(),
        (*model).to_string(),
        details,
    ))
}

/// Builds a trimmed name -> trimmed value map, skipping blank values.
fn collect_attributes(pairs: &[AttributePair]) -> HashMap<&str, &str> {
    let mut attributes = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        let Some(value) = pair.value.as_deref().map(str::trim) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        attributes.insert(pair.name.trim(), value);
    }
    attributes
}
