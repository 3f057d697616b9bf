//! Vehicle records and the raw attribute pairs they are decoded from.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::vin::Vin;

/// A raw name/value datum from the decoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePair {
    pub name: String,
    pub value: Option<String>,
}

impl AttributePair {
    /// Creates a pair with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a pair whose value is absent.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Optional descriptive attributes of a vehicle.
///
/// When stored in a [`VehicleRecord`], blank values are normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_cylinder_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement_liters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_style: Option<String>,
}

impl VehicleDetails {
    fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            trim: clean(self.trim),
            body_type: clean(self.body_type),
            drive_type: clean(self.drive_type),
            engine_description: clean(self.engine_description),
            fuel_type_primary: clean(self.fuel_type_primary),
            engine_cylinder_count: clean(self.engine_cylinder_count),
            displacement_liters: clean(self.displacement_liters),
            transmission_style: clean(self.transmission_style),
        }
    }
}

/// A decoded vehicle, keyed by its VIN.
///
/// Required fields are never empty and optional fields are never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawVehicleRecord")]
pub struct VehicleRecord {
    vin: Vin,
    model_year: String,
    make: String,
    model: String,
    #[serde(flatten)]
    details: VehicleDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVehicleRecord {
    vin: Vin,
    model_year: String,
    make: String,
    model: String,
    #[serde(flatten)]
    details: VehicleDetails,
}

impl TryFrom<RawVehicleRecord> for VehicleRecord {
    type Error = RecordError;

    fn try_from(raw: RawVehicleRecord) -> Result<Self, Self::Error> {
        Self::new(raw.vin, raw.model_year, raw.make, raw.model, raw.details)
    }
}

impl VehicleRecord {
    /// Creates a record, rejecting blank required fields.
    pub fn new(
        vin: Vin,
        model_year: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        details: VehicleDetails,
    ) -> Result<Self, RecordError> {
        let model_year = required("modelYear", model_year.into())?;
        let make = required("make", make.into())?;
        let model = required("model", model.into())?;

        Ok(Self {
            vin,
            model_year,
            make,
            model,
            details: details.normalized(),
        })
    }

    /// Builds a record from values the decoder has already trimmed and
    /// checked for emptiness.
    pub(crate) fn from_parts(
        vin: Vin,
        model_year: String,
        make: String,
        model: String,
        details: VehicleDetails,
    ) -> Self {
        Self {
            vin,
            model_year,
            make,
            model,
            details,
        }
    }

    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    pub fn model_year(&self) -> &str {
        &self.model_year
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn details(&self) -> &VehicleDetails {
        &self.details
    }

    /// Returns `"{year} {make} {model}"`.
    pub fn title(&self) -> String {
        format!("{} {} {}", self.model_year, self.make, self.model)
    }
}

fn required(field: &'static str, value: String) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
