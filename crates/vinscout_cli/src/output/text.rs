//! Text output formatter

use vinscout_core::VehicleRecord;

const NOT_AVAILABLE: &str = "N/A";

pub fn output_record(record: &VehicleRecord) {
    print!("{}", render_record(record));
}

pub fn output_history(records: &[VehicleRecord]) {
    if records.is_empty() {
        println!("No lookups yet");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!("{}. {} ({})", i + 1, record.title(), record.vin());
    }
}

fn render_record(record: &VehicleRecord) -> String {
    let details = record.details();
    let rows = [
        ("VIN", Some(record.vin().as_str())),
        ("Trim", details.trim.as_deref()),
        ("Body", details.body_type.as_deref()),
        ("Drive", details.drive_type.as_deref()),
        ("Engine", details.engine_description.as_deref()),
        ("Fuel", details.fuel_type_primary.as_deref()),
        ("Cylinders", details.engine_cylinder_count.as_deref()),
        ("Displacement (L)", details.displacement_liters.as_deref()),
        ("Transmission", details.transmission_style.as_deref()),
    ];

    let mut out = format!("{}\n", record.title());
    for (label, value) in rows {
        out.push_str(&format!(
            "  {:<18} {}\n",
            format!("{label}:"),
            value.unwrap_or(NOT_AVAILABLE)
        ));
    }
    out
}
