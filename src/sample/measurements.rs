//! Weather and water measurement sample data

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::TIMESTAMP_FORMAT;

/// A measurement type with its unit and value range.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementType {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

pub const WEATHER_MEASUREMENT_TYPES: [MeasurementType; 6] = [
    MeasurementType { name: "temperature", unit: "C", min: 0.0, max: 45.0 },
    MeasurementType { name: "wind_speed", unit: "km/h", min: 0.0, max: 30.0 },
    MeasurementType { name: "wind_direction", unit: "degrees", min: 0.0, max: 360.0 },
    MeasurementType { name: "solar_radiation", unit: "W/m2", min: 100.0, max: 500.0 },
    MeasurementType { name: "humidity", unit: "%", min: 1.0, max: 100.0 },
    MeasurementType { name: "barometric_pressure", unit: "hPa", min: 1000.0, max: 1030.0 },
];

pub const WATER_MEASUREMENT_TYPES: [MeasurementType; 2] = [
    MeasurementType { name: "withdrawal", unit: "gallon", min: 10.0, max: 1000.0 },
    MeasurementType { name: "discharge", unit: "gallon", min: 10.0, max: 1000.0 },
];

/// A single generated measurement record.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub timestamp: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub instrument: String,
}

/// Generate instrument IDs of the form `instr<00000>`.
pub fn generate_instruments(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("instr{:05}", idx)).collect()
}

/// Hourly timestamps covering the whole days between `start` and `end`.
pub fn hourly_timestamps(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let hours = (end - start).num_days() * 24;
    (0..hours).map(|h| start + Duration::hours(h)).collect()
}

/// Generate one record per hour, per instrument, per measurement type.
/// Values are uniform in the type's range, rounded to five decimal places.
pub fn generate_hourly_measurements(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    instruments: &[String],
    measurement_types: &[MeasurementType],
) -> Vec<Measurement> {
    let timestamps = hourly_timestamps(start, end);
    let mut measurements =
        Vec::with_capacity(timestamps.len() * instruments.len() * measurement_types.len());

    for ts in &timestamps {
        let ts_str = ts.format(TIMESTAMP_FORMAT).to_string();
        for instrument in instruments {
            for mt in measurement_types {
                let value = mt.min + fastrand::f64() * (mt.max - mt.min);
                measurements.push(Measurement {
                    timestamp: ts_str.clone(),
                    name: mt.name.to_string(),
                    value: (value * 1e5).round() / 1e5,
                    unit: mt.unit.to_string(),
                    instrument: instrument.clone(),
                });
            }
        }
    }
    measurements
}
