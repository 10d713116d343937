//! Fixture file loading
//!
//! Fixture paths are injected explicitly through configuration so tests can
//! point the store at temporary files. Files are read per request and never
//! cached; editing a fixture on disk takes effect on the next request.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use crate::Result;

/// Which bundled fixture to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Transactions,
    WaterMeasurements,
}

impl Fixture {
    pub const ALL: [Fixture; 2] = [Fixture::Transactions, Fixture::WaterMeasurements];

    pub fn name(&self) -> &'static str {
        match self {
            Fixture::Transactions => "transactions",
            Fixture::WaterMeasurements => "water_measurements",
        }
    }
}

/// Resolved fixture file locations.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    transactions: PathBuf,
    water_measurements: PathBuf,
}

impl FixtureStore {
    pub fn new(transactions: impl Into<PathBuf>, water_measurements: impl Into<PathBuf>) -> Self {
        Self {
            transactions: transactions.into(),
            water_measurements: water_measurements.into(),
        }
    }

    pub fn path(&self, fixture: Fixture) -> &Path {
        match fixture {
            Fixture::Transactions => &self.transactions,
            Fixture::WaterMeasurements => &self.water_measurements,
        }
    }

    /// Read and parse a fixture file.
    pub async fn load(&self, fixture: Fixture) -> Result<Value> {
        let data = fs::read(self.path(fixture)).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Read a fixture, substituting an empty object if the file is missing
    /// or does not parse. The caller always gets a valid JSON value.
    pub async fn load_or_empty(&self, fixture: Fixture) -> Value {
        match self.load(fixture).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    fixture = fixture.name(),
                    error = %err,
                    "Failed to load fixture; serving empty object",
                );
                Value::Object(serde_json::Map::new())
            }
        }
    }
}
