//! Command-line tool for generating mock fixture files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use mockapi::sample::measurements::{
    generate_hourly_measurements, generate_instruments, MeasurementType,
    WATER_MEASUREMENT_TYPES, WEATHER_MEASUREMENT_TYPES,
};
use mockapi::sample::transactions::{
    generate_customers, generate_merchants, generate_transactions,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a transactions fixture
    Transactions {
        #[arg(long, default_value = "fixtures/transactions.json")]
        output: PathBuf,

        /// Number of transactions to generate
        #[arg(long, default_value_t = 1000)]
        count: usize,

        #[arg(long, default_value_t = 50)]
        customers: usize,

        #[arg(long, default_value_t = 100)]
        merchants: usize,

        #[command(flatten)]
        range: DateRange,
    },
    /// Generate a weather measurements fixture
    Weather {
        #[arg(long, default_value = "fixtures/weather_measurements.json")]
        output: PathBuf,

        #[command(flatten)]
        opts: MeasurementOpts,
    },
    /// Generate a water measurements fixture
    Water {
        #[arg(long, default_value = "fixtures/water_measurements.json")]
        output: PathBuf,

        #[command(flatten)]
        opts: MeasurementOpts,
    },
}

#[derive(Args, Debug)]
struct DateRange {
    /// Number of whole days the generated range covers, ending now
    #[arg(long, default_value_t = 30)]
    days: i64,
}

#[derive(Args, Debug)]
struct MeasurementOpts {
    #[arg(long, default_value_t = 7)]
    days: i64,

    /// Number of instruments reporting
    #[arg(long, default_value_t = 20)]
    instruments: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Transactions {
            output,
            count,
            customers,
            merchants,
            range,
        } => {
            let end = Utc::now();
            let start = end - Duration::days(range.days);
            let customers = generate_customers(customers);
            let merchants = generate_merchants(merchants);
            let data = generate_transactions(start, end, count, &customers, &merchants);
            write_fixture(&output, &data)?;
            println!("Wrote {} transactions to {}", data.len(), output.display());
        }
        Command::Weather { output, opts } => {
            let data = generate_measurement_fixture(&opts, &WEATHER_MEASUREMENT_TYPES);
            write_fixture(&output, &data)?;
            println!("Wrote {} measurements to {}", data.len(), output.display());
        }
        Command::Water { output, opts } => {
            let data = generate_measurement_fixture(&opts, &WATER_MEASUREMENT_TYPES);
            write_fixture(&output, &data)?;
            println!("Wrote {} measurements to {}", data.len(), output.display());
        }
    }

    Ok(())
}

fn generate_measurement_fixture(
    opts: &MeasurementOpts,
    measurement_types: &[MeasurementType],
) -> Vec<mockapi::sample::measurements::Measurement> {
    let end = Utc::now();
    let start = end - Duration::days(opts.days);
    let instruments = generate_instruments(opts.instruments);
    generate_hourly_measurements(start, end, &instruments, measurement_types)
}

fn write_fixture<T: Serialize>(output: &Path, data: &T) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_vec_pretty(data)?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
