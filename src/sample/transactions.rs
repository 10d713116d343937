//! Transaction sample data

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::TIMESTAMP_FORMAT;

pub const MERCHANT_TYPES: [&str; 13] = [
    "Agricultural Services",
    "Contracted Services",
    "Transportation Services",
    "Utility Services",
    "Retail Outlet Services",
    "Clothing Stores",
    "Miscellaneous Stores",
    "Business Services",
    "Professional Services and Membership Organizations",
    "Government Services",
    "Airlines",
    "Car Rental",
    "Lodging",
];

/// A merchant with a transaction amount range.
#[derive(Debug, Clone)]
pub struct Merchant {
    pub name: String,
    pub merchant_type: String,
    pub min_amount: u32,
    pub max_amount: u32,
}

/// A single generated transaction record.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub transaction_id: Uuid,
    pub timestamp: String,
    pub customer_id: String,
    pub merchant_type: String,
    pub merchant_name: String,
    pub amount: f64,
}

/// Generate merchants with a name, a random type, and a min/max
/// transaction amount (max between 5x and 20x the min).
pub fn generate_merchants(count: usize) -> Vec<Merchant> {
    (0..count)
        .map(|idx| {
            let min_amount = fastrand::u32(1..=100);
            Merchant {
                name: format!("Merchant {}", idx),
                merchant_type: MERCHANT_TYPES[fastrand::usize(..MERCHANT_TYPES.len())].to_string(),
                min_amount,
                max_amount: fastrand::u32(min_amount * 5..=min_amount * 20),
            }
        })
        .collect()
}

/// Generate customer IDs of the form `cust_<n>`.
pub fn generate_customers(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("cust_{}", idx)).collect()
}

/// Generate `count` transactions with timestamps walking forward from
/// `start` in random steps sized so the range roughly covers
/// `start..end`. Each transaction picks a random customer and merchant,
/// with the amount uniform in the merchant's range, rounded to cents.
pub fn generate_transactions(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    count: usize,
    customers: &[String],
    merchants: &[Merchant],
) -> Vec<Transaction> {
    assert!(!customers.is_empty(), "at least one customer required");
    assert!(!merchants.is_empty(), "at least one merchant required");
    assert!(end > start, "end must be after start");

    let range_seconds = (end - start).num_days() * 24 * 60 * 60;
    let max_step = (range_seconds / count.max(1) as i64).max(1);
    let min_step = max_step / 2;

    let mut transactions = Vec::with_capacity(count);
    let mut ts = start;
    for _ in 0..count {
        ts += Duration::seconds(fastrand::i64(min_step..=max_step));
        let customer = &customers[fastrand::usize(..customers.len())];
        let merchant = &merchants[fastrand::usize(..merchants.len())];
        let amount = random_amount(merchant.min_amount as f64, merchant.max_amount as f64);

        transactions.push(Transaction {
            transaction_id: Uuid::new_v4(),
            timestamp: ts.format(TIMESTAMP_FORMAT).to_string(),
            customer_id: customer.clone(),
            merchant_type: merchant.merchant_type.clone(),
            merchant_name: merchant.name.clone(),
            amount,
        });
    }
    transactions
}

fn random_amount(min: f64, max: f64) -> f64 {
    let value = min + fastrand::f64() * (max - min);
    // Round to cents without letting the rounding escape the range
    ((value * 100.0).round() / 100.0).clamp(min, max)
}
