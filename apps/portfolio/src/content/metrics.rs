//! Synthetic dashboard metrics.
//!
//! Samples are uniform draws over fixed ranges for a fixed 30-day window.
//! Without a seed every call produces a fresh series; with a seed the series
//! is reproducible, which the tests and `METRICS_SEED` rely on.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::content::models::MetricSample;

pub const SAMPLE_DAYS: usize = 30;

const SALES_RANGE: std::ops::Range<u32> = 1000..5000;
const VISITORS_RANGE: std::ops::Range<u32> = 500..3000;
const CONVERSION_RANGE: std::ops::Range<f64> = 0.01..0.1;

/// Fixed trend deltas shown beside each KPI card.
pub const SALES_DELTA: &str = "+15%";
pub const VISITORS_DELTA: &str = "+12%";
pub const CONVERSION_DELTA: &str = "+8%";
pub const ORDER_VALUE_DELTA: &str = "-3%";

pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Generates the 30-day series, seeded when `seed` is given.
pub fn generate_metrics(seed: Option<u64>) -> Vec<MetricSample> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_metrics_with(&mut rng)
}

pub fn generate_metrics_with<R: Rng>(rng: &mut R) -> Vec<MetricSample> {
    let start = window_start();
    (0..SAMPLE_DAYS)
        .map(|offset| MetricSample {
            date: start + Days::new(offset as u64),
            sales: rng.gen_range(SALES_RANGE),
            visitors: rng.gen_range(VISITORS_RANGE),
            conversion_rate: rng.gen_range(CONVERSION_RANGE),
        })
        .collect()
}

/// Aggregate KPIs over a metric series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsSummary {
    pub total_sales: u64,
    pub total_visitors: u64,
    pub avg_conversion: f64,
    /// Mean daily sales.
    pub avg_order_value: f64,
}

/// Returns all-zero KPIs for an empty series.
pub fn summarize(samples: &[MetricSample]) -> MetricsSummary {
    if samples.is_empty() {
        return MetricsSummary::default();
    }
    let n = samples.len() as f64;
    let total_sales: u64 = samples.iter().map(|s| s.sales as u64).sum();
    let total_visitors: u64 = samples.iter().map(|s| s.visitors as u64).sum();
    let conversion_sum: f64 = samples.iter().map(|s| s.conversion_rate).sum();

    MetricsSummary {
        total_sales,
        total_visitors,
        avg_conversion: conversion_sum / n,
        avg_order_value: total_sales as f64 / n,
    }
}

/// Formats an integer with comma thousands separators: 1234567 → "1,234,567".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "Rp 1,234" with the amount rounded to a whole rupiah.
pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", format_thousands(amount.max(0.0).round() as u64))
}

/// 0.0543 → "5.43%"
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
