//! Aggregation functions over acquisition records

pub mod distribution;
pub mod trends;

/// Natural log of a count for colour and axis scaling; zero counts map to zero
#[must_use]
pub fn log_count(count: usize) -> f64 {
    if count == 0 { 0.0 } else { (count as f64).ln() }
}
