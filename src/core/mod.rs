//! Core module - transcript parsing and statistics aggregation

mod aggregator;
mod clock;
mod extract;
mod parser;
mod superlatives;
mod types;

#[cfg(test)]
pub(crate) use aggregator::aggregate;
pub(crate) use aggregator::{Aggregator, TimestampPolicy};
pub(crate) use parser::parse;
pub(crate) use types::{ChatStatistics, Histogram, UserStats};
