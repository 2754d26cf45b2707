//! Calculation logic for the Credit Line Engine.
//!
//! This module contains the calculation functions for a credit evaluation:
//! tenure calculation, tenure normalization onto the table breakpoints,
//! amount range lookup, optimal line calculation, and the engine that
//! chains them together.

mod engine;
mod optimal_line;
mod range_lookup;
mod tenure;
mod tenure_normalization;

pub use engine::{CreditEngine, evaluate};
pub use optimal_line::{OPTIMAL_LINE_SPREAD_FACTOR, OptimalLineResult, calculate_optimal_line};
pub use range_lookup::{AmountRangeLookupResult, lookup_amount_range};
pub use tenure::{TenureResult, calculate_tenure};
pub use tenure_normalization::{NormalizedTenureResult, clamp_tenure, normalize_tenure};
