//! Credit Line Eligibility Engine
//!
//! This crate computes the eligible credit amount range and a recommended
//! "optimal" credit line for a worker, based on payroll category, gender and
//! date of first employment.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{CreditEngine, evaluate};
