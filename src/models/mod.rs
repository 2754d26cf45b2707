//! Core data models for the Credit Line Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod evaluation;
mod worker;

pub use evaluation::{AmountRange, AuditStep, AuditTrace, CreditEvaluation};
pub use worker::{BREAKPOINT_COUNT, Category, CreditQuery, Gender};
