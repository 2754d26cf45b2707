//! Configuration loading and management for the Credit Line Engine.
//!
//! This module holds the amount tables the engine evaluates against. The
//! built-in tables are always available; alternative tables can be loaded
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use credit_line_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded tables: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AmountGrid, AmountTables, AmountsConfig, EngineConfig, EngineMetadata, GenderAmountsConfig,
    GenderTables,
};
