//! Configuration types for credit evaluation.
//!
//! This module contains the amount tables the engine looks amounts up in,
//! the built-in table values, and the structures deserialized from YAML
//! configuration files.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{AmountRange, BREAKPOINT_COUNT, Category, Gender};

/// Amounts indexed by `[category][tenure - tenure_floor]`.
pub type AmountGrid = [[u32; BREAKPOINT_COUNT]; 4];

const MALE_MINIMUM: AmountGrid = [
    [100, 400, 900, 100, 600],
    [1000, 600, 1000, 1000, 1000],
    [400, 200, 200, 1000, 600],
    [400, 300, 500, 900, 1000],
];

const MALE_MAXIMUM: AmountGrid = [
    [4900, 4700, 4600, 4600, 4500],
    [4700, 4400, 5000, 4400, 4900],
    [5000, 4700, 5000, 4200, 4600],
    [4400, 4700, 4300, 4900, 4300],
];

const FEMALE_MINIMUM: AmountGrid = [
    [800, 800, 800, 600, 200],
    [800, 700, 100, 600, 700],
    [200, 900, 700, 800, 100],
    [500, 1000, 600, 400, 700],
];

const FEMALE_MAXIMUM: AmountGrid = [
    [4000, 4200, 4100, 4200, 4500],
    [4700, 4200, 4500, 4300, 4400],
    [4600, 4900, 4600, 4700, 4000],
    [5000, 4900, 4700, 5000, 4300],
];

/// Metadata about the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineMetadata {
    /// Short identifier of the table set (e.g., "CL-DEFAULT").
    pub code: String,
    /// The human-readable name of the table set.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            code: "CL-DEFAULT".to_string(),
            name: "Default Credit Line Tables".to_string(),
            version: "1".to_string(),
        }
    }
}

/// The minimum and maximum amount tables for one gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderTables {
    /// Minimum amounts.
    pub minimum: AmountGrid,
    /// Maximum amounts.
    pub maximum: AmountGrid,
}

impl GenderTables {
    /// Returns the range at a grid position.
    pub fn range_at(&self, category: Category, column: usize) -> Option<AmountRange> {
        let row = category.index();
        let minimum = *self.minimum.get(row)?.get(column)?;
        let maximum = *self.maximum.get(row)?.get(column)?;
        Some(AmountRange { minimum, maximum })
    }
}

/// The four amount tables: {minimum, maximum} x {male, female}.
///
/// Every (category, gender, breakpoint) combination has an entry by
/// construction, since the grids are fixed-size arrays.
///
/// # Example
///
/// ```
/// use credit_line_engine::config::AmountTables;
/// use credit_line_engine::models::{Category, Gender};
///
/// let tables = AmountTables::builtin();
/// let range = tables.range(Category::A, Gender::Male, 26).unwrap();
/// assert_eq!((range.minimum, range.maximum), (100, 4900));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountTables {
    male: GenderTables,
    female: GenderTables,
}

impl AmountTables {
    /// Creates tables from per-gender grids.
    ///
    /// Fails with [`EngineError::InvalidTable`] if any maximum is below its
    /// minimum.
    pub fn new(male: GenderTables, female: GenderTables) -> EngineResult<Self> {
        let tables = Self { male, female };
        tables.validate()?;
        Ok(tables)
    }

    /// Returns the built-in tables.
    pub const fn builtin() -> Self {
        Self {
            male: GenderTables {
                minimum: MALE_MINIMUM,
                maximum: MALE_MAXIMUM,
            },
            female: GenderTables {
                minimum: FEMALE_MINIMUM,
                maximum: FEMALE_MAXIMUM,
            },
        }
    }

    /// Returns the table pair for a gender.
    pub fn for_gender(&self, gender: Gender) -> &GenderTables {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Returns the amount range for a category, gender and tenure breakpoint.
    ///
    /// Returns `None` when `tenure` is not one of the gender's breakpoints.
    pub fn range(&self, category: Category, gender: Gender, tenure: u32) -> Option<AmountRange> {
        if !gender.breakpoints().contains(&tenure) {
            return None;
        }
        let column = (tenure - gender.tenure_floor()) as usize;
        self.for_gender(gender).range_at(category, column)
    }

    /// Checks that every entry has maximum >= minimum.
    pub fn validate(&self) -> EngineResult<()> {
        for gender in [Gender::Male, Gender::Female] {
            for category in Category::ALL {
                for tenure in gender.breakpoints() {
                    let range = self.range(category, gender, tenure).ok_or_else(|| {
                        EngineError::TableEntryMissing {
                            category: category.to_string(),
                            gender: gender.to_string(),
                            tenure,
                        }
                    })?;
                    if range.maximum < range.minimum {
                        return Err(EngineError::InvalidTable {
                            message: format!(
                                "maximum {} is below minimum {} for category '{}', gender '{}', tenure {}",
                                range.maximum, range.minimum, category, gender, tenure
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for AmountTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Amount tables for one gender as written in `amounts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenderAmountsConfig {
    /// Map of category to tenure to minimum amount.
    pub minimum: HashMap<Category, BTreeMap<u32, u32>>,
    /// Map of category to tenure to maximum amount.
    pub maximum: HashMap<Category, BTreeMap<u32, u32>>,
}

impl GenderAmountsConfig {
    /// Converts the maps into grids for `gender`'s breakpoints.
    ///
    /// Keys outside the breakpoints are ignored. A missing category or
    /// breakpoint fails with [`EngineError::InvalidTable`].
    pub fn to_tables(&self, gender: Gender) -> EngineResult<GenderTables> {
        Ok(GenderTables {
            minimum: to_grid(&self.minimum, gender, "minimum")?,
            maximum: to_grid(&self.maximum, gender, "maximum")?,
        })
    }
}

fn to_grid(
    amounts: &HashMap<Category, BTreeMap<u32, u32>>,
    gender: Gender,
    table: &str,
) -> EngineResult<AmountGrid> {
    let mut grid: AmountGrid = [[0; BREAKPOINT_COUNT]; 4];

    for category in Category::ALL {
        let row = amounts
            .get(&category)
            .ok_or_else(|| EngineError::InvalidTable {
                message: format!("{} table for gender '{}' has no category '{}'", table, gender, category),
            })?;

        for (column, tenure) in gender.breakpoints().enumerate() {
            grid[category.index()][column] =
                *row.get(&tenure).ok_or_else(|| EngineError::InvalidTable {
                    message: format!(
                        "{} table for gender '{}', category '{}' has no entry for tenure {}",
                        table, gender, category, tenure
                    ),
                })?;
        }
    }

    Ok(grid)
}

/// Amounts configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountsConfig {
    /// Tables for male workers.
    pub male: GenderAmountsConfig,
    /// Tables for female workers.
    pub female: GenderAmountsConfig,
}

impl TryFrom<AmountsConfig> for AmountTables {
    type Error = EngineError;

    fn try_from(config: AmountsConfig) -> Result<Self, Self::Error> {
        AmountTables::new(
            config.male.to_tables(Gender::Male)?,
            config.female.to_tables(Gender::Female)?,
        )
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    tables: AmountTables,
}

impl EngineConfig {
    /// Creates a new configuration.
    pub fn new(metadata: EngineMetadata, tables: AmountTables) -> Self {
        Self { metadata, tables }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the amount tables.
    pub fn tables(&self) -> &AmountTables {
        &self.tables
    }
}
