//! Worker input model and related types.
//!
//! This module defines the payroll [`Category`] and [`Gender`] enums and the
//! [`CreditQuery`] struct describing the worker being evaluated.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of tenure breakpoints in each gender's amount tables.
pub const BREAKPOINT_COUNT: usize = 5;

/// The payroll category of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Payroll category A.
    A,
    /// Payroll category B.
    B,
    /// Payroll category C.
    C,
    /// Payroll category D.
    D,
}

impl Category {
    /// Every category, in table row order.
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    /// Returns the one-letter code of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }

    /// Returns the row index of the category in the amount tables.
    pub fn index(&self) -> usize {
        match self {
            Category::A => 0,
            Category::B => 1,
            Category::C => 2,
            Category::D => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    /// Parses a category code.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_line_engine::models::Category;
    ///
    /// assert_eq!("B".parse::<Category>().unwrap(), Category::B);
    /// assert!("Z".parse::<Category>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Category::A),
            "B" => Ok(Category::B),
            "C" => Ok(Category::C),
            "D" => Ok(Category::D),
            other => Err(EngineError::InvalidCategory {
                category: other.to_string(),
            }),
        }
    }
}

/// The gender of a worker, which selects the amount table pair and the
/// tenure breakpoint domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male workers, tagged `m`.
    #[serde(rename = "m")]
    Male,
    /// Female workers, tagged `f`.
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    /// Returns the one-letter tag of the gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
        }
    }

    /// The lowest tenure breakpoint, in months.
    pub fn tenure_floor(&self) -> u32 {
        match self {
            Gender::Male => 26,
            Gender::Female => 24,
        }
    }

    /// The highest tenure breakpoint, in months.
    pub fn tenure_ceiling(&self) -> u32 {
        self.tenure_floor() + BREAKPOINT_COUNT as u32 - 1
    }

    /// All tenure breakpoints of this gender's tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_line_engine::models::Gender;
    ///
    /// assert_eq!(Gender::Male.breakpoints(), 26..=30);
    /// assert_eq!(Gender::Female.breakpoints(), 24..=28);
    /// ```
    pub fn breakpoints(&self) -> RangeInclusive<u32> {
        self.tenure_floor()..=self.tenure_ceiling()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Gender::Male),
            "f" => Ok(Gender::Female),
            other => Err(EngineError::InvalidGender {
                gender: other.to_string(),
            }),
        }
    }
}

/// The worker being evaluated for a credit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditQuery {
    /// The worker's payroll category.
    pub category: Category,
    /// The worker's gender.
    pub gender: Gender,
    /// The date the worker first started employment.
    pub first_employment_date: NaiveDate,
}

impl CreditQuery {
    /// Builds a query from raw category and gender tags.
    ///
    /// The gender is validated before the category, so a query with both
    /// fields invalid reports [`EngineError::InvalidGender`].
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_line_engine::error::EngineError;
    /// use credit_line_engine::models::CreditQuery;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let err = CreditQuery::parse("Z", date, "x").unwrap_err();
    /// assert!(matches!(err, EngineError::InvalidGender { .. }));
    /// ```
    pub fn parse(
        category: &str,
        first_employment_date: NaiveDate,
        gender: &str,
    ) -> Result<Self, EngineError> {
        let gender = gender.parse::<Gender>()?;
        let category = category.parse::<Category>()?;

        Ok(Self {
            category,
            gender,
            first_employment_date,
        })
    }
}
