//! Statement code domain models.
//!
//! Defines the GHS/CLP statement categories found on safety data sheets,
//! the order-preserving statement collections produced by the matchers, and
//! the German water-hazard class (WGK).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a safety-data-sheet statement code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    /// GHS hazard statements, `H` + 3 digits
    Hazard,
    /// GHS precautionary statements, `P` + 3 digits
    Precautionary,
    /// EU supplemental hazard statements, `EUH` + 3 digits
    Supplemental,
}

impl StatementCategory {
    pub const ALL: [StatementCategory; 3] = [
        StatementCategory::Hazard,
        StatementCategory::Precautionary,
        StatementCategory::Supplemental,
    ];

    /// Letter prefix of every code in this category
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Hazard => "H",
            Self::Precautionary => "P",
            Self::Supplemental => "EUH",
        }
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Distinct statements of one category, kept in first-seen order.
///
/// An entry is either a single code (`H315`) or a compound of codes joined by
/// `" + "` (`P305 + P351 + P338`). A compound is one atomic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSet {
    pub category: StatementCategory,
    pub statements: Vec<String>,
}

impl StatementSet {
    pub fn new(category: StatementCategory) -> Self {
        Self {
            category,
            statements: Vec::new(),
        }
    }

    /// Add a statement unless it is already present.
    ///
    /// Returns `true` when the statement was new.
    pub fn insert(&mut self, statement: impl Into<String>) -> bool {
        let statement = statement.into();
        if self.statements.contains(&statement) {
            return false;
        }
        self.statements.push(statement);
        true
    }

    pub fn contains(&self, statement: &str) -> bool {
        self.statements.iter().any(|s| s == statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    /// Render the statements joined by `separator`
    pub fn join(&self, separator: &str) -> String {
        self.statements.join(separator)
    }
}

/// Rejected WGK value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("WGK class must be between 0 and 3, got {0}")]
pub struct InvalidWgkClass(pub u8);

/// German water-hazard class (Wassergefährdungsklasse), 0 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WgkClass(u8);

impl WgkClass {
    pub const MAX: u8 = 3;

    pub fn new(class: u8) -> Result<Self, InvalidWgkClass> {
        if class > Self::MAX {
            return Err(InvalidWgkClass(class));
        }
        Ok(Self(class))
    }

    /// Parse a single digit character such as the tail of `WGK 2`
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        Self::new(digit as u8).ok()
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for WgkClass {
    type Error = InvalidWgkClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WgkClass> for u8 {
    fn from(class: WgkClass) -> Self {
        class.0
    }
}

impl fmt::Display for WgkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
