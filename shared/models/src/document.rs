use serde::{Deserialize, Serialize};

use crate::statement::{StatementCategory, StatementSet, WgkClass};

/// Raw safety-data-sheet text together with the label of its source.
///
/// The label is empty for pasted text and holds the file name for text
/// extracted from a PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetInput {
    pub label: String,
    pub text: String,
}

impl SheetInput {
    pub fn pasted(text: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            text: text.into(),
        }
    }

    pub fn from_file(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Statements and WGK extracted from one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub source: String,
    pub hazard: StatementSet,
    pub precautionary: StatementSet,
    pub supplemental: StatementSet,
    pub wgk: Option<WgkClass>,
}

impl ExtractionResult {
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            hazard: StatementSet::new(StatementCategory::Hazard),
            precautionary: StatementSet::new(StatementCategory::Precautionary),
            supplemental: StatementSet::new(StatementCategory::Supplemental),
            wgk: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn statements(&self, category: StatementCategory) -> &StatementSet {
        match category {
            StatementCategory::Hazard => &self.hazard,
            StatementCategory::Precautionary => &self.precautionary,
            StatementCategory::Supplemental => &self.supplemental,
        }
    }

    /// True when any statement or a WGK was found
    pub fn is_found(&self) -> bool {
        !self.hazard.is_empty()
            || !self.precautionary.is_empty()
            || !self.supplemental.is_empty()
            || self.wgk.is_some()
    }

    pub fn total_statements(&self) -> usize {
        self.hazard.len() + self.precautionary.len() + self.supplemental.len()
    }
}

/// Extraction results in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultBatch {
    pub results: Vec<ExtractionResult>,
}

impl ResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractionResult> {
        self.results.iter()
    }

    /// Found results followed by not-found results, each group in input order
    pub fn found_first(&self) -> Vec<&ExtractionResult> {
        let (mut found, not_found): (Vec<_>, Vec<_>) =
            self.results.iter().partition(|r| r.is_found());
        found.extend(not_found);
        found
    }

    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_found()).count()
    }
}

impl FromIterator<ExtractionResult> for ResultBatch {
    fn from_iter<I: IntoIterator<Item = ExtractionResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
