//! Statement Extraction Module
//!
//! Normalizes safety-data-sheet text and extracts H-, P- and EUH-statements
//! plus the water-hazard class (WGK), then renders the results for pasting
//! into a spreadsheet.

pub mod batch;
pub mod formatter;
pub mod matcher;
pub mod normalizer;
pub mod wgk;

#[cfg(test)]
mod property_tests;

pub use batch::{process, process_all};
pub use formatter::{format_batch, format_batch_json, format_result};
pub use matcher::{match_euh, match_h, match_p};
pub use normalizer::normalize;
pub use wgk::match_wgk;
