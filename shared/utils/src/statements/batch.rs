//! Batch Processor
//!
//! Runs normalization and every matcher over one or many inputs.

use hazcode_models::{ExtractionResult, ResultBatch, SheetInput};
use tracing::debug;

use super::matcher::{match_euh, match_h, match_p};
use super::normalizer::normalize;
use super::wgk::match_wgk;

/// Extract all statements and the WGK from one raw text.
///
/// The result carries an empty source label.
pub fn process(text: &str) -> ExtractionResult {
    let normalized = normalize(text);

    ExtractionResult {
        source: String::new(),
        hazard: match_h(&normalized),
        precautionary: match_p(&normalized),
        supplemental: match_euh(&normalized),
        wgk: match_wgk(&normalized),
    }
}

/// Process every input in order, labelling each result with its source
pub fn process_all(inputs: &[SheetInput]) -> ResultBatch {
    inputs
        .iter()
        .map(|input| {
            let result = process(&input.text).with_source(input.label.as_str());
            debug!(
                source = %input.label,
                statements = result.total_statements(),
                wgk = ?result.wgk.map(|c| c.value()),
                "Processed input"
            );
            result
        })
        .collect()
}
