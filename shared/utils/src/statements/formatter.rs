//! Formatter
//!
//! Renders a batch as spreadsheet-pasteable lines:
//!
//! ```text
//! aceton.pdf\tH225, H319, H336;P210, P233;EUH066;1
//! ```
//!
//! Lines of inputs with at least one finding come first, followed by the
//! inputs where nothing was found.

use hazcode_models::{ExtractionResult, ResultBatch, StatementCategory};

use crate::error::HazcodeResult;

pub const FIELD_SEPARATOR: &str = ";";
pub const STATEMENT_SEPARATOR: &str = ", ";
pub const LABEL_SEPARATOR: &str = "\t";
pub const RECORD_SEPARATOR: &str = "\n";
pub const NOT_FOUND_MESSAGE: &str = "No statements found";

/// Render one result as a line.
///
/// Returns the line and whether anything was found.
pub fn format_result(result: &ExtractionResult) -> (String, bool) {
    let mut line = String::new();
    if !result.source.is_empty() {
        line.push_str(&result.source);
        line.push_str(LABEL_SEPARATOR);
    }

    let found = result.is_found();
    if found {
        let mut fields: Vec<String> = StatementCategory::ALL
            .iter()
            .map(|&category| result.statements(category).join(STATEMENT_SEPARATOR))
            .collect();
        fields.push(result.wgk.map(|c| c.to_string()).unwrap_or_default());
        line.push_str(&fields.join(FIELD_SEPARATOR));
    } else {
        line.push_str(NOT_FOUND_MESSAGE);
    }

    (line, found)
}

/// Render a whole batch, found lines before not-found lines
pub fn format_batch(batch: &ResultBatch) -> String {
    let (found, not_found): (Vec<_>, Vec<_>) =
        batch.iter().map(format_result).partition(|(_, found)| *found);

    found
        .into_iter()
        .chain(not_found)
        .map(|(line, _)| line)
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR)
}

/// Render a batch as a pretty-printed JSON array, found results first
pub fn format_batch_json(batch: &ResultBatch) -> HazcodeResult<String> {
    Ok(serde_json::to_string_pretty(&batch.found_first())?)
}
