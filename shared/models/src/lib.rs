//! # Hazcode Domain Models
//!
//! Data types shared by the statement extraction core and the extractor binary.
//! All models implement serialization/deserialization with serde.
//!
//! ## Key Models
//!
//! - **StatementSet**: Distinct H-, P- or EUH-statements of one category, in first-seen order
//! - **WgkClass**: German water-hazard class, 0 to 3
//! - **SheetInput**: Raw safety-data-sheet text with its source label
//! - **ExtractionResult**: Everything extracted from one input
//! - **ResultBatch**: Results of several inputs, in input order

pub mod document;
pub mod statement;

pub use document::*;
pub use statement::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_hazard(source: &str, code: &str) -> ExtractionResult {
        let mut result = ExtractionResult::empty(source);
        result.hazard.insert(code);
        result
    }

    #[test]
    fn test_empty_result_is_not_found() {
        let result = ExtractionResult::empty("");
        assert!(!result.is_found());
        assert_eq!(result.total_statements(), 0);
    }

    #[test]
    fn test_wgk_alone_counts_as_found() {
        let mut result = ExtractionResult::empty("sheet.pdf");
        result.wgk = WgkClass::from_digit('1');
        assert!(result.is_found());
    }

    #[test]
    fn test_found_first_is_stable() {
        let batch: ResultBatch = vec![
            ExtractionResult::empty("a"),
            result_with_hazard("b", "H315"),
            ExtractionResult::empty("c"),
            result_with_hazard("d", "H319"),
        ]
        .into_iter()
        .collect();

        let order: Vec<&str> = batch.found_first().into_iter().map(|r| r.source.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
        assert_eq!(batch.found_count(), 2);
    }

    #[test]
    fn test_statements_by_category() {
        let result = result_with_hazard("", "H225");
        assert!(result.statements(StatementCategory::Hazard).contains("H225"));
        assert!(result.statements(StatementCategory::Supplemental).is_empty());
    }

    #[test]
    fn test_batch_serializes_as_array() {
        let batch: ResultBatch = vec![ExtractionResult::empty("x.pdf")].into_iter().collect();
        let json = serde_json::to_value(&batch).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["source"], "x.pdf");
        assert_eq!(json[0]["hazard"]["category"], "hazard");
        assert!(json[0]["wgk"].is_null());
    }
}
