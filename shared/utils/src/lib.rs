pub mod config;
pub mod logging;
pub mod error;
pub mod statements;

pub use config::*;
pub use logging::*;
pub use error::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.extraction.max_pdf_pages, 3);
        assert_eq!(config.extraction.quit_keyword, "quit");
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"output": {"format": "json"}}"#).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.extraction.max_pdf_pages, 3);
    }

    #[test]
    fn test_error_handling() {
        let error = HazcodeError::not_found("aceton.pdf");
        assert_eq!(error.error_code(), "NOT_FOUND");
        assert!(error.is_not_found());
    }
}
