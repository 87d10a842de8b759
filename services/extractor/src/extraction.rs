//! Sheet Extraction Service
//!
//! Orchestrates source resolution, statement extraction and rendering.

use std::io::{BufRead, Write};

use hazcode_models::ResultBatch;
use hazcode_utils::statements::{format_batch, format_batch_json, process_all};
use hazcode_utils::{AppConfig, HazcodeResult, OutputFormat};
use tracing::info;

use crate::input::{InputBlock, PromptReader};
use crate::pdf_processor::PdfProcessor;
use crate::sources::SourceResolver;

const FINISHED_MESSAGE: &str =
    "Finished extracting. The following lines can be pasted into a spreadsheet.";

/// Sheet extractor service
pub struct SheetExtractor {
    resolver: SourceResolver,
    output_format: OutputFormat,
}

impl SheetExtractor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            resolver: SourceResolver::new(PdfProcessor::new(config.extraction.max_pdf_pages)),
            output_format: config.output.format,
        }
    }

    /// Resolve and process inputs, one result per sheet
    pub fn extract<'a, I>(&self, inputs: I) -> ResultBatch
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sheets = self.resolver.resolve_all(inputs);
        let batch = process_all(&sheets);

        info!(
            sheets = batch.len(),
            found = batch.found_count(),
            "Finished extracting"
        );
        batch
    }

    pub fn render(&self, batch: &ResultBatch) -> HazcodeResult<String> {
        match self.output_format {
            OutputFormat::Table => Ok(format_batch(batch)),
            OutputFormat::Json => format_batch_json(batch),
        }
    }

    /// Extract and render in one step
    pub fn run<'a, I>(&self, inputs: I) -> HazcodeResult<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let batch = self.extract(inputs);
        self.render(&batch)
    }

    /// Prompt for input blocks until the quit keyword or end of input.
    ///
    /// Returns the number of blocks processed.
    pub fn run_interactive<R, W>(&self, prompt: &mut PromptReader<R, W>) -> HazcodeResult<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut blocks = 0;

        loop {
            let text = match prompt.read_block()? {
                InputBlock::Text(text) => text,
                InputBlock::Quit | InputBlock::Eof => break,
            };

            let output = self.run([text.as_str()])?;
            blocks += 1;

            let out = prompt.output();
            writeln!(out)?;
            writeln!(out, "{}", FINISHED_MESSAGE)?;
            writeln!(out, "{}", output)?;
            writeln!(out)?;
        }

        Ok(blocks)
    }
}

impl Default for SheetExtractor {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
