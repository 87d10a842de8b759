//! Source Resolver
//!
//! Decides whether a block of user input names PDF files or is sheet text
//! itself, and turns it into [`SheetInput`]s.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hazcode_models::SheetInput;
use hazcode_utils::{HazcodeError, HazcodeResult};
use tracing::{error, warn};

use crate::pdf_processor::PdfProcessor;

/// Resolves user input to sheet texts
pub struct SourceResolver {
    pdf_processor: PdfProcessor,
}

impl SourceResolver {
    pub fn new(pdf_processor: PdfProcessor) -> Self {
        Self { pdf_processor }
    }

    /// Resolve one input block.
    ///
    /// PDF requests expand to one input per matched file. When none of the
    /// patterns matches a file, the block is used as literal text.
    pub fn resolve(&self, input: &str) -> Vec<SheetInput> {
        let Some(patterns) = pdf_patterns(input) else {
            return vec![SheetInput::pasted(input)];
        };

        warn!("Interpreting input as path to pdf file");

        let mut paths = BTreeSet::new();
        for pattern in &patterns {
            match expand_pattern(pattern) {
                Ok(found) => paths.extend(found),
                Err(e) => warn!(pattern = %pattern, error = %e, "Skipping invalid path pattern"),
            }
        }

        if paths.is_empty() {
            warn!("File could not be found. Interpreting input as plain text");
            return vec![SheetInput::pasted(input)];
        }

        paths.iter().map(|path| self.read_sheet(path)).collect()
    }

    /// Resolve several inputs, keeping their order
    pub fn resolve_all<'a, I>(&self, inputs: I) -> Vec<SheetInput>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs
            .into_iter()
            .flat_map(|input| self.resolve(input))
            .collect()
    }

    /// A file that cannot be read still gets a line in the output
    fn read_sheet(&self, path: &Path) -> SheetInput {
        let label = file_label(path);
        match self.pdf_processor.extract_file(path) {
            Ok(content) => SheetInput::from_file(label, content.text),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read PDF");
                SheetInput::from_file(label, String::new())
            }
        }
    }
}

/// Lines of `input` when every non-empty line ends in `.pdf` (any case)
pub fn pdf_patterns(input: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() || !lines.iter().all(|line| has_pdf_extension(line)) {
        return None;
    }

    Some(lines.into_iter().map(String::from).collect())
}

fn has_pdf_extension(line: &str) -> bool {
    line.rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        && line.contains('.')
}

/// Expand a glob pattern, trying both `.pdf` and `.PDF` spellings of the
/// extension. Matches are de-duplicated and sorted.
///
/// An existing file is taken as is, so names containing `[`, `*` or `?`
/// are not read as patterns.
pub fn expand_pattern(pattern: &str) -> HazcodeResult<BTreeSet<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.is_file() {
        return Ok(BTreeSet::from([literal.to_path_buf()]));
    }

    let mut variants = BTreeSet::from([pattern.to_string()]);
    if has_pdf_extension(pattern) {
        let stem = &pattern[..pattern.len() - ".pdf".len()];
        variants.insert(format!("{}.pdf", stem));
        variants.insert(format!("{}.PDF", stem));
    }

    let mut paths = BTreeSet::new();
    for variant in &variants {
        let entries =
            glob::glob(variant).map_err(|e| HazcodeError::pattern(variant.as_str(), e.to_string()))?;
        paths.extend(entries.filter_map(Result::ok).filter(|p| p.is_file()));
    }

    Ok(paths)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
