//! Interactive prompt input.
//!
//! Reads one block of pasted sheet text (or PDF paths) at a time. A block
//! ends at the first empty line after some content.

use std::io::{self, BufRead, Write};

pub const PROMPT_BANNER: &str = "Paste text or insert path to pdf. Finish input with empty line.";
const PROMPT: &str = "> ";

/// One read from the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBlock {
    Text(String),
    /// The quit keyword was entered
    Quit,
    /// Input ended before any content
    Eof,
}

pub struct PromptReader<R, W> {
    reader: R,
    output: W,
    quit_keyword: String,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(reader: R, output: W, quit_keyword: impl Into<String>) -> Self {
        Self {
            reader,
            output,
            quit_keyword: quit_keyword.into(),
        }
    }

    /// Writer the prompt is shown on
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn read_block(&mut self) -> io::Result<InputBlock> {
        writeln!(self.output, "{}", PROMPT_BANNER)?;

        let mut lines: Vec<String> = Vec::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);

            if line.trim() == self.quit_keyword {
                return Ok(InputBlock::Quit);
            }

            if line.trim().is_empty() {
                // blank lines before any content do not end the block
                if lines.is_empty() {
                    continue;
                }
                if line.is_empty() {
                    break;
                }
            }

            lines.push(line.to_string());
        }

        let text = lines.join("\n");
        let text = text.trim();
        if text.is_empty() {
            return Ok(InputBlock::Eof);
        }
        Ok(InputBlock::Text(text.to_string()))
    }
}
