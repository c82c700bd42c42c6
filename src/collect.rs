//! Interactive collection of the analysis inputs.
//!
//! `Collector` is generic over its reader and writer so the whole prompt flow
//! can be driven from in-memory buffers in tests.

use crate::error::InputError;
use crate::request::{AnalysisRequest, Relationship, RELATIONSHIP_OPTIONS, UNKNOWN_TITLE};
use std::io::{BufRead, Write};

pub const PROMPT_MARKER: &str = "> ";
const MULTILINE_HINT: &str = "(Press Enter on a blank line when done)";
const TITLE_LABEL: &str =
    "Sender's title or role (e.g., 'CEO', 'Direct Manager', 'Customer'):";
const RELATIONSHIP_LABEL: &str = "Your relationship to the sender:";
const RELATIONSHIP_RETRY: &str = "Please enter a number or describe the relationship.";

pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Hand back the writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for email, title, and relationship, in that order.
    pub fn collect(&mut self) -> Result<AnalysisRequest, InputError> {
        let email_content = self.read_email()?;
        let sender_title = self.read_title()?;
        let relationship = self.read_relationship(RELATIONSHIP_OPTIONS)?;
        Ok(AnalysisRequest {
            email_content,
            sender_title,
            relationship,
        })
    }

    /// Read the email body; blank after trimming is an error.
    pub fn read_email(&mut self) -> Result<String, InputError> {
        let email = self.read_multiline("Paste the email content:")?;
        if email.is_empty() {
            return Err(InputError::EmptyInput);
        }
        Ok(email)
    }

    /// Read lines until the first blank one (or end of input) and trim the joined text.
    pub fn read_multiline(&mut self, label: &str) -> Result<String, InputError> {
        writeln!(self.output, "\n{label}")?;
        writeln!(self.output, "{MULTILINE_HINT}")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n").trim().to_string())
    }

    /// Read the sender's title; blank becomes [`UNKNOWN_TITLE`].
    pub fn read_title(&mut self) -> Result<String, InputError> {
        writeln!(self.output, "\n{TITLE_LABEL}")?;
        let title = self.prompt_line()?.unwrap_or_default();
        let title = title.trim();
        if title.is_empty() {
            return Ok(UNKNOWN_TITLE.to_string());
        }
        Ok(title.to_string())
    }

    /// Show the numbered menu and loop until a number or free text is given.
    pub fn read_relationship(&mut self, options: &[&str]) -> Result<Relationship, InputError> {
        writeln!(self.output, "\n{RELATIONSHIP_LABEL}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {option}", i + 1)?;
        }
        writeln!(self.output, "  Or type your own:")?;

        loop {
            let Some(raw) = self.prompt_line()? else {
                return Err(InputError::Closed);
            };
            if let Some(choice) = parse_relationship(&raw, options.len()) {
                return Ok(choice);
            }
            writeln!(self.output, "{RELATIONSHIP_RETRY}")?;
        }
    }

    fn prompt_line(&mut self) -> Result<Option<String>, InputError> {
        write!(self.output, "{PROMPT_MARKER}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

/// Interpret one menu answer.
///
/// A number in `1..=option_count` selects that entry; any other non-empty
/// text (out-of-range numbers included) is taken as a custom description.
/// Blank input yields `None` so the caller re-prompts.
pub fn parse_relationship(raw: &str, option_count: usize) -> Option<Relationship> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<usize>() {
            if (1..=option_count).contains(&n) {
                return Some(Relationship::Selected(n - 1));
            }
        }
    }
    Some(Relationship::Custom(raw.to_string()))
}
