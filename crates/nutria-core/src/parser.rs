//! Section-delimited record parser.
//!
//! The format has no formal grammar. Each trimmed line is one of:
//!
//! - a **boundary**: empty, or starting with `""`. Closes the current group
//!   of fields and commits it under the current section name.
//! - a **header**: any line without a comma. Names the section that the
//!   following fields belong to.
//! - a **field**: `key,value`, split on the first comma only.
//!
//! Parsing is a single pass with no backtracking. Malformed lines degrade to
//! skipped fields or text values; only undecodable input fails.

use tracing::{debug, info};

use crate::error::ParseError;
use crate::models::record::PatientRecord;
use crate::models::section::Section;
use crate::models::value::Value;

const BOUNDARY_MARKER: &str = "\"\"";
const FIELD_SEPARATOR: char = ',';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Boundary,
    Header(&'a str),
    /// `value` is trimmed and stripped of one layer of surrounding quotes.
    Field { key: &'a str, value: &'a str },
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.starts_with(BOUNDARY_MARKER) {
            return Line::Boundary;
        }
        match line.split_once(FIELD_SEPARATOR) {
            None => Line::Header(line),
            Some((key, value)) => Line::Field {
                key: key.trim(),
                value: unquote(value.trim()),
            },
        }
    }
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Where the parser is relative to section headers.
#[derive(Debug, Default)]
enum State {
    /// No header seen yet. Fields read here can never be committed.
    #[default]
    Preamble,
    InSection(String),
}

#[derive(Debug, Default)]
struct RecordParser {
    state: State,
    pending: Section,
    record: PatientRecord,
}

impl RecordParser {
    fn feed(&mut self, line: &str) {
        match Line::classify(line) {
            Line::Boundary => self.commit_pending(),
            Line::Header(name) => self.open_section(name),
            Line::Field { key, value } => self.push_field(key, value),
        }
    }

    fn finish(mut self) -> PatientRecord {
        self.commit_pending();
        info!(sections = self.record.len(), "parsed patient record");
        self.record
    }

    /// Commit the accumulator under the current section (if any) and reset
    /// it. The current section name survives the boundary.
    fn commit_pending(&mut self) {
        let fields = std::mem::take(&mut self.pending);
        let State::InSection(name) = &self.state else {
            return;
        };
        if fields.is_empty() {
            return;
        }
        let count = fields.len();
        if self.record.commit(name.clone(), fields) {
            debug!(section = %name, fields = count, "section replaced by later occurrence");
        } else {
            debug!(section = %name, fields = count, "committed section");
        }
    }

    /// A header always clears the accumulator, even if it was never committed.
    fn open_section(&mut self, name: &str) {
        if !self.pending.is_empty() {
            debug!(
                discarded = self.pending.len(),
                header = name,
                "header dropped uncommitted fields"
            );
        }
        self.pending = Section::new();
        self.state = State::InSection(name.to_string());
    }

    fn push_field(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if let Some(previous) = self.pending.insert(key.to_string(), Value::coerce(value)) {
            debug!(key, %previous, "duplicate field replaced");
        }
    }
}

/// Parse decoded record text.
pub fn parse_text(text: &str) -> PatientRecord {
    let mut parser = RecordParser::default();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Decode uploaded bytes as UTF-8 (ignoring a leading byte-order mark) and
/// parse them.
pub fn parse_bytes(bytes: &[u8]) -> Result<PatientRecord, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    Ok(parse_text(text))
}
