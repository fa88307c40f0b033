use serde::ser::{Serialize, SerializeMap, Serializer};

use super::section::Section;
use super::value::Value;
use crate::error::ParseError;
use crate::parser;

/// One patient's parsed assessment: section name to [`Section`].
///
/// Built once by the parser and read-only afterwards. Section names are
/// unique; a later section with the same name replaced the earlier one
/// wholesale during parsing. Every section holds at least one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientRecord {
    sections: Vec<(String, Section)>,
}

impl PatientRecord {
    /// Parse already-decoded record text. Never fails.
    pub fn parse(text: &str) -> Self {
        parser::parse_text(text)
    }

    /// Decode and parse raw uploaded bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        parser::parse_bytes(bytes)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn field(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section)?.get(key)
    }

    /// Numeric field lookup. Text values count as absent.
    pub fn number(&self, section: &str, key: &str) -> Option<f64> {
        self.field(section, key)?.as_f64()
    }

    /// Field rendered as display text, whatever its type.
    pub fn text(&self, section: &str, key: &str) -> Option<String> {
        self.field(section, key).map(ToString::to_string)
    }

    /// Sections in the order their names were first seen.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Store a finished section, replacing any earlier section of the same
    /// name. Empty sections are never stored. Returns whether an earlier
    /// section was replaced.
    pub(crate) fn commit(&mut self, name: String, section: Section) -> bool {
        if section.is_empty() {
            return false;
        }
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = section;
                true
            }
            None => {
                self.sections.push((name, section));
                false
            }
        }
    }
}

impl Serialize for PatientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
