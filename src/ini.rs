//! Minimal INI reader for Windows INF content
//!
//! Supports bracketed section headers, `key = value` and `key: value` entries,
//! `;`/`#` comment lines, and duplicate-key overwrite within a section.
//! Section names keep the casing they were written with; keys are folded to
//! lowercase. This is the exact grammar the section whitelist logic depends
//! on, nothing more.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Matches a section header at the start of a line. Text after the closing
/// bracket is ignored.
static SECTION_HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?P<header>[^\]]+)\]").unwrap());

/// A parsed section: its name as written plus its entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Section {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite a key. Overwriting keeps the key's original position.
    fn set(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Entries in file order, duplicate keys collapsed to their last value
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// Parse INI text into an ordered list of sections.
///
/// A repeated section header reopens the existing section instead of erroring.
/// An entry before any section header, or a line that is neither a header, an
/// entry, a comment, nor blank, is rejected with the offending line number.
pub fn parse(content: &str) -> Result<Vec<Section>> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(captures) = SECTION_HEADER_REGEX.captures(line) {
            let name = &captures["header"];
            let position = match sections.iter().position(|section| section.name == name) {
                Some(position) => position,
                None => {
                    sections.push(Section::new(name));
                    sections.len() - 1
                }
            };
            current = Some(position);
            continue;
        }

        let section = match current {
            Some(position) => &mut sections[position],
            None => {
                return Err(Error::Parse {
                    line: index + 1,
                    message: format!("entry before any section header: {:?}", line),
                });
            }
        };

        match line.split_once(['=', ':']) {
            Some((key, value)) => {
                section.set(key.trim().to_lowercase(), value.trim().to_string());
            }
            None => {
                return Err(Error::Parse {
                    line: index + 1,
                    message: format!("not a section header or key/value entry: {:?}", line),
                });
            }
        }
    }

    Ok(sections)
}
