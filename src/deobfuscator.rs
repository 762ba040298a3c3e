//! Deobfuscation pipeline for autorun.inf files
//!
//! Conficker-style droppers pad autorun.inf with binary junk, bury the real
//! directives between decoy sections and drop closing brackets so naive
//! parsers give up while Windows still honors the file. The [`Deobfuscator`]
//! loads such a file through a lossy single-byte filter and offers independent
//! cleanup passes that reduce it to the sections Autorun actually reads.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::ini;

/// Sections Windows Autorun recognizes, keyed by lowercase name and mapped to
/// their documented casing.
pub const RECOGNIZED_SECTIONS: [(&str, &str); 5] = [
    ("autorun", "Autorun"),
    ("content", "Content"),
    ("exclusivecontentpaths", "ExclusiveContentPaths"),
    ("ignorecontentpaths", "IgnoreContentPaths"),
    ("deviceinstall", "DeviceInstall"),
];

fn canonical_section_name(name: &str) -> Option<&'static str> {
    let folded = name.to_lowercase();
    RECOGNIZED_SECTIONS
        .iter()
        .find(|(lower, _)| *lower == folded)
        .map(|(_, canonical)| *canonical)
}

/// Line-oriented cleanup pipeline over a single autorun.inf file.
///
/// The line buffer is the only state. Every pass replaces the buffer with a
/// filtered or rewritten copy; [`Deobfuscator::content`] can serialize it at
/// any stage.
#[derive(Debug)]
pub struct Deobfuscator {
    lines: Vec<String>,
}

impl Deobfuscator {
    /// Load a file, dropping every byte outside the accepted range.
    ///
    /// Kept code points: line feed, printable ASCII (32..=127) and the
    /// Latin-1 range above 0xA0. Everything else vanishes without leaving a
    /// gap, which rejoins directives the obfuscator split with junk bytes.
    /// Each line is then left-trimmed of spaces and tabs.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).map_err(|e| Error::load(path, e.to_string()))?;

        let filtered: String = raw
            .iter()
            .filter(|&&byte| byte == b'\n' || (32..=127).contains(&byte) || byte > 160)
            .map(|&byte| char::from(byte))
            .collect();

        let lines: Vec<String> = filtered
            .split('\n')
            .map(|line| line.trim_start_matches([' ', '\t']).to_string())
            .collect();

        debug!("loaded {} lines from {}", lines.len(), path.display());
        Ok(Deobfuscator { lines })
    }

    /// Current buffer joined with line feeds
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Drop lines which start with a `;` prefix
    pub fn remove_comments(&mut self) {
        self.lines.retain(|line| !line.starts_with(';'));
    }

    /// Drop zero-length lines
    pub fn remove_empty_lines(&mut self) {
        self.lines.retain(|line| !line.is_empty());
    }

    /// Append the closing `]` to section headers that lost it.
    ///
    /// Lines starting with `[` are right-trimmed of spaces and tabs, both
    /// after and before an existing closing bracket, so `[Autorun  \t]` and
    /// `[Autorun` both normalize to `[Autorun]`. Other lines pass through
    /// unchanged.
    pub fn fix_missing_section_brackets(&mut self) {
        self.lines = std::mem::take(&mut self.lines)
            .into_iter()
            .map(|line| {
                if !line.starts_with('[') {
                    return line;
                }
                let trimmed = line.trim_end_matches([' ', '\t']);
                let header = trimmed.strip_suffix(']').unwrap_or(trimmed);
                let mut repaired = header.trim_end_matches([' ', '\t']).to_string();
                repaired.push(']');
                repaired
            })
            .collect();
    }

    /// Section names present in the buffer, in file order and with their
    /// casing as written.
    pub fn sections(&self) -> Result<Vec<String>> {
        let parsed = ini::parse(&self.content())?;
        Ok(parsed.into_iter().map(|section| section.name).collect())
    }

    /// Rebuild the buffer from recognized sections only.
    ///
    /// Decoy sections are dropped together with their entries. Surviving
    /// sections are emitted with canonical casing and normalized
    /// `key = value` lines, in the order they were parsed.
    pub fn remove_junk_sections(&mut self) -> Result<()> {
        let parsed = ini::parse(&self.content())?;

        let mut rebuilt = Vec::new();
        for section in parsed {
            let Some(canonical) = canonical_section_name(&section.name) else {
                debug!("dropping junk section [{}]", section.name);
                continue;
            };
            rebuilt.push(format!("[{}]", canonical));
            for (key, value) in section.entries() {
                rebuilt.push(format!("{} = {}", key, value));
            }
        }
        self.lines = rebuilt;
        Ok(())
    }
}
