//! Paragraph and content markers from story documents.
//!
//! InDesign writes stories with one element per physical line, so each line
//! is classified on its own: no element tree is built and no state carries
//! from one line to the next. A tag split across lines, or several tags
//! sharing a line, is matched (or missed) exactly as its first line reads.

use std::fmt;
use std::path::Path;

use crate::error::{Result, read_text};

/// Opening-tag prefix of a paragraph style range.
pub const PARAGRAPH_OPEN: &str = "<ParagraphStyleRange";
/// Closing tag of a paragraph style range.
pub const PARAGRAPH_CLOSE: &str = "</ParagraphStyleRange>";
/// Opening-tag prefix of a content node.
pub const CONTENT_OPEN: &str = "<Content";

/// One accepted story line, trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    ParagraphStart(&'a str),
    Content(&'a str),
    ParagraphEnd(&'a str),
}

impl<'a> Marker<'a> {
    /// Classify a single physical line. Returns `None` for discarded lines.
    pub fn classify(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with(PARAGRAPH_OPEN) {
            Some(Marker::ParagraphStart(line))
        } else if line.starts_with(CONTENT_OPEN) {
            Some(Marker::Content(line))
        } else if line == PARAGRAPH_CLOSE {
            Some(Marker::ParagraphEnd(line))
        } else {
            None
        }
    }

    /// The captured line, as it is emitted.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Marker::ParagraphStart(s) | Marker::Content(s) | Marker::ParagraphEnd(s) => s,
        }
    }
}

impl fmt::Display for Marker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Iterate over the markers of a story in file order.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The iterator is lazy and
/// borrows from `text`; clone it to restart.
///
/// ```
/// use idml2html::scan::markers;
///
/// let story = "  <ParagraphStyleRange foo=\"1\">\n    <Content>Hello</Content>\n</ParagraphStyleRange>\n<SomeOtherTag/>\n";
/// let found: Vec<_> = markers(story).map(|m| m.as_str()).collect();
/// assert_eq!(found, ["<ParagraphStyleRange foo=\"1\">", "<Content>Hello</Content>", "</ParagraphStyleRange>"]);
/// ```
pub fn markers(text: &str) -> Markers<'_> {
    Markers {
        lines: text.split(['\n', '\r']),
    }
}

/// Lazy iterator returned by [`markers`].
#[derive(Debug, Clone)]
pub struct Markers<'a> {
    lines: std::str::Split<'a, [char; 2]>,
}

impl<'a> Iterator for Markers<'a> {
    type Item = Marker<'a>;

    fn next(&mut self) -> Option<Marker<'a>> {
        self.lines.by_ref().find_map(Marker::classify)
    }
}

/// Read a story file and collect its markers as owned strings.
pub fn scan_story_file(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(markers(&text).map(|m| m.as_str().to_owned()).collect())
}
