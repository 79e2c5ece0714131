//! Image-link extraction from spread documents.
//!
//! A spread places frames on a page; every placed graphic carries a
//! `<Link ... LinkResourceURI="file:..."/>` element. We only need the
//! attribute values, so the scan is a plain substring search rather than an
//! XML parse: content that is not well-formed still yields whatever links
//! can be recognised.

use std::path::Path;

use memchr::memmem;

use crate::error::{Result, read_text};

/// The attribute prefix that introduces an image reference.
pub const LINK_ATTR: &str = "LinkResourceURI=\"";

/// Iterate over every `LinkResourceURI` value in `text`, in document order.
///
/// Values are returned verbatim (no URI validation, empty values included)
/// and duplicates are kept. The iterator is lazy and borrows from `text`;
/// clone it to restart from the same position.
///
/// ```
/// use idml2html::scan::link_uris;
///
/// let spread = r#"<Link LinkResourceURI="images/a.png"/><Link LinkResourceURI="images/b.png"/>"#;
/// let uris: Vec<_> = link_uris(spread).collect();
/// assert_eq!(uris, ["images/a.png", "images/b.png"]);
/// ```
pub fn link_uris(text: &str) -> LinkUris<'_> {
    LinkUris { text, pos: 0 }
}

/// Lazy iterator returned by [`link_uris`].
#[derive(Debug, Clone)]
pub struct LinkUris<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for LinkUris<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let haystack = &self.text.as_bytes()[self.pos..];
        let rel = memmem::find(haystack, LINK_ATTR.as_bytes())?;
        let val_start = self.pos + rel + LINK_ATTR.len();

        // An unterminated value ends the scan; there is nothing after it to match.
        let Some(len) = memchr::memchr(b'"', &self.text.as_bytes()[val_start..]) else {
            self.pos = self.text.len();
            return None;
        };

        let val_end = val_start + len;
        self.pos = val_end + 1;
        // Both bounds sit next to ASCII bytes, so they are char boundaries.
        Some(&self.text[val_start..val_end])
    }
}

/// Read a spread file and collect its image references.
pub fn scan_spread_file(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(link_uris(&text).map(str::to_owned).collect())
}
