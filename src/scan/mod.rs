//! Line- and substring-level scanners for spread and story documents.
//!
//! Neither scanner parses XML. Content that does not match simply
//! produces fewer results, so malformed markup never raises an error.

pub mod spread;
pub mod story;

pub use spread::{LINK_ATTR, LinkUris, link_uris, scan_spread_file};
pub use story::{Marker, Markers, markers, scan_story_file};
