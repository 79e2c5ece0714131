//! Ordered emission of spread images and story markers.

use std::io::Write;

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::package::{PackageIndex, PackageRef};
use crate::scan::{link_uris, markers};

/// Class attribute given to every emitted image paragraph.
pub const IMAGE_CLASS: &str = "zimg";

/// Counts gathered while emitting one package.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub spreads: usize,
    pub images: usize,
    pub stories: usize,
    pub markers: usize,
}

/// Drives the scanners over a package in index order and writes the result.
///
/// Output is every spread's image references, one
/// `<p class="zimg">URI</p>` per line with a blank line closing each spread
/// (even a spread without images), followed by the markers of all stories
/// with no separators between stories.
pub struct Emitter<I> {
    package: PackageRef,
    index: I,
}

impl<I: PackageIndex> Emitter<I> {
    pub fn new(package: PackageRef, index: I) -> Self {
        Self { package, index }
    }

    pub fn package(&self) -> &PackageRef {
        &self.package
    }

    /// Write spreads, then stories.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Summary> {
        let mut summary = Summary::default();
        self.write_spreads(out, &mut summary)?;
        self.write_stories(out, &mut summary)?;
        out.flush()?;

        info!(
            spreads = summary.spreads,
            images = summary.images,
            stories = summary.stories,
            markers = summary.markers,
            "emitted package"
        );
        Ok(summary)
    }

    /// Write one image group per spread.
    pub fn write_spreads<W: Write>(&self, out: &mut W, summary: &mut Summary) -> Result<()> {
        for id in self.index.spreads() {
            let path = self.package.resolve(id);
            trace!(path = %path.display(), "reading spread");
            let text = crate::error::read_text(&path)?;

            let mut count = 0;
            for uri in link_uris(&text) {
                writeln!(out, "<p class=\"{IMAGE_CLASS}\">{uri}</p>")?;
                count += 1;
            }
            writeln!(out)?;

            debug!(spread = %id, images = count, "scanned spread");
            summary.spreads += 1;
            summary.images += count;
        }
        Ok(())
    }

    /// Write the markers of every story as one flat stream.
    pub fn write_stories<W: Write>(&self, out: &mut W, summary: &mut Summary) -> Result<()> {
        for id in self.index.stories() {
            let path = self.package.resolve(id);
            trace!(path = %path.display(), "reading story");
            let text = crate::error::read_text(&path)?;

            let mut count = 0;
            for marker in markers(&text) {
                writeln!(out, "{marker}")?;
                count += 1;
            }

            debug!(story = %id, markers = count, "scanned story");
            summary.stories += 1;
            summary.markers += count;
        }
        Ok(())
    }
}
