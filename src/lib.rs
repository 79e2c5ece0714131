//! # idml2html
//!
//! Recovers story text and image references from an IDML (InDesign Markup
//! Language) package as a flat, HTML-like line stream.
//!
//! This is not a layout or styling converter. It emits:
//!
//! - one `<p class="zimg">URI</p>` line per image link of each spread, with a
//!   blank line closing every spread
//! - every `<ParagraphStyleRange ...>`, `<Content ...>` and
//!   `</ParagraphStyleRange>` line of every story, in story order
//!
//! The package must already be extracted next to itself as
//! `<package>_FILES/`; the archive is only read to list its members.
//!
//! ## Quick Start
//!
//! ```no_run
//! use idml2html::{convert, Options};
//!
//! let stdout = std::io::stdout();
//! let summary = convert("brochure.idml", &Options::default(), &mut stdout.lock())?;
//! eprintln!("{} spreads, {} stories", summary.spreads, summary.stories);
//! # Ok::<(), idml2html::Error>(())
//! ```
//!
//! ## Custom indexes
//!
//! [`Emitter`] accepts any [`PackageIndex`], so the listing can come from
//! somewhere other than the archive:
//!
//! ```no_run
//! use idml2html::{Emitter, PackageRef, StaticIndex};
//!
//! let index = StaticIndex {
//!     spreads: vec!["Spreads/Spread_ub6.xml".into()],
//!     stories: vec!["Stories/Story_u1d5.xml".into()],
//! };
//! let emitter = Emitter::new(PackageRef::new("brochure.idml"), index);
//! emitter.run(&mut std::io::stdout())?;
//! # Ok::<(), idml2html::Error>(())
//! ```

pub mod emit;
pub mod error;
pub mod package;
pub mod scan;

use std::io::Write;
use std::path::Path;

pub use emit::{Emitter, IMAGE_CLASS, Summary};
pub use error::{Error, Result};
pub use package::{EntryOrder, IdmlPackage, PackageIndex, PackageRef, StaticIndex};

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub order: EntryOrder,
}

/// Index the package at `path` and write its stream to `out`.
pub fn convert<P: AsRef<Path>, W: Write>(path: P, options: &Options, out: &mut W) -> Result<Summary> {
    let package = PackageRef::new(path);
    let index = IdmlPackage::open(package.path(), options.order)?;
    tracing::info!(
        package = %package.path().display(),
        files = %package.files_dir().display(),
        "opened package"
    );
    Emitter::new(package, index).run(out)
}
