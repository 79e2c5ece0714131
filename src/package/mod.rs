//! IDML package indexing and path resolution.
//!
//! An IDML file is a zip archive. Scanning reads members from a directory the
//! package was extracted into beforehand (`<package>_FILES/`); the archive
//! itself is only consulted for which stories and spreads exist and in what
//! order.

mod archive;
mod designmap;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use archive::{IdmlPackage, SPREADS_DIR, STORIES_DIR};
pub use designmap::{DESIGNMAP_PATH, DesignMap, parse_designmap};

/// Suffix appended to the package path to locate its extracted files.
pub const FILES_DIR_SUFFIX: &str = "_FILES";

/// Ordered story and spread identifiers of a package.
///
/// Identifiers are package-relative paths such as `Stories/Story_u1d5.xml`.
/// Their order is authoritative and must not be re-sorted by consumers.
pub trait PackageIndex {
    fn stories(&self) -> &[String];
    fn spreads(&self) -> &[String];
}

impl<T: PackageIndex + ?Sized> PackageIndex for &T {
    fn stories(&self) -> &[String] {
        (**self).stories()
    }

    fn spreads(&self) -> &[String] {
        (**self).spreads()
    }
}

/// How story and spread identifiers are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EntryOrder {
    /// Archive listing order of `Stories/` and `Spreads/` members.
    #[default]
    Archive,
    /// Order of the `idPkg:Spread` / `idPkg:Story` elements in `designmap.xml`.
    #[cfg_attr(feature = "cli", value(name = "designmap"))]
    DesignMap,
}

/// A fixed list of identifiers, for callers that index packages themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticIndex {
    pub stories: Vec<String>,
    pub spreads: Vec<String>,
}

impl PackageIndex for StaticIndex {
    fn stories(&self) -> &[String] {
        &self.stories
    }

    fn spreads(&self) -> &[String] {
        &self.spreads
    }
}

/// Location of a package and of its extracted-files directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    path: PathBuf,
    files_dir: PathBuf,
}

impl PackageRef {
    /// Derive the extracted-files directory from the package path.
    ///
    /// ```
    /// use idml2html::PackageRef;
    ///
    /// let package = PackageRef::new("work/brochure.idml");
    /// assert_eq!(
    ///     package.resolve("Stories/Story_u1.xml"),
    ///     std::path::Path::new("work/brochure.idml_FILES/Stories/Story_u1.xml")
    /// );
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut files_dir = OsString::from(path.as_os_str());
        files_dir.push(FILES_DIR_SUFFIX);
        Self {
            path,
            files_dir: PathBuf::from(files_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// Full path of a package member inside the extracted-files directory.
    /// Existence is not checked.
    pub fn resolve(&self, id: &str) -> PathBuf {
        self.files_dir.join(id)
    }
}
