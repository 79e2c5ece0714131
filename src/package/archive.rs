use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use super::designmap::{DESIGNMAP_PATH, parse_designmap, strip_bom};
use super::{EntryOrder, PackageIndex};
use crate::error::{Error, Result};

/// Archive directory holding story documents.
pub const STORIES_DIR: &str = "Stories/";
/// Archive directory holding spread documents.
pub const SPREADS_DIR: &str = "Spreads/";

/// The story and spread listing of an opened IDML package.
///
/// Only the archive's index is read; member contents are scanned from the
/// extracted-files directory instead (see [`PackageRef`](super::PackageRef)).
#[derive(Debug, Clone)]
pub struct IdmlPackage {
    stories: Vec<String>,
    spreads: Vec<String>,
}

impl IdmlPackage {
    /// Open an IDML file from disk.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use idml2html::{EntryOrder, IdmlPackage, PackageIndex};
    ///
    /// let package = IdmlPackage::open("brochure.idml", EntryOrder::Archive)?;
    /// for story in package.stories() {
    ///     println!("{story}");
    /// }
    /// # Ok::<(), idml2html::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P, order: EntryOrder) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, order)
    }

    /// Index an IDML package from any [`Read`] + [`Seek`] source.
    pub fn from_reader<R: Read + Seek>(reader: R, order: EntryOrder) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let package = match order {
            EntryOrder::Archive => Self::from_archive_listing(&archive),
            EntryOrder::DesignMap => Self::from_designmap(&mut archive)?,
        };

        debug!(
            order = ?order,
            spreads = package.spreads.len(),
            stories = package.stories.len(),
            "indexed package"
        );
        Ok(package)
    }

    /// Entries under `Stories/` and `Spreads/`, in central-directory order.
    fn from_archive_listing<R: Read + Seek>(archive: &ZipArchive<R>) -> Self {
        let mut stories = Vec::new();
        let mut spreads = Vec::new();

        for name in archive.file_names() {
            if name.ends_with('/') {
                continue;
            }
            if name.starts_with(STORIES_DIR) {
                stories.push(name.to_owned());
            } else if name.starts_with(SPREADS_DIR) {
                spreads.push(name.to_owned());
            }
        }

        Self { stories, spreads }
    }

    fn from_designmap<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Self> {
        let mut file = match archive.by_name(DESIGNMAP_PATH) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::InvalidIdml(format!("no {DESIGNMAP_PATH} in package")));
            }
            Err(e) => return Err(e.into()),
        };
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        let content = String::from_utf8(strip_bom(&bytes).to_vec())?;

        let map = parse_designmap(&content)?;
        if map.spreads.is_empty() {
            warn!("{DESIGNMAP_PATH} lists no spreads");
        }
        if map.stories.is_empty() {
            warn!("{DESIGNMAP_PATH} lists no stories");
        }

        Ok(Self {
            stories: map.stories,
            spreads: map.spreads,
        })
    }
}

impl PackageIndex for IdmlPackage {
    fn stories(&self) -> &[String] {
        &self.stories
    }

    fn spreads(&self) -> &[String] {
        &self.spreads
    }
}
