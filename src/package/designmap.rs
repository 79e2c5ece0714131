//! `designmap.xml` parsing.
//!
//! The design map is the root document of an IDML package. Among other
//! things it lists every spread and story as `<idPkg:Spread src="..."/>` and
//! `<idPkg:Story src="..."/>`, in document order.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{Error, Result};

/// Archive path of the design map.
pub const DESIGNMAP_PATH: &str = "designmap.xml";

/// Spread and story sources listed by a design map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DesignMap {
    pub spreads: Vec<String>,
    pub stories: Vec<String>,
}

/// Parse design map content.
pub fn parse_designmap(content: &str) -> Result<DesignMap> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut map = DesignMap::default();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                let name = e.name();
                let target = match local_name(name.as_ref()) {
                    b"Spread" => &mut map.spreads,
                    b"Story" => &mut map.stories,
                    _ => continue,
                };
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"src" {
                        target.push(String::from_utf8(attr.value.to_vec())?);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(map)
}

/// Strip a UTF-8 byte order mark.
pub(crate) fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data)
}

/// Extract local name from namespaced XML name (e.g., "idPkg:Story" -> "Story").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}
