//! Synthetic IDML packages for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub const SPREAD_1: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<idPkg:Spread xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="18.0">
	<Spread Self="ub6" PageCount="2">
		<Rectangle Self="u10a">
			<Image Self="u10b">
				<Link Self="u10c" LinkResourceURI="images/a.png" />
			</Image>
		</Rectangle>
		<Rectangle Self="u10d">
			<Image Self="u10e">
				<Link Self="u10f" LinkResourceURI="images/b.png" />
			</Image>
		</Rectangle>
	</Spread>
</idPkg:Spread>
"#;

pub const SPREAD_2: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<idPkg:Spread xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="18.0">
	<Spread Self="uc9" PageCount="1">
		<TextFrame Self="ud0" ParentStory="u1d5" />
	</Spread>
</idPkg:Spread>
"#;

pub const STORY_1: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<idPkg:Story xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="18.0">
	<Story Self="u1d5">
		<ParagraphStyleRange AppliedParagraphStyle="ParagraphStyle/Heading">
			<CharacterStyleRange AppliedCharacterStyle="CharacterStyle/$ID/[No character style]">
				<Content>Welcome</Content>
			</CharacterStyleRange>
		</ParagraphStyleRange>
	</Story>
</idPkg:Story>
"#;

pub const STORY_2: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<idPkg:Story xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="18.0">
	<Story Self="u11b">
		<ParagraphStyleRange AppliedParagraphStyle="ParagraphStyle/Body">
			<CharacterStyleRange AppliedCharacterStyle="CharacterStyle/$ID/[No character style]">
				<Content>Second story.</Content>
				<Br />
				<Content>More text.</Content>
			</CharacterStyleRange>
		</ParagraphStyleRange>
	</Story>
</idPkg:Story>
"#;

pub const STORY_UNRELATED: &str = "<Story Self=\"u200\">\n\t<StoryPreference />\n</Story>\n";

pub const DESIGNMAP: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Document xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="18.0" Self="d">
	<idPkg:Spread src="Spreads/Spread_ub6.xml" />
	<idPkg:Spread src="Spreads/Spread_uc9.xml" />
	<idPkg:BackingStory src="XML/BackingStory.xml" />
	<idPkg:Story src="Stories/Story_u1d5.xml" />
	<idPkg:Story src="Stories/Story_u200.xml" />
	<idPkg:Story src="Stories/Story_u11b.xml" />
</Document>
"#;

/// Members in the order they are written to the archive.
pub const MEMBERS: &[(&str, &str)] = &[
    ("mimetype", "application/vnd.adobe.indesign-idml-package"),
    ("designmap.xml", DESIGNMAP),
    ("Spreads/Spread_ub6.xml", SPREAD_1),
    ("Spreads/Spread_uc9.xml", SPREAD_2),
    ("Stories/Story_u11b.xml", STORY_2),
    ("Stories/Story_u1d5.xml", STORY_1),
    ("Stories/Story_u200.xml", STORY_UNRELATED),
    ("XML/BackingStory.xml", "<XmlStory/>"),
];

/// Archive-order output of [`MEMBERS`].
pub const EXPECTED_ARCHIVE_ORDER: &str = "\
<p class=\"zimg\">images/a.png</p>
<p class=\"zimg\">images/b.png</p>


<ParagraphStyleRange AppliedParagraphStyle=\"ParagraphStyle/Body\">
<Content>Second story.</Content>
<Content>More text.</Content>
</ParagraphStyleRange>
<ParagraphStyleRange AppliedParagraphStyle=\"ParagraphStyle/Heading\">
<Content>Welcome</Content>
</ParagraphStyleRange>
";

/// Design-map-order output of [`MEMBERS`].
pub const EXPECTED_DESIGNMAP_ORDER: &str = "\
<p class=\"zimg\">images/a.png</p>
<p class=\"zimg\">images/b.png</p>


<ParagraphStyleRange AppliedParagraphStyle=\"ParagraphStyle/Heading\">
<Content>Welcome</Content>
</ParagraphStyleRange>
<ParagraphStyleRange AppliedParagraphStyle=\"ParagraphStyle/Body\">
<Content>Second story.</Content>
<Content>More text.</Content>
</ParagraphStyleRange>
";

pub fn build_zip(members: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in members {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Write `doc.idml` and its extracted `doc.idml_FILES/` tree into a temp dir.
pub fn write_package(members: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let idml = dir.path().join("doc.idml");
    fs::write(&idml, build_zip(members)).unwrap();

    let files_dir = dir.path().join("doc.idml_FILES");
    for (name, content) in members {
        let path = files_dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    (dir, idml)
}
