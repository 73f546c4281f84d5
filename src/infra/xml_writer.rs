// ============================================================
// Layer 6 - XML Serializer
// ============================================================
// Output shape:
//
//   <?xml version='1.0' encoding='utf-8'?>
//   <documents><document index="1"><source>a.txt</source><document_content>...</document_content></document></documents>
//
// Details kept stable for downstream parsers:
//   - single-quoted declaration followed by one newline
//   - no indentation, no trailing newline
//   - elements with neither text nor children use the short
//     form with a space (`<documents />`, `<document_content />`)
//   - text escapes `&`, `<` and `>`; attribute values are
//     double-quoted
//
// The whole document is rendered in memory and written with a
// single fs::write, which truncates any previous output. There is
// no temp-file-and-rename step.

use anyhow::{Context, Result};
use quick_xml::{
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::{fs, io::Write, path::PathBuf};

use crate::domain::document::DocumentRecord;
use crate::domain::traits::DocumentSink;

const DECLARATION: &str = "xml version='1.0' encoding='utf-8'";

pub const ROOT_TAG:     &str = "documents";
pub const DOCUMENT_TAG: &str = "document";
pub const SOURCE_TAG:   &str = "source";
pub const CONTENT_TAG:  &str = "document_content";
pub const INDEX_ATTR:   &str = "index";

/// Writes the digest to a fixed output path.
pub struct XmlDocumentWriter {
    path: PathBuf,
}

impl XmlDocumentWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for XmlDocumentWriter {
    fn write_all(&self, records: &[DocumentRecord]) -> Result<()> {
        let bytes = render(records)?;

        fs::write(&self.path, &bytes)
            .with_context(|| format!("Cannot write output to '{}'", self.path.display()))?;

        tracing::debug!(
            "Wrote {} bytes ({} documents) to '{}'",
            bytes.len(),
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Render records to the exact output bytes.
pub fn render(records: &[DocumentRecord]) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::from_start(BytesStart::from_content(
        DECLARATION,
        3,
    ))))?;
    writer.get_mut().write_all(b"\n")?;

    if records.is_empty() {
        writer.write_event(Event::Empty(empty_tag(ROOT_TAG)))?;
        return Ok(writer.into_inner());
    }

    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
    for record in records {
        write_document(&mut writer, record)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    Ok(writer.into_inner())
}

fn write_document<W: Write>(writer: &mut Writer<W>, record: &DocumentRecord) -> Result<()> {
    let index = record.index.to_string();
    let mut start = BytesStart::new(DOCUMENT_TAG);
    start.push_attribute((INDEX_ATTR, index.as_str()));

    writer.write_event(Event::Start(start))?;
    write_text_element(writer, SOURCE_TAG, &record.source)?;
    write_text_element(writer, CONTENT_TAG, &record.content)?;
    writer.write_event(Event::End(BytesEnd::new(DOCUMENT_TAG)))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer.write_event(Event::Empty(empty_tag(tag)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Start tag for a short-form element, written as `<tag />`.
fn empty_tag(tag: &str) -> BytesStart<'static> {
    BytesStart::from_content(format!("{tag} "), tag.len())
}
