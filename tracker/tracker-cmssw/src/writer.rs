//! XML serialization of document trees.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::document::DocNode;

/// Persists one document tree to a path.
///
/// The engine writes only into a staging directory; implementations do not
/// need to be atomic themselves.
pub trait DocumentWriter {
    /// Write `document` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or the file
    /// cannot be written.
    fn write(&self, document: &DocNode, path: &Path) -> io::Result<()>;
}

/// Writes UTF-8 XML with a declaration and space indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlDocumentWriter {
    indent: usize,
}

impl Default for XmlDocumentWriter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl XmlDocumentWriter {
    /// Create a writer indenting nested nodes by `indent` spaces; 0 disables line breaks.
    #[must_use]
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Serialize `document` to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if an event cannot be written.
    pub fn to_xml_string(&self, document: &DocNode) -> io::Result<String> {
        let mut buffer = Vec::new();
        if self.indent == 0 {
            let mut writer = Writer::new(Cursor::new(&mut buffer));
            write_document(&mut writer, document)?;
        } else {
            let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', self.indent);
            write_document(&mut writer, document)?;
        }
        buffer.push(b'\n');

        String::from_utf8(buffer).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid UTF-8 in generated XML: {e}"),
            )
        })
    }
}

impl DocumentWriter for XmlDocumentWriter {
    fn write(&self, document: &DocNode, path: &Path) -> io::Result<()> {
        let xml = self.to_xml_string(document)?;
        let mut file = fs::File::create(path)?;
        file.write_all(xml.as_bytes())?;
        file.sync_all()
    }
}

fn write_document<W: Write>(writer: &mut Writer<W>, document: &DocNode) -> io::Result<()> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| xml_error("declaration", &e))?;
    write_node(writer, document)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &DocNode) -> io::Result<()> {
    let mut start = BytesStart::new(node.name());
    for (name, value) in node.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.children().is_empty() && node.text().is_none() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| xml_error(node.name(), &e));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| xml_error(node.name(), &e))?;
    if let Some(text) = node.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| xml_error(node.name(), &e))?;
    }
    for child in node.children() {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name())))
        .map_err(|e| xml_error(node.name(), &e))
}

fn xml_error(node: &str, err: &impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("failed to write {node} element: {err}"))
}
