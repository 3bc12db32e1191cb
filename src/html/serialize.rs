use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::CotizaError;
use super::node::Node;

fn write_err(e: std::io::Error) -> CotizaError {
    CotizaError::Markup(format!("write error: {e}"))
}

/// Serialize a tree to a markup string with a `<!DOCTYPE html>` prefix.
///
/// Attributes keep their insertion order and are quoted; text content is
/// escaped (`&`, `<`, `>`); childless elements are emitted self-closing, which
/// the PDF renderer's XHTML parser requires for voids like `img` and `br`.
/// [`Node::Raw`] content is written through untouched.
pub fn to_html(root: &Node) -> Result<String, CotizaError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::DocType(BytesText::from_escaped("html")))
        .map_err(write_err)?;
    write_node(&mut writer, root)?;
    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).map_err(|e| CotizaError::Markup(format!("UTF-8 error: {e}")))
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &Node) -> Result<(), CotizaError> {
    match node {
        Node::Element(elem) => {
            let mut start = BytesStart::new(elem.tag.as_str());
            for (name, value) in &elem.attrs {
                start.push_attribute((name.as_str(), value.as_str()));
            }
            if elem.children.is_empty() {
                writer.write_event(Event::Empty(start)).map_err(write_err)?;
            } else {
                writer.write_event(Event::Start(start)).map_err(write_err)?;
                for child in &elem.children {
                    write_node(writer, child)?;
                }
                writer
                    .write_event(Event::End(BytesEnd::new(elem.tag.as_str())))
                    .map_err(write_err)?;
            }
        }
        Node::Text(s) => {
            writer
                .write_event(Event::Text(BytesText::new(s)))
                .map_err(write_err)?;
        }
        Node::Raw(s) => {
            writer
                .write_event(Event::Text(BytesText::from_escaped(s.as_str())))
                .map_err(write_err)?;
        }
    }
    Ok(())
}
