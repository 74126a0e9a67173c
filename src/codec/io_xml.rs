//! XML element-list format.
//!
//! The document has a single root element whose element children each hold
//! one `key: value` raw line: the child's tag name is the key and its text
//! content is the value. Any root tag name is accepted on input; output
//! always uses `<root>`.
//!
//! Lines are written in canonical form: key and value are trimmed, so
//! `"Box:5"` is read back as `"Box: 5"`. Decoded lines are always canonical.
//!
//! Keys must be legal element names and values must be legal XML text. A line
//! that breaks either rule is rejected at encode time rather than written as
//! a document that cannot be read back.

use std::fmt::Write as _;

use roxmltree::Node;

use super::{Codec, Format};
use crate::error::FigeditError;
use crate::record::{split_key_value, FieldError};

/// Tag name of the synthetic root element written on output.
pub const ROOT_TAG: &str = "root";

#[derive(Clone, Copy, Debug, Default)]
pub struct XmlCodec;

impl Codec for XmlCodec {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, FigeditError> {
        let xml = std::str::from_utf8(bytes).map_err(|source| {
            FigeditError::parse("xml", format!("input is not valid UTF-8: {source}"))
        })?;
        from_xml_str(xml)
    }

    fn encode(&self, lines: &[String]) -> Result<Vec<u8>, FigeditError> {
        Ok(to_xml_string(lines)?.into_bytes())
    }
}

/// Parse an XML document into `key: value` raw lines.
pub fn from_xml_str(xml: &str) -> Result<Vec<String>, FigeditError> {
    let document = roxmltree::Document::parse(xml)
        .map_err(|source| FigeditError::parse("xml", source.to_string()))?;

    let root = document.root_element();
    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for child in root.children() {
        if child.is_element() {
            lines.push(format!("{}: {}", child.tag_name().name(), inner_text(child)));
        } else if !is_blank_text(child) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::warn!(
            "xml: skipped {} non-element node(s) under <{}>",
            skipped,
            root.tag_name().name()
        );
    }

    Ok(lines)
}

/// Render raw lines as an XML document under `<root>`.
///
/// # Errors
/// - [`FigeditError::FieldParse`] when a line has no `:` separator or its value
///   holds a character XML text cannot carry.
/// - [`FigeditError::InvalidFieldName`] when a key is not a legal element name.
pub fn to_xml_string(lines: &[String]) -> Result<String, FigeditError> {
    let mut xml = String::new();

    writeln!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>").expect("write to string");
    writeln!(xml, "<{ROOT_TAG}>").expect("write to string");

    for (idx, line) in lines.iter().enumerate() {
        let (key, value) = split_key_value(line).map_err(|source| FigeditError::FieldParse {
            line: idx + 1,
            source,
        })?;

        if !is_valid_element_name(key) {
            return Err(FigeditError::InvalidFieldName {
                line: idx + 1,
                name: key.to_string(),
            });
        }

        if let Some(bad) = value.chars().find(|&c| !is_xml_text_char(c)) {
            return Err(FigeditError::FieldParse {
                line: idx + 1,
                source: FieldError::NotXmlText(bad),
            });
        }

        writeln!(xml, "  <{0}>{1}</{0}>", key, xml_escape(value)).expect("write to string");
    }

    writeln!(xml, "</{ROOT_TAG}>").expect("write to string");
    Ok(xml)
}

/// Whether `name` can be written as an element name.
///
/// Accepts an ASCII letter or `_` followed by ASCII letters, digits, `_`, `-`
/// or `.`.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// XML 1.0 `Char`, minus `\r` which parsers fold into `\n`.
fn is_xml_text_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Fuzz-only entrypoint: every document `encode` accepts must decode to the
/// same lines it was built from.
#[cfg(feature = "fuzzing")]
pub fn fuzz_encode_roundtrip(input: &str) -> Result<(), FigeditError> {
    let lines = super::io_text::from_text_str(input);
    let xml = to_xml_string(&lines)?;
    let decoded = from_xml_str(&xml)?;
    let canonical = lines
        .iter()
        .map(|line| split_key_value(line).map(|(key, value)| format!("{key}: {value}")))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| FigeditError::FieldParse { line: 0, source })?;
    assert_eq!(decoded, canonical, "xml encode/decode disagree");
    Ok(())
}

/// Concatenated descendant text, trimmed.
fn inner_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect();
    text.trim().to_string()
}

fn is_blank_text(node: Node<'_, '_>) -> bool {
    node.is_text() && node.text().is_none_or(|text| text.trim().is_empty())
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
