//! File formats for figure lists.
//!
//! Every format converts between raw file bytes and the session's sequence of
//! raw lines. Codecs are stateless: each `decode`/`encode` is a pure function
//! of its input, and a failed call never yields a partial sequence.
//!
//! | Format | Extension | On-disk shape                                   |
//! |--------|-----------|-------------------------------------------------|
//! | Text   | `.txt`    | one raw line per physical line                  |
//! | JSON   | `.json`   | array of `{"Name", "Width", "Height"}` objects |
//! | XML    | `.xml`    | `<root>` with one `<key>value</key>` per line   |

pub mod io_json;
pub mod io_text;
pub mod io_xml;

use std::fmt;
use std::path::Path;

use crate::error::FigeditError;

pub use io_json::JsonCodec;
pub use io_text::TextCodec;
pub use io_xml::XmlCodec;

/// A decode/encode pair bound to one on-disk format.
pub trait Codec: Send + Sync {
    /// The format this codec reads and writes.
    fn format(&self) -> Format;

    /// Decode a whole file into raw lines.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, FigeditError>;

    /// Encode raw lines into a fresh buffer.
    fn encode(&self, lines: &[String]) -> Result<Vec<u8>, FigeditError>;
}

/// The supported file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Json,
    Xml,
}

impl Format {
    /// Dispatch order when matching a path against known extensions.
    pub const ALL: [Format; 3] = [Format::Text, Format::Json, Format::Xml];

    /// Human-readable name for the format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// File name suffix, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Text => ".txt",
            Format::Json => ".json",
            Format::Xml => ".xml",
        }
    }

    /// Pick a format from a path's suffix (case-sensitive).
    pub fn from_path(path: &Path) -> Option<Format> {
        let path = path.to_string_lossy();
        Format::ALL
            .into_iter()
            .find(|format| path.ends_with(format.extension()))
    }

    /// The shared codec instance for this format.
    pub fn codec(&self) -> &'static dyn Codec {
        match self {
            Format::Text => &TextCodec,
            Format::Json => &JsonCodec,
            Format::Xml => &XmlCodec,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the codec for `path` by its extension.
///
/// # Errors
/// Returns [`FigeditError::UnsupportedFormat`] when the path ends in none of
/// `.txt`, `.json` or `.xml`.
pub fn select(path: &Path) -> Result<&'static dyn Codec, FigeditError> {
    let format = Format::from_path(path).ok_or_else(|| {
        FigeditError::UnsupportedFormat(format!(
            "'{}' (supported: .txt, .json, .xml)",
            path.display()
        ))
    })?;
    log::debug!("selected {} codec for {}", format, path.display());
    Ok(format.codec())
}
