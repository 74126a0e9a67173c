//! Line-delimited text format.
//!
//! Each physical line is one raw line, kept verbatim. Both `\n` and `\r\n`
//! line endings are accepted on input; output always uses `\n` and ends with
//! a newline after the last record.

use super::{Codec, Format};
use crate::error::FigeditError;

#[derive(Clone, Copy, Debug, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, FigeditError> {
        let text = std::str::from_utf8(bytes).map_err(|source| {
            FigeditError::parse("text", format!("input is not valid UTF-8: {source}"))
        })?;
        Ok(from_text_str(text))
    }

    fn encode(&self, lines: &[String]) -> Result<Vec<u8>, FigeditError> {
        Ok(to_text_string(lines).into_bytes())
    }
}

/// Split text into raw lines.
pub fn from_text_str(text: &str) -> Vec<String> {
    text.lines().map(ToOwned::to_owned).collect()
}

/// Join raw lines, one per output line.
pub fn to_text_string(lines: &[String]) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
