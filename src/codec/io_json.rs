//! JSON array format.
//!
//! The file is an array of objects with keys `Name`, `Width` and `Height`
//! (string, integer, integer). Output is pretty-printed so that saved files
//! diff cleanly.
//!
//! JSON is the only typed format: raw lines must parse as
//! [`Record`](crate::record::Record)s to be saved here. A sequence loaded from
//! XML (`key: value` lines) therefore cannot be saved as JSON as-is.
//!
//! Names are trimmed on read, matching how raw lines are split, so a decoded
//! sequence re-encodes to the same records.

use serde::{Deserialize, Serialize};

use super::{Codec, Format};
use crate::error::FigeditError;
use crate::record::{Record, FIELD_SEPARATOR};

/// A single element of the JSON array.
#[derive(Debug, Serialize, Deserialize)]
struct FigureRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Width")]
    width: i64,
    #[serde(rename = "Height")]
    height: i64,
}

impl From<&Record> for FigureRow {
    fn from(record: &Record) -> Self {
        FigureRow {
            name: record.name.clone(),
            width: record.width,
            height: record.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, FigeditError> {
        let records = records_from_json_slice(bytes)?;
        Ok(records.iter().map(ToString::to_string).collect())
    }

    fn encode(&self, lines: &[String]) -> Result<Vec<u8>, FigeditError> {
        let records = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                line.parse::<Record>()
                    .map_err(|source| FigeditError::FieldParse {
                        line: idx + 1,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records_to_json_string(&records)?.into_bytes())
    }
}

/// Reads records from a JSON string.
///
/// Useful for testing without file I/O.
pub fn records_from_json_str(json: &str) -> Result<Vec<Record>, FigeditError> {
    records_from_json_slice(json.as_bytes())
}

/// Reads records from JSON bytes.
pub fn records_from_json_slice(bytes: &[u8]) -> Result<Vec<Record>, FigeditError> {
    let rows: Vec<FigureRow> = serde_json::from_slice(bytes)
        .map_err(|source| FigeditError::parse("json", source.to_string()))?;

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(FigeditError::parse(
                    "json",
                    format!("element {idx}: Name is empty"),
                ));
            }
            if name.contains(FIELD_SEPARATOR) {
                return Err(FigeditError::parse(
                    "json",
                    format!("element {idx}: Name '{name}' contains '{FIELD_SEPARATOR}'"),
                ));
            }
            Ok(Record::new(name, row.width, row.height))
        })
        .collect()
}

/// Writes records as a pretty-printed JSON array.
///
/// Useful for testing without file I/O.
pub fn records_to_json_string(records: &[Record]) -> Result<String, FigeditError> {
    let rows: Vec<FigureRow> = records.iter().map(FigureRow::from).collect();
    serde_json::to_string_pretty(&rows).map_err(|source| {
        FigeditError::parse("json", format!("failed to serialize records: {source}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldError;

    #[test]
    fn decode_preserves_array_order() {
        let json = r#"[
            {"Name": "Box", "Width": 10, "Height": 20},
            {"Name": "Can", "Width": -3, "Height": 0}
        ]"#;
        let lines = JsonCodec.decode(json.as_bytes()).unwrap();
        assert_eq!(lines, vec!["Box: 10: 20", "Can: -3: 0"]);
    }

    #[test]
    fn empty_array_is_an_empty_sequence() {
        assert!(JsonCodec.decode(b"[]").unwrap().is_empty());
        assert_eq!(JsonCodec.encode(&[]).unwrap(), b"[]");
    }

    #[test]
    fn decode_rejects_non_integer_width() {
        let err = JsonCodec
            .decode(br#"[{"Name":"Box","Width":"ten","Height":5}]"#)
            .unwrap_err();
        assert!(matches!(err, FigeditError::Parse { format: "json", .. }));
    }

    #[test]
    fn decode_rejects_fractional_height() {
        assert!(JsonCodec
            .decode(br#"[{"Name":"Box","Width":1,"Height":5.5}]"#)
            .is_err());
    }

    #[test]
    fn decode_rejects_missing_key_and_non_array() {
        assert!(JsonCodec.decode(br#"[{"Name":"Box","Width":1}]"#).is_err());
        assert!(JsonCodec
            .decode(br#"{"Name":"Box","Width":1,"Height":2}"#)
            .is_err());
        assert!(JsonCodec.decode(b"").is_err());
    }

    #[test]
    fn decode_rejects_names_with_separator() {
        let err = JsonCodec
            .decode(br#"[{"Name":"a:b","Width":1,"Height":2}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("contains ':'"));
    }

    #[test]
    fn decode_trims_names_so_reencoding_is_stable() {
        let json = br#"[{"Name":" Box ","Width":1,"Height":2},{"Name":"\tCan","Width":3,"Height":4}]"#;
        let decoded = JsonCodec.decode(json).unwrap();
        assert_eq!(decoded, vec!["Box: 1: 2", "Can: 3: 4"]);

        let again = JsonCodec.decode(&JsonCodec.encode(&decoded).unwrap()).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn decode_rejects_blank_names() {
        assert!(JsonCodec
            .decode(br#"[{"Name":"   ","Width":1,"Height":2}]"#)
            .is_err());
    }

    #[test]
    fn encode_writes_keys_in_order_and_indents() {
        let lines = vec!["Box: 10: 20".to_string()];
        let json = String::from_utf8(JsonCodec.encode(&lines).unwrap()).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"Name\": \"Box\",\n    \"Width\": 10,\n    \"Height\": 20\n  }\n]"
        );
    }

    #[test]
    fn encode_reports_the_offending_line() {
        let lines = vec!["Box: 10: 20".to_string(), "Can: x: 7".to_string()];
        match JsonCodec.encode(&lines) {
            Err(FigeditError::FieldParse { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, FieldError::NotAnInteger { .. }));
            }
            other => panic!("expected FieldParse, got {other:?}"),
        }
    }
}
