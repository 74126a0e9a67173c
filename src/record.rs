//! The figure record and the raw-line editing rules.
//!
//! A record is rendered on disk (text format) and on screen as
//! `"{name}: {width}: {height}"`. Sessions keep records as raw lines and only
//! parse them into [`Record`]s when a numeric field is edited or when a
//! typed format (JSON) needs them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Separator between the fields of a raw line.
pub const FIELD_SEPARATOR: char = ':';

/// Separator used when a raw line is re-joined after an edit.
const JOINED_SEPARATOR: &str = ": ";

/// One named rectangular figure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub name: String,
    pub width: i64,
    pub height: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, width: i64, height: i64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.name, self.width, self.height)
    }
}

impl FromStr for Record {
    type Err = FieldError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts = split_fields(line);
        if parts.len() != 3 {
            return Err(FieldError::FieldCount {
                expected: 3,
                found: parts.len(),
            });
        }

        let name = parts[0];
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }

        Ok(Record {
            name: name.to_string(),
            width: parse_integer(Field::Width, parts[1])?,
            height: parse_integer(Field::Height, parts[2])?,
        })
    }
}

/// A numeric field of a raw line, addressed by its position after the name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Width,
    Height,
}

impl Field {
    /// Position of this field in a split raw line.
    pub fn position(self) -> usize {
        match self {
            Field::Width => 1,
            Field::Height => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a raw line could not be read as (or edited like) a record.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected {expected} ':'-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("record name is empty")]
    EmptyName,

    #[error("missing {0} field")]
    Missing(Field),

    #[error("{field} '{raw}' is not an integer")]
    NotAnInteger { field: Field, raw: String },

    #[error("{field} would overflow")]
    Overflow { field: Field },

    #[error("expected 'key: value', found '{0}'")]
    NotKeyValue(String),

    #[error("character {0:?} cannot be stored in XML text")]
    NotXmlText(char),
}

/// Apply `delta` to one numeric field of a raw line.
///
/// Every part is trimmed and the line is re-joined with `": "`, so
/// `"Box:10:20"` comes back as `"Box: 11: 20"` after `+1` on the width.
pub fn adjust_line(line: &str, field: Field, delta: i64) -> Result<String, FieldError> {
    let mut parts: Vec<String> = split_fields(line).into_iter().map(str::to_owned).collect();

    let raw = parts
        .get(field.position())
        .ok_or(FieldError::Missing(field))?;
    let value = parse_integer(field, raw)?;
    let updated = value
        .checked_add(delta)
        .ok_or(FieldError::Overflow { field })?;

    parts[field.position()] = updated.to_string();
    Ok(parts.join(JOINED_SEPARATOR))
}

/// Split a raw line into `(key, value)` at the first separator.
///
/// Both halves are trimmed, so `"Box:5"` and `"Box :  5 "` both split into
/// `("Box", "5")`. Only the key is constrained; the value may itself contain
/// separators.
pub fn split_key_value(line: &str) -> Result<(&str, &str), FieldError> {
    line.split_once(FIELD_SEPARATOR)
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| FieldError::NotKeyValue(line.to_string()))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).map(str::trim).collect()
}

fn parse_integer(field: Field, raw: &str) -> Result<i64, FieldError> {
    raw.parse::<i64>().map_err(|_| FieldError::NotAnInteger {
        field,
        raw: raw.to_string(),
    })
}
