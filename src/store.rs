//! In-memory record sequence for one editing session.

use crate::error::FigeditError;
use crate::record::{adjust_line, Field};

/// Ordered raw lines backing a session.
///
/// Position is the only handle on a record, so order is preserved exactly and
/// duplicates are kept. Indexes are 0-based here; errors report the 1-based
/// record number a user would type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    lines: Vec<String>,
}

impl RecordStore {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// All raw lines in order, ready for a codec.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the raw line at `index`.
    pub fn set(&mut self, index: usize, line: impl Into<String>) -> Result<(), FigeditError> {
        let len = self.len();
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(FigeditError::IndexOutOfRange {
                index: index + 1,
                len,
            })?;
        *slot = line.into();
        Ok(())
    }

    /// Add `delta` to one numeric field of the line at `index`.
    ///
    /// On error the line is left untouched. Returns the updated line.
    pub fn adjust(&mut self, index: usize, field: Field, delta: i64) -> Result<&str, FigeditError> {
        let current = self.get(index).ok_or(FigeditError::IndexOutOfRange {
            index: index + 1,
            len: self.len(),
        })?;
        let updated = adjust_line(current, field, delta).map_err(|source| {
            FigeditError::FieldParse {
                line: index + 1,
                source,
            }
        })?;
        self.lines[index] = updated;
        Ok(&self.lines[index])
    }
}

impl From<Vec<String>> for RecordStore {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}
