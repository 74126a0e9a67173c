//! An editing session: one file, its codec, and the loaded records.
//!
//! The codec is selected once when the session opens and reused for saving,
//! so a file is always written back in the format it was read from.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codec::{self, Codec};
use crate::error::FigeditError;
use crate::record::{Field, FieldError};
use crate::store::RecordStore;

/// Which way an edit moves a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Signed delta for a step of `step`, or `None` if it cannot be negated.
    pub fn delta(self, step: i64) -> Option<i64> {
        match self {
            Direction::Increase => Some(step),
            Direction::Decrease => step.checked_neg(),
        }
    }
}

pub struct Session {
    path: PathBuf,
    codec: &'static dyn Codec,
    store: RecordStore,
}

impl Session {
    /// Load `path` with the codec picked from its extension.
    ///
    /// # Errors
    /// Fails when the file does not exist, its extension is not supported,
    /// it cannot be read, or its contents do not decode. No session is
    /// produced from a partially decoded file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FigeditError> {
        let path = path.into();
        if !path.is_file() {
            return Err(FigeditError::FileNotFound { path });
        }

        let codec = codec::select(&path)?;
        let bytes = fs::read(&path)?;
        let lines = codec.decode(&bytes)?;
        log::debug!(
            "loaded {} record(s) from {} as {}",
            lines.len(),
            path.display(),
            codec.format()
        );

        Ok(Self::from_parts(path, codec, lines))
    }

    pub fn from_parts(
        path: impl Into<PathBuf>,
        codec: &'static dyn Codec,
        lines: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            codec,
            store: RecordStore::new(lines),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &'static dyn Codec {
        self.codec
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Step one field of the record numbered `choice` (1-based).
    pub fn adjust(
        &mut self,
        choice: usize,
        field: Field,
        direction: Direction,
        step: i64,
    ) -> Result<&str, FigeditError> {
        let index = choice
            .checked_sub(1)
            .ok_or(FigeditError::IndexOutOfRange {
                index: choice,
                len: self.store.len(),
            })?;
        let delta = direction
            .delta(step)
            .ok_or(FigeditError::FieldParse {
                line: choice,
                source: FieldError::Overflow { field },
            })?;
        self.store.adjust(index, field, delta)
    }

    /// Write the records back to the session's own file.
    pub fn save(&self) -> Result<(), FigeditError> {
        write_encoded(&self.path, self.codec, self.store.lines())
    }

    /// Write the records to another file, in the format its extension names.
    ///
    /// Schemas differ between formats: `key: value` lines loaded from XML do
    /// not have the three fields JSON requires, and fail here rather than
    /// being converted.
    pub fn save_as(&self, path: &Path) -> Result<(), FigeditError> {
        let codec = codec::select(path)?;
        write_encoded(path, codec, self.store.lines())
    }

    /// Numbered listing, one `"{n}. {line}"` per record.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.store.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, line));
        }
        out
    }
}

/// Encode into a fresh buffer, then replace `path` only once encoding worked.
///
/// The bytes go to an anonymous temp file in the target's directory which is
/// then renamed over `path`; on any failure the temp file is removed.
fn write_encoded(
    path: &Path,
    codec: &dyn Codec,
    lines: &[String],
) -> Result<(), FigeditError> {
    let bytes = codec.encode(lines)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }
    tmp.persist(path).map_err(|err| FigeditError::Io(err.error))?;

    log::debug!(
        "saved {} record(s) to {} as {}",
        lines.len(),
        path.display(),
        codec.format()
    );
    Ok(())
}
