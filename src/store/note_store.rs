//! Append-only, newline-delimited note file.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::templates::summary_request;
use crate::types::{NotesResult, NOTE_SAVED, NO_NOTES_FOUND, NO_NOTE_FOUND};

/// A single plain-text file holding one note per line, oldest first.
///
/// Every public operation first makes sure the file exists, then performs at
/// most one read or one append. The handle is dropped before returning, on
/// success and on error alike. There is no locking: callers that share a
/// store across tasks must serialize access themselves.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Create a store backed by `path`. Nothing touches the disk until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty backing file if none exists. Existing content is never
    /// touched.
    pub fn ensure_exists(&self) -> NotesResult<()> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                log::info!("Created notes file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append `message` as a new line and return the confirmation text.
    ///
    /// The message is written as-is followed by `\n`, in a single write.
    pub fn append(&self, message: &str) -> NotesResult<&'static str> {
        self.ensure_exists()?;

        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        log::debug!(
            "Appended {} bytes to {}",
            line.len(),
            self.path.display()
        );
        Ok(NOTE_SAVED)
    }

    /// All notes, with surrounding whitespace trimmed from the whole text.
    pub fn read_all(&self) -> NotesResult<String> {
        let content = self.read_trimmed()?;
        if content.is_empty() {
            return Ok(NO_NOTE_FOUND.to_string());
        }
        Ok(content)
    }

    /// The last line of the file, exactly as stored (trailing newline
    /// included).
    ///
    /// Unlike [`read_all`](Self::read_all), no trimming happens here.
    pub fn read_latest(&self) -> NotesResult<String> {
        let content = self.read_raw()?;
        Ok(last_line(&content)
            .map(str::to_string)
            .unwrap_or_else(|| NO_NOTES_FOUND.to_string()))
    }

    /// A summarization request wrapping the trimmed notes.
    pub fn summarize(&self) -> NotesResult<String> {
        let content = self.read_trimmed()?;
        if content.is_empty() {
            return Ok(NO_NOTE_FOUND.to_string());
        }
        Ok(summary_request(&content))
    }

    /// Number of lines currently in the file.
    pub fn note_count(&self) -> NotesResult<usize> {
        let content = self.read_raw()?;
        Ok(content.split_inclusive('\n').count())
    }

    fn read_trimmed(&self) -> NotesResult<String> {
        Ok(self.read_raw()?.trim().to_string())
    }

    fn read_raw(&self) -> NotesResult<String> {
        self.ensure_exists()?;
        let content = std::io::read_to_string(File::open(&self.path)?)?;
        log::debug!("Read {} bytes from {}", content.len(), self.path.display());
        Ok(content)
    }
}

/// Last line of `content`, keeping its terminator. `None` for empty input.
fn last_line(content: &str) -> Option<&str> {
    content.split_inclusive('\n').next_back()
}
