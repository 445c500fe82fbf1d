//! Owns the note store for the lifetime of the server process.

use std::path::{Path, PathBuf};

use user_notes::NoteStore;

use crate::types::McpResult;

/// Server-side owner of the [`NoteStore`].
///
/// Shared as `Arc<Mutex<SessionManager>>`; every handler holds the lock for
/// its single store operation, so appends from concurrent requests never
/// interleave inside one process.
pub struct SessionManager {
    store: NoteStore,
    notes_added: u64,
}

impl SessionManager {
    /// Open a session over the notes file at `path`.
    ///
    /// Counting the existing notes creates the file like any other store
    /// operation. Failures are only logged: an unusable path fails the
    /// requests that touch it, not the server.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path: PathBuf = path.as_ref().to_path_buf();
        let store = NoteStore::new(&path);

        match store.note_count() {
            Ok(existing) => {
                tracing::info!("Opened notes file {} ({existing} notes)", path.display())
            }
            Err(e) => tracing::warn!("Notes file {} is not usable yet: {e}", path.display()),
        }

        Self {
            store,
            notes_added: 0,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Path of the notes file.
    pub fn notes_path(&self) -> &Path {
        self.store.path()
    }

    /// Append a note and count it toward this session.
    pub fn add_note(&mut self, message: &str) -> McpResult<&'static str> {
        let confirmation = self.store.append(message)?;
        self.notes_added += 1;
        tracing::debug!("Note added ({} this session)", self.notes_added);
        Ok(confirmation)
    }

    /// Notes appended through this server since it started.
    pub fn notes_added(&self) -> u64 {
        self.notes_added
    }

    /// Log a summary of the session. The store keeps no open handles, so
    /// there is nothing to flush.
    pub fn close(&self) {
        tracing::info!(
            "Closing notes session for {}: {} notes added",
            self.store.path().display(),
            self.notes_added
        );
    }
}
