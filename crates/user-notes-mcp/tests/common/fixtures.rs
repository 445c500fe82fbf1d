//! Shared test fixtures.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use tempfile::TempDir;

use user_notes_mcp::protocol::ProtocolHandler;
use user_notes_mcp::session::SessionManager;

use super::mock_client::MockClient;

/// A session over a notes file inside a temporary directory.
///
/// The directory is removed when the fixture is dropped, so keep it alive
/// for the duration of the test.
pub struct TestSession {
    pub dir: TempDir,
    pub path: PathBuf,
    pub session: Arc<Mutex<SessionManager>>,
}

impl TestSession {
    pub fn handler(&self) -> ProtocolHandler {
        ProtocolHandler::new(self.session.clone())
    }

    pub fn client(&self) -> MockClient {
        MockClient::new(self.handler())
    }
}

/// Create a session over a fresh, empty notes file in a temp directory.
pub fn create_test_session() -> TestSession {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("MY_NOTES.txt");
    session_at(dir, path)
}

/// Create a session whose notes file lives in a directory that does not exist.
pub fn create_unreachable_session() -> TestSession {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("missing").join("MY_NOTES.txt");
    session_at(dir, path)
}

fn session_at(dir: TempDir, path: PathBuf) -> TestSession {
    let manager = SessionManager::open(&path);
    TestSession {
        dir,
        path,
        session: Arc::new(Mutex::new(manager)),
    }
}
