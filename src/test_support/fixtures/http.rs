// Shared route-test wiring: in-memory state with a console mailer and a
// throwaway media directory.

use crate::shared::infrastructure::mailer::console::ConsoleMailer;
use crate::shared::infrastructure::media_store::fs::FsMediaStore;
use crate::shell::state::AppState;
use std::sync::Arc;
use uuid::Uuid;

pub fn make_test_state() -> AppState {
    let media_dir = std::env::temp_dir().join(format!("chakai-test-media-{}", Uuid::now_v7()));
    AppState::in_memory(
        Arc::new(ConsoleMailer::new()),
        Arc::new(FsMediaStore::new(media_dir, "http://localhost:8080/media")),
    )
}
