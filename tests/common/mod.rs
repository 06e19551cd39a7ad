pub mod builders;

use coursetrack::db::{Database, DatabaseConnection};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestContext {
    pub db: DatabaseConnection,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let database = Database::connect(&db_path)
            .await
            .expect("Failed to connect to test database");
        database
            .migrate()
            .await
            .expect("Failed to run migrations");

        Self {
            db: database.get_connection(),
            _temp_dir: temp_dir,
        }
    }
}

pub use builders::content_item;
pub use mocks::{InMemoryProgressStore, ScriptedPlayer};

use coursetrack::events::EventBus;
use coursetrack::models::UserId;
use coursetrack::tracking::ProgressLedger;
use coursetrack::{PlaybackSession, TrackingConfig};

pub fn session_with_store() -> (
    Arc<InMemoryProgressStore>,
    Arc<ProgressLedger>,
    PlaybackSession,
) {
    let store = Arc::new(InMemoryProgressStore::new());
    let event_bus = Arc::new(EventBus::new());
    let ledger = Arc::new(ProgressLedger::new(
        store.clone(),
        UserId::new("user-1"),
        event_bus.clone(),
    ));
    let session = PlaybackSession::new(ledger.clone(), event_bus, TrackingConfig::default());
    (store, ledger, session)
}
