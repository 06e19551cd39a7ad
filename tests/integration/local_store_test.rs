#[cfg(test)]
mod local_store_tests {
    use crate::common::TestContext;
    use chrono::Utc;
    use coursetrack::backends::{LocalProgressStore, ProgressStore};
    use coursetrack::events::EventBus;
    use coursetrack::models::{ContentItemId, NewProgressRecord, ProgressPatch, UserId};
    use coursetrack::tracking::ProgressLedger;
    use std::sync::Arc;

    fn new_record(content_id: &str, pct: i32) -> NewProgressRecord {
        NewProgressRecord {
            content_id: ContentItemId::new(content_id),
            user_id: UserId::new("user-1"),
            progress_percentage: pct,
            completed: pct >= 100,
            last_viewed_at: Utc::now(),
            completed_at: (pct >= 100).then(Utc::now),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_identity_and_lists_by_user() {
        let context = TestContext::new().await;
        let store = LocalProgressStore::new(context.db.clone());

        let created = store.create(new_record("module-1", 20)).await.unwrap();
        assert!(created.id.is_some());

        let records = store.list_by_user(&UserId::new("user-1")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].progress_percentage, 20);

        let other = store.list_by_user(&UserId::new("someone-else")).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_first_completion_stamp() {
        let context = TestContext::new().await;
        let store = LocalProgressStore::new(context.db.clone());

        let created = store.create(new_record("module-1", 100)).await.unwrap();
        let id = created.id.unwrap();
        let first_stamp = created.completed_at.unwrap();

        let patch = ProgressPatch {
            progress_percentage: 100,
            completed: true,
            last_viewed_at: Utc::now(),
            completed_at: Some(Utc::now()),
        };
        let updated = store.update_by_id(&id, patch).await.unwrap();
        assert_eq!(updated.completed_at, Some(first_stamp));
    }

    #[tokio::test]
    async fn test_repository_lookups() {
        use coursetrack::db::repository::{ProgressRepository, ProgressRepositoryImpl};

        let context = TestContext::new().await;
        let store = LocalProgressStore::new(context.db.clone());
        store.create(new_record("module-1", 100)).await.unwrap();
        store.create(new_record("module-2", 30)).await.unwrap();

        let repo = ProgressRepositoryImpl::new(context.db.clone());
        let found = repo
            .find_by_content_and_user("module-2", "user-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.progress_percentage, 30);
        assert!(found.is_in_progress());

        let completed = repo.find_completed("user-1").await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].content_id, "module-1");

        assert!(
            repo.find_by_content_and_user("module-9", "user-1")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_ledger_over_local_store() {
        let context = TestContext::new().await;
        let store = Arc::new(LocalProgressStore::new(context.db.clone()));
        let ledger = ProgressLedger::new(
            store.clone(),
            UserId::new("user-1"),
            Arc::new(EventBus::new()),
        );
        let content = ContentItemId::new("module-1");

        ledger.apply(&content, 20.0, false).await.unwrap();
        ledger.apply(&content, 55.0, false).await.unwrap();
        // Regression without force is discarded.
        assert!(ledger.apply(&content, 10.0, false).await.unwrap().is_none());

        let records = store.list_by_user(&UserId::new("user-1")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].progress_percentage, 55);

        // A fresh ledger sees the persisted state.
        let reloaded = ProgressLedger::new(
            store.clone(),
            UserId::new("user-1"),
            Arc::new(EventBus::new()),
        );
        reloaded.load().await.unwrap();
        assert_eq!(
            reloaded.get(&content).await.unwrap().progress_percentage,
            55
        );
    }
}
