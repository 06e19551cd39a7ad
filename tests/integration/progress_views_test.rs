#[cfg(test)]
mod progress_views_tests {
    use crate::common::{content_item, session_with_store};
    use coursetrack::models::ContentItemId;
    use coursetrack::tracking::{StatusFilter, aggregate, filter_rows, to_view_rows};

    #[tokio::test]
    async fn test_screen_load_with_no_records() {
        let (_store, ledger, _session) = session_with_store();
        ledger.load().await.unwrap();

        let items = vec![
            content_item("a", "Financial Literacy"),
            content_item("b", "Budgeting Basics"),
            content_item("c", "Hygiene"),
        ];

        let rows = to_view_rows(&items, &ledger.snapshot().await);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.progress_percentage == 0 && !r.completed));

        // Recomputing from the same inputs changes nothing.
        let again = to_view_rows(&items, &ledger.snapshot().await);
        assert!(again.iter().all(|r| r.progress_percentage == 0 && !r.completed));

        let summary = aggregate(&rows);
        assert_eq!(summary.not_started, 3);
        assert_eq!(summary.completion_ratio(), 0.0);
    }

    #[tokio::test]
    async fn test_rows_reflect_writes_as_they_land() {
        let (_store, ledger, _session) = session_with_store();
        let items = vec![content_item("a", "Module A"), content_item("b", "Module B")];

        ledger
            .apply(&ContentItemId::new("a"), 60.0, false)
            .await
            .unwrap();

        let rows = to_view_rows(&items, &ledger.snapshot().await);
        assert_eq!(rows[0].progress_percentage, 60);
        assert_eq!(rows[1].progress_percentage, 0);

        let summary = aggregate(&rows);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.not_started, 1);
        assert_eq!(summary.completion_ratio(), 0.0);
    }

    #[tokio::test]
    async fn test_search_and_status_combine() {
        let (_store, ledger, _session) = session_with_store();
        let items = vec![
            content_item("a", "Financial Literacy"),
            content_item("b", "Financial Planning"),
            content_item("c", "Hygiene"),
        ];

        ledger
            .apply(&ContentItemId::new("a"), 100.0, false)
            .await
            .unwrap();
        ledger
            .apply(&ContentItemId::new("b"), 30.0, false)
            .await
            .unwrap();

        let rows = to_view_rows(&items, &ledger.snapshot().await);

        let financial = filter_rows(&rows, "financial", StatusFilter::All);
        assert_eq!(financial.len(), 2);

        let in_progress = filter_rows(&rows, "financial", StatusFilter::InProgress);
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].item.id.as_str(), "b");

        let completed = filter_rows(&rows, "", StatusFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].item.id.as_str(), "a");
    }
}
