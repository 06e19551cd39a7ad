use std::collections::HashMap;
use std::fmt;

use crate::models::{ContentItem, ContentItemId, ProgressRecord, ViewRow};

/// Aggregate counts over one user's catalog-wide progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl ProgressSummary {
    /// Fraction of the catalog finished, 0.0 on an empty catalog.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }
}

/// Which progress partition a row list is narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    InProgress,
    NotStarted,
}

impl StatusFilter {
    fn matches(&self, row: &ViewRow) -> bool {
        match self {
            Self::All => true,
            Self::Completed => row.completed,
            Self::InProgress => !row.completed && row.progress_percentage > 0,
            Self::NotStarted => !row.completed && row.progress_percentage == 0,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
        };
        write!(f, "{label}")
    }
}

/// Left-outer-join of the catalog with the user's progress records. Items
/// without a record default to zero progress. Catalog order is preserved.
pub fn to_view_rows(
    items: &[ContentItem],
    records: &HashMap<ContentItemId, ProgressRecord>,
) -> Vec<ViewRow> {
    items
        .iter()
        .map(|item| match records.get(&item.id) {
            Some(record) => ViewRow {
                item: item.clone(),
                progress_percentage: record.progress_percentage,
                completed: record.completed,
                last_viewed_at: Some(record.last_viewed_at),
            },
            None => ViewRow {
                item: item.clone(),
                progress_percentage: 0,
                completed: false,
                last_viewed_at: None,
            },
        })
        .collect()
}

/// Counts of completed / in-progress / not-started rows.
pub fn aggregate(rows: &[ViewRow]) -> ProgressSummary {
    let mut summary = ProgressSummary {
        total: rows.len(),
        ..Default::default()
    };
    for row in rows {
        if row.completed {
            summary.completed += 1;
        } else if row.progress_percentage > 0 {
            summary.in_progress += 1;
        } else {
            summary.not_started += 1;
        }
    }
    summary
}

/// Narrow rows by a case-insensitive substring over title and description,
/// combined with a status partition.
pub fn filter_rows(rows: &[ViewRow], search: &str, status: StatusFilter) -> Vec<ViewRow> {
    let needle = search.trim().to_lowercase();
    rows.iter()
        .filter(|row| status.matches(row))
        .filter(|row| {
            needle.is_empty()
                || row.item.title.to_lowercase().contains(&needle)
                || row.item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
