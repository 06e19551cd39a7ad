use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use super::traits::ProgressStore;
use crate::db::DatabaseConnection;
use crate::db::entities::ProgressRecordModel;
use crate::db::repository::{ProgressRepository, ProgressRepositoryImpl, Repository};
use crate::models::{NewProgressRecord, ProgressPatch, ProgressRecord, ProgressRecordId, UserId};

/// Progress store backed by the local sqlite database. Used when the
/// portal shell runs against its offline cache instead of the REST API.
#[derive(Debug)]
pub struct LocalProgressStore {
    repo: ProgressRepositoryImpl,
}

impl LocalProgressStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: ProgressRepositoryImpl::new(db),
        }
    }
}

#[async_trait]
impl ProgressStore for LocalProgressStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>> {
        let models = self.repo.find_by_user(user_id.as_str()).await?;
        Ok(models.into_iter().map(ProgressRecord::from).collect())
    }

    async fn create(&self, record: NewProgressRecord) -> Result<ProgressRecord> {
        let model = ProgressRecordModel {
            id: 0, // Will be set by database
            content_id: record.content_id.to_string(),
            user_id: record.user_id.to_string(),
            progress_percentage: record.progress_percentage,
            completed: record.completed,
            last_viewed_at: record.last_viewed_at,
            completed_at: record.completed_at,
        };

        let inserted = self.repo.insert(model).await?;
        debug!(
            "Created progress record {} for content {}",
            inserted.id, inserted.content_id
        );
        Ok(inserted.into())
    }

    async fn update_by_id(
        &self,
        id: &ProgressRecordId,
        patch: ProgressPatch,
    ) -> Result<ProgressRecord> {
        let mut model = self
            .repo
            .find_by_id(id.as_str())
            .await?
            .ok_or_else(|| anyhow!("Progress record {} not found", id))?;

        model.progress_percentage = patch.progress_percentage;
        model.completed = patch.completed;
        model.last_viewed_at = patch.last_viewed_at;
        // completed_at is written once and never cleared
        if model.completed_at.is_none() {
            model.completed_at = patch.completed_at;
        }

        let updated = self.repo.update(model).await?;
        Ok(updated.into())
    }
}
