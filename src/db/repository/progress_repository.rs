use super::{BaseRepository, Repository};
use crate::db::entities::{
    ProgressRecordActiveModel, ProgressRecordModel, ProgressRecords, progress_records,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

/// Repository trait for progress record entities
#[async_trait]
pub trait ProgressRepository: Repository<ProgressRecordModel> {
    /// Find the record for a specific content item and user
    async fn find_by_content_and_user(
        &self,
        content_id: &str,
        user_id: &str,
    ) -> Result<Option<ProgressRecordModel>>;

    /// Find all records for a user
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ProgressRecordModel>>;

    /// Find all completed records for a user
    async fn find_completed(&self, user_id: &str) -> Result<Vec<ProgressRecordModel>>;
}

#[derive(Debug)]
pub struct ProgressRepositoryImpl {
    base: BaseRepository,
}

impl ProgressRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl Repository<ProgressRecordModel> for ProgressRepositoryImpl {
    type Entity = ProgressRecords;

    async fn find_by_id(&self, id: &str) -> Result<Option<ProgressRecordModel>> {
        let id_parsed = id.parse::<i32>().unwrap_or(0);
        Ok(ProgressRecords::find_by_id(id_parsed)
            .one(self.base.db.as_ref())
            .await?)
    }

    async fn find_all(&self) -> Result<Vec<ProgressRecordModel>> {
        Ok(ProgressRecords::find().all(self.base.db.as_ref()).await?)
    }

    async fn insert(&self, entity: ProgressRecordModel) -> Result<ProgressRecordModel> {
        let active_model = ProgressRecordActiveModel {
            id: NotSet, // Let database auto-generate the ID
            content_id: Set(entity.content_id.clone()),
            user_id: Set(entity.user_id.clone()),
            progress_percentage: Set(entity.progress_percentage),
            completed: Set(entity.completed),
            last_viewed_at: Set(entity.last_viewed_at),
            completed_at: Set(entity.completed_at),
        };

        Ok(active_model.insert(self.base.db.as_ref()).await?)
    }

    async fn update(&self, entity: ProgressRecordModel) -> Result<ProgressRecordModel> {
        let mut active_model: ProgressRecordActiveModel = entity.clone().into();
        active_model.progress_percentage = Set(entity.progress_percentage);
        active_model.completed = Set(entity.completed);
        active_model.last_viewed_at = Set(entity.last_viewed_at);
        active_model.completed_at = Set(entity.completed_at);
        Ok(active_model.update(self.base.db.as_ref()).await?)
    }

    async fn count(&self) -> Result<u64> {
        Ok(ProgressRecords::find().count(self.base.db.as_ref()).await?)
    }
}

#[async_trait]
impl ProgressRepository for ProgressRepositoryImpl {
    async fn find_by_content_and_user(
        &self,
        content_id: &str,
        user_id: &str,
    ) -> Result<Option<ProgressRecordModel>> {
        Ok(ProgressRecords::find()
            .filter(progress_records::Column::ContentId.eq(content_id))
            .filter(progress_records::Column::UserId.eq(user_id))
            .one(self.base.db.as_ref())
            .await?)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ProgressRecordModel>> {
        Ok(ProgressRecords::find()
            .filter(progress_records::Column::UserId.eq(user_id))
            .all(self.base.db.as_ref())
            .await?)
    }

    async fn find_completed(&self, user_id: &str) -> Result<Vec<ProgressRecordModel>> {
        Ok(ProgressRecords::find()
            .filter(progress_records::Column::UserId.eq(user_id))
            .filter(progress_records::Column::Completed.eq(true))
            .all(self.base.db.as_ref())
            .await?)
    }
}
