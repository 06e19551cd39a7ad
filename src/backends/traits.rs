use anyhow::Result;
use async_trait::async_trait;

use crate::models::{
    ContentItem, NewProgressRecord, ProgressPatch, ProgressRecord, ProgressRecordId, UserId,
};

/// Supplies the set of trackable content items. Catalog authoring and
/// mutation live elsewhere in the portal; this crate only reads.
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    async fn list_content(&self) -> Result<Vec<ContentItem>>;
}

/// Generic CRUD persistence for progress records. The server assigns record
/// identity on create; this crate never deletes records.
#[async_trait]
pub trait ProgressStore: Send + Sync + std::fmt::Debug {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>>;

    async fn create(&self, record: NewProgressRecord) -> Result<ProgressRecord>;

    async fn update_by_id(
        &self,
        id: &ProgressRecordId,
        patch: ProgressPatch,
    ) -> Result<ProgressRecord>;
}
