use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{ContentItemId, ProgressRecord, ProgressRecordId, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "progress_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content_id: String,
    pub user_id: String,
    pub progress_percentage: i32,
    pub completed: bool,
    pub last_viewed_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Started but not finished.
    pub fn is_in_progress(&self) -> bool {
        !self.completed && self.progress_percentage > 0
    }
}

impl From<Model> for ProgressRecord {
    fn from(model: Model) -> Self {
        ProgressRecord {
            id: Some(ProgressRecordId::new(model.id.to_string())),
            content_id: ContentItemId::new(model.content_id),
            user_id: UserId::new(model.user_id),
            progress_percentage: model.progress_percentage,
            completed: model.completed,
            last_viewed_at: model.last_viewed_at,
            completed_at: model.completed_at,
        }
    }
}
