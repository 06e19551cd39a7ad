pub mod progress_repository;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

/// Base repository trait that all repositories should implement.
/// Deliberately has no delete: progress records are never removed here.
#[async_trait]
pub trait Repository<T> {
    type Entity: EntityTrait;

    /// Find an entity by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Insert a new entity
    async fn insert(&self, entity: T) -> Result<T>;

    /// Update an existing entity
    async fn update(&self, entity: T) -> Result<T>;

    /// Count all entities
    async fn count(&self) -> Result<u64>;
}

/// Base repository implementation holder
#[derive(Debug)]
pub struct BaseRepository {
    pub db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub use progress_repository::{ProgressRepository, ProgressRepositoryImpl};
