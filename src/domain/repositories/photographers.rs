use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::photographers::{InsertPhotographerEntity, PhotographerEntity};

#[async_trait]
#[automock]
pub trait PhotographerRepository {
    async fn create(&self, insert_photographer_entity: InsertPhotographerEntity) -> Result<i64>;
    async fn list(&self) -> Result<Vec<PhotographerEntity>>;
}
