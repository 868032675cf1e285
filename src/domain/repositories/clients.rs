use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::clients::{ClientEntity, EditClientEntity, InsertClientEntity};

#[async_trait]
#[automock]
pub trait ClientRepository {
    /// `None` when the owning photographer does not exist.
    async fn create(&self, insert_client_entity: InsertClientEntity) -> Result<Option<i64>>;
    /// `false` when no live client has this id.
    async fn rename(&self, client_id: i64, edit_client_entity: EditClientEntity) -> Result<bool>;
    /// Marks the client deleted, keeping the first deletion time. `false` when the id is unknown.
    async fn soft_delete(&self, client_id: i64) -> Result<bool>;
    async fn list_active(&self, photographer_id: i64) -> Result<Vec<ClientEntity>>;
}
