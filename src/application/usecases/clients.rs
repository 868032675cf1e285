use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    errors::{DirectoryError, validate_id, validate_name},
    repositories::clients::ClientRepository,
    value_objects::clients::{ClientModel, EditClientModel, InsertClientModel},
};

pub struct ClientUseCase<T>
where
    T: ClientRepository + Send + Sync,
{
    client_repository: Arc<T>,
}

impl<T> ClientUseCase<T>
where
    T: ClientRepository + Send + Sync,
{
    pub fn new(client_repository: Arc<T>) -> Self {
        Self { client_repository }
    }

    pub async fn create(&self, insert_client_model: InsertClientModel) -> Result<i64, DirectoryError> {
        validate_id("photographer_id", insert_client_model.photographer_id)?;
        validate_name(&insert_client_model.name)?;

        let photographer_id = insert_client_model.photographer_id;
        let id = self
            .client_repository
            .create(insert_client_model.to_entity())
            .await
            .inspect_err(|err| {
                error!(photographer_id, db_error = ?err, "clients: failed to create")
            })?
            .ok_or(DirectoryError::NotFound("photographer"))?;

        info!(photographer_id, client_id = id, "clients: created");
        Ok(id)
    }

    pub async fn rename(
        &self,
        client_id: i64,
        edit_client_model: EditClientModel,
    ) -> Result<(), DirectoryError> {
        validate_id("client_id", client_id)?;
        validate_name(&edit_client_model.name)?;

        let updated = self
            .client_repository
            .rename(client_id, edit_client_model.to_entity())
            .await
            .inspect_err(|err| error!(client_id, db_error = ?err, "clients: failed to rename"))?;

        if !updated {
            return Err(DirectoryError::NotFound("client"));
        }
        info!(client_id, "clients: renamed");
        Ok(())
    }

    /// Soft delete: ledger history of the client is kept.
    pub async fn delete(&self, client_id: i64) -> Result<(), DirectoryError> {
        validate_id("client_id", client_id)?;

        let found = self
            .client_repository
            .soft_delete(client_id)
            .await
            .inspect_err(|err| error!(client_id, db_error = ?err, "clients: failed to delete"))?;

        if !found {
            return Err(DirectoryError::NotFound("client"));
        }
        info!(client_id, "clients: deleted");
        Ok(())
    }

    pub async fn list(&self, photographer_id: i64) -> Result<Vec<ClientModel>, DirectoryError> {
        validate_id("photographer_id", photographer_id)?;

        let clients = self
            .client_repository
            .list_active(photographer_id)
            .await
            .inspect_err(|err| {
                error!(photographer_id, db_error = ?err, "clients: failed to list")
            })?;

        Ok(clients.into_iter().map(ClientModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::clients::MockClientRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn unknown_photographer_is_not_found() {
        let mut repository = MockClientRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = ClientUseCase::new(Arc::new(repository));
        let err = usecase
            .create(InsertClientModel {
                photographer_id: 99,
                name: "Bob".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound("photographer")));
    }

    #[tokio::test]
    async fn rename_of_missing_client_is_not_found() {
        let mut repository = MockClientRepository::new();
        repository
            .expect_rename()
            .withf(|id, entity| *id == 5 && entity.name == "Carol")
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let usecase = ClientUseCase::new(Arc::new(repository));
        let err = usecase
            .rename(
                5,
                EditClientModel {
                    name: " Carol ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound("client")));
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let mut repository = MockClientRepository::new();
        repository
            .expect_soft_delete()
            .with(eq(5))
            .times(1)
            .returning(|_| Box::pin(async { Ok(true) }));

        let usecase = ClientUseCase::new(Arc::new(repository));

        assert!(usecase.delete(5).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_ids_never_reach_the_store() {
        let mut repository = MockClientRepository::new();
        repository.expect_list_active().never();
        repository.expect_soft_delete().never();

        let usecase = ClientUseCase::new(Arc::new(repository));

        assert!(matches!(
            usecase.list(0).await,
            Err(DirectoryError::InvalidIdentifier("photographer_id"))
        ));
        assert!(matches!(
            usecase.delete(-1).await,
            Err(DirectoryError::InvalidIdentifier("client_id"))
        ));
    }
}
