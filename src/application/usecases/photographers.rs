use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    errors::{DirectoryError, validate_name},
    repositories::photographers::PhotographerRepository,
    value_objects::photographers::{InsertPhotographerModel, PhotographerModel},
};

pub struct PhotographerUseCase<T>
where
    T: PhotographerRepository + Send + Sync,
{
    photographer_repository: Arc<T>,
}

impl<T> PhotographerUseCase<T>
where
    T: PhotographerRepository + Send + Sync,
{
    pub fn new(photographer_repository: Arc<T>) -> Self {
        Self {
            photographer_repository,
        }
    }

    pub async fn create(
        &self,
        insert_photographer_model: InsertPhotographerModel,
    ) -> Result<i64, DirectoryError> {
        validate_name(&insert_photographer_model.name)?;

        let id = self
            .photographer_repository
            .create(insert_photographer_model.to_entity())
            .await
            .inspect_err(|err| error!(db_error = ?err, "photographers: failed to create"))?;

        info!(photographer_id = id, "photographers: created");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<PhotographerModel>, DirectoryError> {
        let photographers = self
            .photographer_repository
            .list()
            .await
            .inspect_err(|err| error!(db_error = ?err, "photographers: failed to list"))?;

        Ok(photographers.into_iter().map(PhotographerModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::photographers::MockPhotographerRepository;

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let mut repository = MockPhotographerRepository::new();
        repository.expect_create().never();

        let usecase = PhotographerUseCase::new(Arc::new(repository));
        let err = usecase
            .create(InsertPhotographerModel {
                name: "   ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::InvalidName));
    }

    #[tokio::test]
    async fn name_is_trimmed_before_insert() {
        let mut repository = MockPhotographerRepository::new();
        repository
            .expect_create()
            .withf(|entity| entity.name == "Alice")
            .times(1)
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = PhotographerUseCase::new(Arc::new(repository));
        let id = usecase
            .create(InsertPhotographerModel {
                name: "  Alice ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
    }
}
