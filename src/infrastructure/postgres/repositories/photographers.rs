use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::photographers::{InsertPhotographerEntity, PhotographerEntity},
        repositories::photographers::PhotographerRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::photographers},
};

pub struct PhotographerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PhotographerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PhotographerRepository for PhotographerPostgres {
    async fn create(&self, insert_photographer_entity: InsertPhotographerEntity) -> Result<i64> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<i64> {
            let mut conn = db_pool.get()?;

            let id = insert_into(photographers::table)
                .values(&insert_photographer_entity)
                .returning(photographers::id)
                .get_result::<i64>(&mut conn)?;

            Ok(id)
        })
        .await?
    }

    async fn list(&self) -> Result<Vec<PhotographerEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<Vec<PhotographerEntity>> {
            let mut conn = db_pool.get()?;

            let results = photographers::table
                .select(PhotographerEntity::as_select())
                .order(photographers::id.asc())
                .load::<PhotographerEntity>(&mut conn)?;

            Ok(results)
        })
        .await?
    }
}
