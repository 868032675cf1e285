use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{Connection, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::clients::{ClientEntity, EditClientEntity, InsertClientEntity},
        repositories::clients::ClientRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{clients, photographers},
    },
};

pub struct ClientPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ClientPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ClientRepository for ClientPostgres {
    async fn create(&self, insert_client_entity: InsertClientEntity) -> Result<Option<i64>> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<Option<i64>> {
            let mut conn = db_pool.get()?;

            let result = conn.transaction::<Option<i64>, diesel::result::Error, _>(|tx| {
                let photographer = photographers::table
                    .find(insert_client_entity.photographer_id)
                    .select(photographers::id)
                    .for_share()
                    .first::<i64>(tx)
                    .optional()?;
                if photographer.is_none() {
                    return Ok(None);
                }

                let client_id = insert_into(clients::table)
                    .values(&insert_client_entity)
                    .returning(clients::id)
                    .get_result::<i64>(tx)?;

                Ok(Some(client_id))
            })?;

            Ok(result)
        })
        .await?
    }

    async fn rename(&self, client_id: i64, edit_client_entity: EditClientEntity) -> Result<bool> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<bool> {
            let mut conn = db_pool.get()?;

            let updated = update(clients::table)
                .filter(clients::id.eq(client_id))
                .filter(clients::deleted_at.is_null())
                .set(&edit_client_entity)
                .execute(&mut conn)?;

            Ok(updated > 0)
        })
        .await?
    }

    async fn soft_delete(&self, client_id: i64) -> Result<bool> {
        let db_pool = Arc::clone(&self.db_pool);
        let now = Utc::now();

        task::spawn_blocking(move || -> Result<bool> {
            let mut conn = db_pool.get()?;

            let found = conn.transaction::<bool, diesel::result::Error, _>(|tx| {
                let deleted = update(clients::table)
                    .filter(clients::id.eq(client_id))
                    .filter(clients::deleted_at.is_null())
                    .set((clients::deleted_at.eq(Some(now)), clients::updated_at.eq(now)))
                    .execute(tx)?;
                if deleted > 0 {
                    return Ok(true);
                }

                // Already deleted clients keep their original deletion time.
                let exists = clients::table
                    .find(client_id)
                    .select(clients::id)
                    .first::<i64>(tx)
                    .optional()?;
                Ok(exists.is_some())
            })?;

            Ok(found)
        })
        .await?
    }

    async fn list_active(&self, photographer_id: i64) -> Result<Vec<ClientEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<Vec<ClientEntity>> {
            let mut conn = db_pool.get()?;

            let results = clients::table
                .filter(clients::photographer_id.eq(photographer_id))
                .filter(clients::deleted_at.is_null())
                .select(ClientEntity::as_select())
                .order(clients::id.asc())
                .load::<ClientEntity>(&mut conn)?;

            Ok(results)
        })
        .await?
    }
}
