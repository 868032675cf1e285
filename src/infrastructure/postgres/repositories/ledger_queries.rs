use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, dsl::sql, prelude::*, sql_types::BigInt};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::{debts::DebtorEntity, payments::PaymentEntity},
        repositories::ledger_queries::LedgerQueryRepository,
        value_objects::ledger::LedgerPair,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{clients, debts, payments},
    },
};

pub struct LedgerQueryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl LedgerQueryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl LedgerQueryRepository for LedgerQueryPostgres {
    async fn current_debt(&self, pair: LedgerPair) -> Result<i64> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<i64> {
            let mut conn = db_pool.get()?;

            let amount = debts::table
                .filter(debts::photographer_id.eq(pair.photographer_id))
                .filter(debts::client_id.eq(pair.client_id))
                .select(debts::amount)
                .first::<i64>(&mut conn)
                .optional()?;

            Ok(amount.unwrap_or(0))
        })
        .await?
    }

    async fn list_debtors(&self, photographer_id: i64) -> Result<Vec<DebtorEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<Vec<DebtorEntity>> {
            let mut conn = db_pool.get()?;

            let debtors = debts::table
                .inner_join(clients::table.on(clients::id.eq(debts::client_id)))
                .filter(debts::photographer_id.eq(photographer_id))
                .filter(debts::amount.gt(0))
                .select((
                    debts::client_id,
                    clients::name,
                    debts::amount,
                    debts::occurred_at,
                ))
                .order(debts::client_id.asc())
                .load::<DebtorEntity>(&mut conn)?;

            Ok(debtors)
        })
        .await?
    }

    async fn list_payments(&self, photographer_id: i64) -> Result<Vec<PaymentEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<Vec<PaymentEntity>> {
            let mut conn = db_pool.get()?;

            let history = payments::table
                .filter(payments::photographer_id.eq(photographer_id))
                .select(PaymentEntity::as_select())
                .order(payments::id.asc())
                .load::<PaymentEntity>(&mut conn)?;

            Ok(history)
        })
        .await?
    }

    async fn payments_total(&self, photographer_id: i64) -> Result<i64> {
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<i64> {
            let mut conn = db_pool.get()?;

            let total = payments::table
                .filter(payments::photographer_id.eq(photographer_id))
                .select(sql::<BigInt>("COALESCE(SUM(payments.amount), 0)::BIGINT"))
                .first::<i64>(&mut conn)?;

            Ok(total)
        })
        .await?
    }
}
