use async_trait::async_trait;
use chrono::Utc;
use diesel::{Connection, PgConnection, RunQueryDsl, delete, insert_into, prelude::*};
use std::sync::Arc;
use tokio::task;
use tokio_util::sync::CancellationToken;

use crate::{
    application::reconciliation_engine,
    domain::{
        entities::{
            debts::UpsertDebtEntity,
            payments::{InsertPaymentEntity, PaymentEntity},
        },
        errors::LedgerError,
        repositories::ledger::{DebtLedger, ReconciliationRepository},
        value_objects::ledger::{Amount, DebtOutcome, LedgerPair, PaymentModel, PaymentOutcome},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{debts, payments},
    },
};

/// Debt accumulator over a connection that is inside an open transaction.
pub struct PgDebtLedger<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PgDebtLedger<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl DebtLedger for PgDebtLedger<'_> {
    fn current_debt(&mut self, pair: LedgerPair) -> Result<i64, LedgerError> {
        // Insert a zero placeholder or lock the existing row, in one statement.
        // Postgres re-checks the conflict after waiting on a concurrent writer,
        // so a row deleted by a settling payment is re-inserted at zero.
        let amount = insert_into(debts::table)
            .values(&UpsertDebtEntity {
                photographer_id: pair.photographer_id,
                client_id: pair.client_id,
                amount: 0,
                occurred_at: Utc::now(),
            })
            .on_conflict((debts::photographer_id, debts::client_id))
            .do_update()
            .set(debts::amount.eq(debts::amount))
            .returning(debts::amount)
            .get_result::<i64>(self.conn)?;

        Ok(amount)
    }

    fn set_debt(&mut self, pair: LedgerPair, amount: i64) -> Result<(), LedgerError> {
        let now = Utc::now();

        insert_into(debts::table)
            .values(&UpsertDebtEntity {
                photographer_id: pair.photographer_id,
                client_id: pair.client_id,
                amount,
                occurred_at: now,
            })
            .on_conflict((debts::photographer_id, debts::client_id))
            .do_update()
            .set((debts::amount.eq(amount), debts::occurred_at.eq(now)))
            .execute(self.conn)?;

        Ok(())
    }

    fn clear_debt(&mut self, pair: LedgerPair) -> Result<(), LedgerError> {
        delete(
            debts::table
                .filter(debts::photographer_id.eq(pair.photographer_id))
                .filter(debts::client_id.eq(pair.client_id)),
        )
        .execute(self.conn)?;

        Ok(())
    }

    fn append_payment(
        &mut self,
        pair: LedgerPair,
        amount: Amount,
    ) -> Result<PaymentModel, LedgerError> {
        let payment = insert_into(payments::table)
            .values(&InsertPaymentEntity {
                photographer_id: pair.photographer_id,
                client_id: pair.client_id,
                amount: amount.get(),
                occurred_at: Utc::now(),
            })
            .returning(PaymentEntity::as_returning())
            .get_result::<PaymentEntity>(self.conn)?;

        Ok(payment.into())
    }
}

pub struct ReconciliationPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReconciliationPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }

    /// Runs `operation` in one transaction on the blocking pool.
    ///
    /// Commits only when `operation` succeeds and `cancel` is still live right
    /// before commit. Dropping the returned future cancels the token, so an
    /// abandoned request rolls back instead of committing in the background.
    async fn in_transaction<T, F>(
        &self,
        cancel: CancellationToken,
        operation: F,
    ) -> Result<T, LedgerError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgDebtLedger<'_>) -> Result<T, LedgerError> + Send + 'static,
    {
        let cancel = cancel.child_token();
        let _cancel_on_drop = cancel.clone().drop_guard();
        let db_pool = Arc::clone(&self.db_pool);

        task::spawn_blocking(move || -> Result<T, LedgerError> {
            ensure_live(&cancel)?;
            let mut conn = db_pool.get()?;

            conn.transaction::<T, LedgerError, _>(|tx| {
                let mut ledger = PgDebtLedger::new(tx);
                let outcome = operation(&mut ledger)?;
                ensure_live(&cancel)?;
                Ok(outcome)
            })
        })
        .await?
    }
}

fn ensure_live(cancel: &CancellationToken) -> Result<(), LedgerError> {
    if cancel.is_cancelled() {
        return Err(LedgerError::Cancelled);
    }
    Ok(())
}

#[async_trait]
impl ReconciliationRepository for ReconciliationPostgres {
    async fn add_debt(
        &self,
        pair: LedgerPair,
        amount: Amount,
        cancel: CancellationToken,
    ) -> Result<DebtOutcome, LedgerError> {
        self.in_transaction(cancel, move |ledger| {
            reconciliation_engine::add_debt(ledger, pair, amount)
        })
        .await
    }

    async fn add_payment(
        &self,
        pair: LedgerPair,
        amount: Amount,
        cancel: CancellationToken,
    ) -> Result<PaymentOutcome, LedgerError> {
        self.in_transaction(cancel, move |ledger| {
            reconciliation_engine::add_payment(ledger, pair, amount)
        })
        .await
    }
}
