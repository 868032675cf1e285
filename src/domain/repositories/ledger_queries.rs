use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::{debts::DebtorEntity, payments::PaymentEntity},
    value_objects::ledger::LedgerPair,
};

#[async_trait]
#[automock]
pub trait LedgerQueryRepository {
    async fn current_debt(&self, pair: LedgerPair) -> Result<i64>;
    async fn list_debtors(&self, photographer_id: i64) -> Result<Vec<DebtorEntity>>;
    async fn list_payments(&self, photographer_id: i64) -> Result<Vec<PaymentEntity>>;
    async fn payments_total(&self, photographer_id: i64) -> Result<i64>;
}
