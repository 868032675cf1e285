use async_trait::async_trait;
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::domain::{
    errors::LedgerError,
    value_objects::ledger::{Amount, DebtOutcome, LedgerPair, PaymentModel, PaymentOutcome},
};

/// Debt accumulator bound to one open transaction.
///
/// Implementations must make `current_debt` a locking read so that two
/// transactions on the same pair cannot both derive a new balance from the
/// same stale value.
#[cfg_attr(test, automock)]
pub trait DebtLedger {
    /// Outstanding balance of the pair, 0 when there is no debt row.
    fn current_debt(&mut self, pair: LedgerPair) -> Result<i64, LedgerError>;
    /// Inserts the row or overwrites its amount.
    fn set_debt(&mut self, pair: LedgerPair, amount: i64) -> Result<(), LedgerError>;
    /// Deletes the row; no-op when it is already gone.
    fn clear_debt(&mut self, pair: LedgerPair) -> Result<(), LedgerError>;
    fn append_payment(&mut self, pair: LedgerPair, amount: Amount)
    -> Result<PaymentModel, LedgerError>;
}

/// Money-moving operations, each one atomic against the store.
#[async_trait]
#[automock]
pub trait ReconciliationRepository {
    async fn add_debt(
        &self,
        pair: LedgerPair,
        amount: Amount,
        cancel: CancellationToken,
    ) -> Result<DebtOutcome, LedgerError>;
    async fn add_payment(
        &self,
        pair: LedgerPair,
        amount: Amount,
        cancel: CancellationToken,
    ) -> Result<PaymentOutcome, LedgerError>;
}
