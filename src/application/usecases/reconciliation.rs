use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::domain::{
    errors::LedgerError,
    repositories::ledger::ReconciliationRepository,
    value_objects::ledger::{Amount, DebtOutcome, LedgerPair, PaymentOutcome},
};

pub struct ReconciliationUseCase<T>
where
    T: ReconciliationRepository + Send + Sync,
{
    reconciliation_repository: Arc<T>,
}

impl<T> ReconciliationUseCase<T>
where
    T: ReconciliationRepository + Send + Sync,
{
    pub fn new(reconciliation_repository: Arc<T>) -> Self {
        Self {
            reconciliation_repository,
        }
    }

    pub async fn add_debt(
        &self,
        photographer_id: i64,
        client_id: i64,
        amount: i64,
        cancel: CancellationToken,
    ) -> Result<DebtOutcome, LedgerError> {
        let pair = LedgerPair::try_new(photographer_id, client_id)?;
        let amount = Amount::try_from(amount)?;

        info!(%pair, amount = amount.get(), "ledger: adding debt");
        let outcome = self
            .reconciliation_repository
            .add_debt(pair, amount, cancel)
            .await
            .inspect_err(|err| log_failure("add_debt", pair, err))?;

        info!(%pair, balance = outcome.balance, "ledger: debt added");
        Ok(outcome)
    }

    pub async fn add_payment(
        &self,
        photographer_id: i64,
        client_id: i64,
        amount: i64,
        cancel: CancellationToken,
    ) -> Result<PaymentOutcome, LedgerError> {
        let pair = LedgerPair::try_new(photographer_id, client_id)?;
        let amount = Amount::try_from(amount)?;

        info!(%pair, amount = amount.get(), "ledger: recording payment");
        let outcome = self
            .reconciliation_repository
            .add_payment(pair, amount, cancel)
            .await
            .inspect_err(|err| log_failure("add_payment", pair, err))?;

        if outcome.discarded > 0 {
            warn!(
                %pair,
                discarded = outcome.discarded,
                "ledger: overpayment discarded, no credit kept"
            );
        }
        info!(
            %pair,
            payment_id = outcome.payment.id,
            balance = outcome.balance,
            "ledger: payment recorded"
        );
        Ok(outcome)
    }
}

fn log_failure(operation: &'static str, pair: LedgerPair, err: &LedgerError) {
    match err {
        LedgerError::Conflict | LedgerError::Cancelled => {
            warn!(operation, %pair, error = %err, "ledger: transaction rolled back")
        }
        LedgerError::UnknownPair => {
            info!(operation, %pair, "ledger: unknown photographer/client pair")
        }
        _ => error!(operation, %pair, db_error = ?err, "ledger: transaction failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        repositories::ledger::MockReconciliationRepository,
        value_objects::ledger::PaymentModel,
    };
    use anyhow::anyhow;
    use chrono::Utc;

    fn pair() -> LedgerPair {
        LedgerPair::try_new(7, 11).unwrap()
    }

    #[tokio::test]
    async fn rejects_non_positive_amount_without_touching_store() {
        let mut repository = MockReconciliationRepository::new();
        repository.expect_add_debt().never();
        repository.expect_add_payment().never();

        let usecase = ReconciliationUseCase::new(Arc::new(repository));

        let err = usecase
            .add_debt(7, 11, 0, CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(0)));

        let err = usecase
            .add_payment(7, 11, -50, CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(-50)));
    }

    #[tokio::test]
    async fn rejects_invalid_identifiers() {
        let mut repository = MockReconciliationRepository::new();
        repository.expect_add_debt().never();

        let usecase = ReconciliationUseCase::new(Arc::new(repository));

        let err = usecase
            .add_debt(0, 11, 10, CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn forwards_validated_debt_to_repository() {
        let mut repository = MockReconciliationRepository::new();
        repository
            .expect_add_debt()
            .withf(|pair, amount, _| {
                pair.photographer_id == 7 && pair.client_id == 11 && amount.get() == 500
            })
            .times(1)
            .returning(|pair, amount, _| {
                Box::pin(async move {
                    Ok(DebtOutcome {
                        photographer_id: pair.photographer_id,
                        client_id: pair.client_id,
                        previous_balance: 0,
                        balance: amount.get(),
                    })
                })
            });

        let usecase = ReconciliationUseCase::new(Arc::new(repository));
        let outcome = usecase
            .add_debt(7, 11, 500, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.balance, 500);
    }

    #[tokio::test]
    async fn returns_overpayment_outcome() {
        let mut repository = MockReconciliationRepository::new();
        repository
            .expect_add_payment()
            .times(1)
            .returning(|pair, amount, _| {
                Box::pin(async move {
                    Ok(PaymentOutcome {
                        photographer_id: pair.photographer_id,
                        client_id: pair.client_id,
                        previous_balance: 500,
                        applied: 500,
                        discarded: amount.get() - 500,
                        balance: 0,
                        payment: PaymentModel {
                            id: 1,
                            client_id: pair.client_id,
                            amount: amount.get(),
                            occurred_at: Utc::now(),
                        },
                    })
                })
            });

        let usecase = ReconciliationUseCase::new(Arc::new(repository));
        let outcome = usecase
            .add_payment(7, 11, 700, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.discarded, 200);
        assert_eq!(outcome.payment.amount, 700);
    }

    #[tokio::test]
    async fn conflict_is_surfaced_without_retry() {
        let mut repository = MockReconciliationRepository::new();
        repository
            .expect_add_payment()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Err(LedgerError::Conflict) }));

        let usecase = ReconciliationUseCase::new(Arc::new(repository));
        let err = usecase
            .add_payment(pair().photographer_id, pair().client_id, 10, CancellationToken::new())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn store_failure_is_surfaced() {
        let mut repository = MockReconciliationRepository::new();
        repository
            .expect_add_debt()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Err(LedgerError::Store(anyhow!("db down"))) }));

        let usecase = ReconciliationUseCase::new(Arc::new(repository));
        let err = usecase
            .add_debt(7, 11, 10, CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, LedgerError::Store(_)));
    }
}
