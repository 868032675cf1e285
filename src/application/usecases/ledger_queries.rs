use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::domain::{
    errors::LedgerError,
    repositories::ledger_queries::LedgerQueryRepository,
    value_objects::ledger::{CurrentDebtModel, DebtorModel, IncomesModel, LedgerPair, PaymentModel},
};

pub struct LedgerQueryUseCase<T>
where
    T: LedgerQueryRepository + Send + Sync,
{
    ledger_query_repository: Arc<T>,
}

impl<T> LedgerQueryUseCase<T>
where
    T: LedgerQueryRepository + Send + Sync,
{
    pub fn new(ledger_query_repository: Arc<T>) -> Self {
        Self {
            ledger_query_repository,
        }
    }

    pub async fn current_debt(
        &self,
        photographer_id: i64,
        client_id: i64,
    ) -> Result<CurrentDebtModel, LedgerError> {
        let pair = LedgerPair::try_new(photographer_id, client_id)?;
        let amount = self
            .ledger_query_repository
            .current_debt(pair)
            .await
            .inspect_err(|err| {
                error!(%pair, db_error = ?err, "ledger: failed to read current debt")
            })?;

        Ok(CurrentDebtModel {
            photographer_id,
            client_id,
            amount,
        })
    }

    pub async fn list_debtors(&self, photographer_id: i64) -> Result<Vec<DebtorModel>> {
        info!(photographer_id, "ledger: listing debtors");
        let debtors = self
            .ledger_query_repository
            .list_debtors(photographer_id)
            .await
            .inspect_err(|err| {
                error!(photographer_id, db_error = ?err, "ledger: failed to list debtors")
            })?;

        info!(photographer_id, debtor_count = debtors.len(), "ledger: debtors loaded");
        Ok(debtors.into_iter().map(DebtorModel::from).collect())
    }

    /// Payment history and its total, read concurrently. Either failure fails the whole view.
    pub async fn incomes(&self, photographer_id: i64) -> Result<IncomesModel> {
        info!(photographer_id, "ledger: loading incomes");
        let (payments, total) = tokio::try_join!(
            self.ledger_query_repository.list_payments(photographer_id),
            self.ledger_query_repository.payments_total(photographer_id),
        )
        .inspect_err(|err| {
            error!(photographer_id, db_error = ?err, "ledger: failed to load incomes")
        })?;

        Ok(IncomesModel {
            payments: payments.into_iter().map(PaymentModel::from).collect(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{debts::DebtorEntity, payments::PaymentEntity},
        repositories::ledger_queries::MockLedgerQueryRepository,
    };
    use anyhow::anyhow;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn payment(id: i64, amount: i64) -> PaymentEntity {
        PaymentEntity {
            id,
            photographer_id: 3,
            client_id: 4,
            amount,
            occurred_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn incomes_combines_history_and_total() {
        let mut repository = MockLedgerQueryRepository::new();
        repository
            .expect_list_payments()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(vec![payment(1, 200), payment(2, 700)]) }));
        repository
            .expect_payments_total()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(900) }));

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));
        let incomes = usecase.incomes(3).await.unwrap();

        assert_eq!(incomes.total, 900);
        assert_eq!(
            incomes.payments.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn incomes_for_photographer_without_payments_is_zero() {
        let mut repository = MockLedgerQueryRepository::new();
        repository
            .expect_list_payments()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        repository
            .expect_payments_total()
            .returning(|_| Box::pin(async { Ok(0) }));

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));
        let incomes = usecase.incomes(3).await.unwrap();

        assert_eq!(incomes.total, 0);
        assert!(incomes.payments.is_empty());
    }

    #[tokio::test]
    async fn incomes_fails_when_total_query_fails() {
        let mut repository = MockLedgerQueryRepository::new();
        repository
            .expect_list_payments()
            .returning(|_| Box::pin(async { Ok(vec![payment(1, 10)]) }));
        repository
            .expect_payments_total()
            .returning(|_| Box::pin(async { Err(anyhow!("timeout")) }));

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));

        assert!(usecase.incomes(3).await.is_err());
    }

    #[tokio::test]
    async fn incomes_fails_when_history_query_fails() {
        let mut repository = MockLedgerQueryRepository::new();
        repository
            .expect_list_payments()
            .returning(|_| Box::pin(async { Err(anyhow!("timeout")) }));
        repository
            .expect_payments_total()
            .returning(|_| Box::pin(async { Ok(10) }));

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));

        assert!(usecase.incomes(3).await.is_err());
    }

    #[tokio::test]
    async fn current_debt_without_activity_is_zero() {
        let mut repository = MockLedgerQueryRepository::new();
        repository
            .expect_current_debt()
            .returning(|_| Box::pin(async { Ok(0) }));

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));
        let debt = usecase.current_debt(3, 4).await.unwrap();

        assert_eq!(debt.amount, 0);
    }

    #[tokio::test]
    async fn current_debt_rejects_bad_ids() {
        let mut repository = MockLedgerQueryRepository::new();
        repository.expect_current_debt().never();

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));

        assert!(usecase.current_debt(3, 0).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn debtors_are_mapped_with_client_names() {
        let mut repository = MockLedgerQueryRepository::new();
        repository.expect_list_debtors().with(eq(3)).returning(|_| {
            Box::pin(async {
                Ok(vec![DebtorEntity {
                    client_id: 4,
                    client_name: "Alice".to_string(),
                    amount: 300,
                    occurred_at: Utc::now(),
                }])
            })
        });

        let usecase = LedgerQueryUseCase::new(Arc::new(repository));
        let debtors = usecase.list_debtors(3).await.unwrap();

        assert_eq!(debtors.len(), 1);
        assert_eq!(debtors[0].client_name, "Alice");
        assert_eq!(debtors[0].amount, 300);
    }
}
