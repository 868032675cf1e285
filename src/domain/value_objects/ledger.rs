use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{debts::DebtorEntity, payments::PaymentEntity},
    errors::LedgerError,
};

/// The unit of debt aggregation: one photographer's client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerPair {
    pub photographer_id: i64,
    pub client_id: i64,
}

impl LedgerPair {
    pub fn try_new(photographer_id: i64, client_id: i64) -> Result<Self, LedgerError> {
        if photographer_id <= 0 {
            return Err(LedgerError::InvalidIdentifier {
                field: "photographer_id",
                value: photographer_id,
            });
        }
        if client_id <= 0 {
            return Err(LedgerError::InvalidIdentifier {
                field: "client_id",
                value: client_id,
            });
        }

        Ok(Self {
            photographer_id,
            client_id,
        })
    }
}

impl Display for LedgerPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.photographer_id, self.client_id)
    }
}

/// Strictly positive amount in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Amount(i64);

impl Amount {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(LedgerError::InvalidAmount(value));
        }
        Ok(Self(value))
    }
}

/// What happens to the stored debt row after a charge or a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtChange {
    Set(i64),
    Clear,
}

impl DebtChange {
    pub fn after_charge(current: i64, amount: Amount) -> Result<Self, LedgerError> {
        current
            .checked_add(amount.get())
            .map(DebtChange::Set)
            .ok_or(LedgerError::BalanceOverflow)
    }

    /// Overpayment is not carried forward as credit: anything at or below zero clears the row.
    pub fn after_payment(current: i64, amount: Amount) -> Self {
        let remainder = current.saturating_sub(amount.get());
        if remainder <= 0 {
            DebtChange::Clear
        } else {
            DebtChange::Set(remainder)
        }
    }

    pub fn balance(self) -> i64 {
        match self {
            DebtChange::Set(amount) => amount,
            DebtChange::Clear => 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntryModel {
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentModel {
    pub id: i64,
    pub client_id: i64,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentModel {
    fn from(entity: PaymentEntity) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            amount: entity.amount,
            occurred_at: entity.occurred_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtOutcome {
    pub photographer_id: i64,
    pub client_id: i64,
    pub previous_balance: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOutcome {
    pub photographer_id: i64,
    pub client_id: i64,
    pub previous_balance: i64,
    /// Part of the payment that reduced the debt.
    pub applied: i64,
    /// Overpaid part that was dropped instead of being kept as credit.
    pub discarded: i64,
    pub balance: i64,
    pub payment: PaymentModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentDebtModel {
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtorModel {
    pub client_id: i64,
    pub client_name: String,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

impl From<DebtorEntity> for DebtorModel {
    fn from(entity: DebtorEntity) -> Self {
        Self {
            client_id: entity.client_id,
            client_name: entity.client_name,
            amount: entity.amount,
            occurred_at: entity.occurred_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomesModel {
    pub payments: Vec<PaymentModel>,
    pub total: i64,
}
