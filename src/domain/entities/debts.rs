use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::debts;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = debts, primary_key(photographer_id, client_id))]
pub struct DebtEntity {
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = debts)]
pub struct UpsertDebtEntity {
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Row of the debtors projection: a debt joined to its client's name.
#[derive(Debug, Clone, Queryable)]
pub struct DebtorEntity {
    pub client_id: i64,
    pub client_name: String,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}
