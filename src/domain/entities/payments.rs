use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::payments;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payments)]
pub struct PaymentEntity {
    pub id: i64,
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub struct InsertPaymentEntity {
    pub photographer_id: i64,
    pub client_id: i64,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}
