use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::clients;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = clients)]
pub struct ClientEntity {
    pub id: i64,
    pub photographer_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clients)]
pub struct InsertClientEntity {
    pub photographer_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = clients)]
pub struct EditClientEntity {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}
