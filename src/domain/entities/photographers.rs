use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::photographers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = photographers)]
pub struct PhotographerEntity {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = photographers)]
pub struct InsertPhotographerEntity {
    pub name: String,
}
