use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::clients::{ClientEntity, EditClientEntity, InsertClientEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientModel {
    pub id: i64,
    pub photographer_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<ClientEntity> for ClientModel {
    fn from(entity: ClientEntity) -> Self {
        Self {
            id: entity.id,
            photographer_id: entity.photographer_id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertClientModel {
    pub photographer_id: i64,
    pub name: String,
}

impl InsertClientModel {
    pub fn to_entity(&self) -> InsertClientEntity {
        InsertClientEntity {
            photographer_id: self.photographer_id,
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditClientModel {
    pub name: String,
}

impl EditClientModel {
    pub fn to_entity(&self) -> EditClientEntity {
        EditClientEntity {
            name: self.name.trim().to_string(),
            updated_at: Utc::now(),
        }
    }
}
