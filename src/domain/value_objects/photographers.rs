use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::photographers::{InsertPhotographerEntity, PhotographerEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotographerModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PhotographerEntity> for PhotographerModel {
    fn from(entity: PhotographerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertPhotographerModel {
    pub name: String,
}

impl InsertPhotographerModel {
    pub fn to_entity(&self) -> InsertPhotographerEntity {
        InsertPhotographerEntity {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedModel {
    pub id: i64,
}
