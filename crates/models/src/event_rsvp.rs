use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_rsvps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert an RSVP. A second RSVP for the same pair fails with
/// [`ModelError::Conflict`] through the unique (event_id, user_id) index.
pub async fn create<C: ConnectionTrait>(db: &C, event_id: &str, user_id: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(crate::new_id()),
        event_id: Set(event_id.to_string()),
        user_id: Set(user_id.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, event_id: &str, user_id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::EventId.eq(event_id))
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}
