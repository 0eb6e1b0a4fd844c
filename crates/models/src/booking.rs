use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum PickupMode {
    #[sea_orm(string_value = "white-glove")]
    #[serde(rename = "white-glove")]
    WhiteGlove,
    #[sea_orm(string_value = "in-garage")]
    #[serde(rename = "in-garage")]
    InGarage,
}

pub const DEFAULT_STATUS: &str = "scheduled";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub car_id: String,
    pub service_type: String,
    pub pickup_type: PickupMode,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    pub special_instructions: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_status() -> String { DEFAULT_STATUS.to_string() }

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_id: String,
    pub car_id: String,
    pub service_type: String,
    pub pickup_type: PickupMode,
    pub appointment_date: String,
    pub appointment_time: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub special_instructions: String,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewBooking) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(crate::new_id()),
        user_id: Set(input.user_id),
        car_id: Set(input.car_id),
        service_type: Set(input.service_type),
        pickup_type: Set(input.pickup_type),
        appointment_date: Set(input.appointment_date),
        appointment_time: Set(input.appointment_time),
        status: Set(input.status),
        special_instructions: Set(input.special_instructions),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_user<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().filter(Column::UserId.eq(user_id)).all(db).await?)
}
