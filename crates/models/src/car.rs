use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub brand: String,
    #[sea_orm(column_name = "model")]
    #[serde(rename = "model")]
    pub model_name: String,
    pub year: i32,
    pub mileage: i32,
    pub last_service_date: String,
    pub vin: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub user_id: String,
    pub brand: String,
    #[serde(rename = "model")]
    pub model_name: String,
    pub year: i32,
    pub mileage: i32,
    pub last_service_date: String,
    pub vin: String,
    pub color: String,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCar) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(crate::new_id()),
        user_id: Set(input.user_id),
        brand: Set(input.brand),
        model_name: Set(input.model_name),
        year: Set(input.year),
        mileage: Set(input.mileage),
        last_service_date: Set(input.last_service_date),
        vin: Set(input.vin),
        color: Set(input.color),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_user<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().filter(Column::UserId.eq(user_id)).all(db).await?)
}
