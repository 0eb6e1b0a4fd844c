use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum EventType {
    #[sea_orm(string_value = "track-day")]
    #[serde(rename = "track-day")]
    TrackDay,
    #[sea_orm(string_value = "meetup")]
    #[serde(rename = "meetup")]
    Meetup,
    #[sea_orm(string_value = "exclusive")]
    #[serde(rename = "exclusive")]
    Exclusive,
}

/// Brands an event is aimed at, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct BrandFilter(pub Vec<String>);

impl BrandFilter {
    pub fn of(brands: &[&str]) -> Self {
        Self(brands.iter().map(|b| ToString::to_string(b)).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: String,
    pub location: String,
    pub max_attendees: i32,
    pub current_attendees: i32,
    #[sea_orm(column_type = "Json")]
    pub brands_filter: BrandFilter,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: String,
    pub location: String,
    pub max_attendees: i32,
    #[serde(default)]
    pub current_attendees: i32,
    #[serde(default)]
    pub brands_filter: BrandFilter,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewEvent) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(crate::new_id()),
        title: Set(input.title),
        description: Set(input.description),
        event_type: Set(input.event_type),
        date: Set(input.date),
        location: Set(input.location),
        max_attendees: Set(input.max_attendees),
        current_attendees: Set(input.current_attendees),
        brands_filter: Set(input.brands_filter),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_title<C: ConnectionTrait>(db: &C, title: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Title.eq(title)).one(db).await?)
}

/// `current_attendees = current_attendees + 1` as a single UPDATE. Zero rows
/// when the event does not exist.
pub async fn increment_attendees<C: ConnectionTrait>(db: &C, event_id: &str) -> Result<u64, ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::CurrentAttendees, Expr::col(Column::CurrentAttendees).add(1))
        .filter(Column::Id.eq(event_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_filter_is_a_plain_array_on_the_wire() {
        let v = serde_json::to_value(BrandFilter::of(&["BMW", "Mercedes"])).unwrap();
        assert_eq!(v, serde_json::json!(["BMW", "Mercedes"]));
    }

    #[test]
    fn event_type_spellings() {
        assert_eq!(serde_json::to_string(&EventType::TrackDay).unwrap(), "\"track-day\"");
        let t: EventType = serde_json::from_str("\"exclusive\"").unwrap();
        assert_eq!(t, EventType::Exclusive);
    }
}
