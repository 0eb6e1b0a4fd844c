//! Per-car health snapshot: four 0..=100 status scores plus an opaque
//! prediction payload.

use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car_health")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub car_id: String,
    pub oil_status: i32,
    pub brake_status: i32,
    pub battery_status: i32,
    pub tire_status: i32,
    pub last_updated: DateTimeWithTimeZone,
    pub ai_predictions: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const MAX_SCORE: i32 = 100;

/// The four status scores. Only constructible within 0..=[`MAX_SCORE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthScores {
    oil: i32,
    brake: i32,
    battery: i32,
    tire: i32,
}

impl HealthScores {
    pub fn new(oil: i32, brake: i32, battery: i32, tire: i32) -> Result<Self, ModelError> {
        for (name, v) in [("oil", oil), ("brake", brake), ("battery", battery), ("tire", tire)] {
            if !(0..=MAX_SCORE).contains(&v) {
                return Err(ModelError::Validation(format!("{name} score {v} outside 0..={MAX_SCORE}")));
            }
        }
        Ok(Self { oil, brake, battery, tire })
    }

    /// Scores seeded for every newly added car.
    pub fn baseline() -> Result<Self, ModelError> {
        Self::new(85, 92, 88, 76)
    }
}

/// Placeholder payload stored alongside the baseline scores.
pub fn baseline_predictions() -> Json {
    json!({
        "oil_change_due": "2024-08-15",
        "brake_inspection": "2024-09-01",
        "tire_rotation": "2024-07-20",
        "battery_check": "2024-12-01"
    })
}

/// Result of a prediction refresh. Static until a real model is wired in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceForecast {
    pub overall_health: String,
    pub next_service: String,
    pub alerts: Vec<String>,
    pub maintenance_score: i32,
}

impl MaintenanceForecast {
    pub fn placeholder() -> Self {
        Self {
            overall_health: "Good".into(),
            next_service: "Oil change recommended in 2 weeks".into(),
            alerts: vec![
                "Tire pressure check recommended".into(),
                "Brake fluid level is optimal".into(),
            ],
            maintenance_score: 87,
        }
    }

    pub fn to_json(&self) -> Result<Json, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::Validation(e.to_string()))
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    car_id: &str,
    scores: HealthScores,
    predictions: Json,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        car_id: Set(car_id.to_string()),
        oil_status: Set(scores.oil),
        brake_status: Set(scores.brake),
        battery_status: Set(scores.battery),
        tire_status: Set(scores.tire),
        last_updated: Set(Utc::now().into()),
        ai_predictions: Set(predictions),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the prediction payload and timestamp. Returns the number of rows
/// touched, zero when the car has no health record.
pub async fn set_predictions<C: ConnectionTrait>(db: &C, car_id: &str, predictions: Json) -> Result<u64, ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let res = Entity::update_many()
        .col_expr(Column::AiPredictions, Expr::value(predictions))
        .col_expr(Column::LastUpdated, Expr::value(now))
        .filter(Column::CarId.eq(car_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
