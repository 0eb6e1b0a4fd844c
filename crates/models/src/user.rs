use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum MembershipTier {
    #[default]
    #[sea_orm(string_value = "Basic")]
    Basic,
    #[sea_orm(string_value = "Premium")]
    Premium,
    #[sea_orm(string_value = "Veluxe Elite")]
    #[serde(rename = "Veluxe Elite")]
    VeluxeElite,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership_tier: MembershipTier,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Client-supplied user fields. `id` and `created_at` are always assigned here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub membership_tier: MembershipTier,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewUser) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(crate::new_id()),
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        membership_tier: Set(input.membership_tier),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_tier_uses_display_spelling() {
        let tier: MembershipTier = serde_json::from_str("\"Veluxe Elite\"").unwrap();
        assert_eq!(tier, MembershipTier::VeluxeElite);
        assert_eq!(serde_json::to_string(&MembershipTier::Premium).unwrap(), "\"Premium\"");
        assert!(serde_json::from_str::<MembershipTier>("\"Gold\"").is_err());
    }

    #[test]
    fn new_user_ignores_server_assigned_fields() {
        let input: NewUser = serde_json::from_value(serde_json::json!({
            "id": "client-chosen",
            "name": "Alexander Hamilton",
            "email": "alex.hamilton@veluxe.com",
            "phone": "+1-555-123-4567",
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(input.membership_tier, MembershipTier::Basic);
        assert_eq!(input.name, "Alexander Hamilton");
    }
}
