use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use models::user::{self, NewUser};
use crate::errors::ServiceError;

/// Create a user; the id and creation timestamp are assigned here.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_user(db: &DatabaseConnection, input: NewUser) -> Result<user::Model, ServiceError> {
    let created = user::create(db, input).await.map_err(ServiceError::write)?;
    info!(user_id = %created.id, tier = ?created.membership_tier, "user created");
    Ok(created)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: &str) -> Result<user::Model, ServiceError> {
    user::Entity::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("User"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::user::MembershipTier;
    use crate::test_support::get_db;

    fn hamilton() -> NewUser {
        NewUser {
            name: "Alexander Hamilton".into(),
            email: "alex.hamilton@veluxe.com".into(),
            phone: "+1-555-123-4567".into(),
            membership_tier: MembershipTier::VeluxeElite,
        }
    }

    #[tokio::test]
    async fn created_user_round_trips() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = hamilton();
        let created = create_user(&db, input.clone()).await?;

        let found = get_user(&db, &created.id).await?;
        assert_eq!(found, created);
        assert_eq!(found.name, input.name);
        assert_eq!(found.email, input.email);
        assert_eq!(found.phone, input.phone);
        assert_eq!(found.membership_tier, input.membership_tier);
        Ok(())
    }

    #[tokio::test]
    async fn each_user_gets_a_fresh_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_user(&db, hamilton()).await?;
        let b = create_user(&db, hamilton()).await?;
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn missing_user_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = get_user(&db, "no-such-user").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
