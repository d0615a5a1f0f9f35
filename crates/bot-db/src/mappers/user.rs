//! User entity <-> model mapper

use bot_core::entities::User;
use bot_core::error::DomainError;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse()
            .map_err(|e| DomainError::InternalError(format!("user {}: {e}", model.id)))?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
