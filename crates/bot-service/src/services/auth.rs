//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use bot_common::AppError;
use bot_core::entities::NewUser;
use bot_core::value_objects::Role;
use bot_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, TokenResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        for (field, value) in [
            ("name", &request.name),
            ("email", &request.email),
            ("password", &request.password),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::MissingField(field).into());
            }
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password).await?;

        let role = Role::from_input(request.role.as_deref());
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(request.name, request.email, role), &password_hash)
            .await?;

        info!(user_id = user.id, role = %user.role, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error, and both
    /// paths run one password verification.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self.ctx.user_repo().find_by_email(&request.email).await?;

        let password_hash = match &user {
            Some(user) => self.ctx.user_repo().get_password_hash(user.id).await?,
            None => None,
        };

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, password_hash)
            .await
        {
            warn!(known_user = user.is_some(), "Login failed");
            return Err(e.into());
        }

        // verify_or_error only succeeds when a hash was found
        let user = user.ok_or(AppError::InvalidCredentials)?;

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.email, user.role)?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Re-issue a token for the same identity
    #[instrument(skip(self, token))]
    pub async fn refresh(&self, token: &str) -> ServiceResult<TokenResponse> {
        let token = self.ctx.jwt_service().refresh(token)?;
        Ok(TokenResponse { token })
    }

    /// Logout
    ///
    /// Tokens are stateless, so this only acknowledges; the client drops its
    /// token.
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64) -> ServiceResult<MessageResponse> {
        info!(user_id, "User logged out");
        Ok(MessageResponse::new("Logged out successfully"))
    }

    /// Current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: i64) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }
}
