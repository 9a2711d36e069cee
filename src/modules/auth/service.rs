use anyhow::anyhow;
use rentwise_auth::TokenKeys;
use rentwise_core::{AppError, hash_password, verify_password};
use rentwise_db::{StoreError, UserStore};
use rentwise_models::{LoginRequest, NewUser, RegisterRequest, User};
use tracing::{info, instrument};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const USER_EXISTS: &str = "User already exists";

pub struct AuthService;

impl AuthService {
    /// Creates the account and signs its first token.
    #[instrument(skip(users, tokens, dto), fields(email = %dto.email))]
    pub async fn register(
        users: &dyn UserStore,
        tokens: &TokenKeys,
        dto: RegisterRequest,
    ) -> Result<(User, String), AppError> {
        let role = dto.role.unwrap_or_default();
        if !role.is_self_assignable() {
            return Err(AppError::forbidden(anyhow!(
                "Role '{}' cannot be self-assigned",
                role
            )));
        }

        if users.find_credentials_by_email(&dto.email).await?.is_some() {
            return Err(AppError::bad_request(anyhow!(USER_EXISTS)));
        }

        let password_hash = hash_password(&dto.password)?;
        let user = users
            .create_user(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
                role,
            })
            .await
            .map_err(|err| match err {
                StoreError::Conflict(_) => AppError::bad_request(anyhow!(USER_EXISTS)),
                other => other.into(),
            })?;

        let token = tokens.issue(&user.id.to_string(), &user.email, user.role)?;
        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok((user, token))
    }

    /// Checks the password and signs a fresh token.
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(users, tokens, dto), fields(email = %dto.email))]
    pub async fn login(
        users: &dyn UserStore,
        tokens: &TokenKeys,
        dto: LoginRequest,
    ) -> Result<(User, String), AppError> {
        let credentials = users
            .find_credentials_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)))?;

        if !verify_password(&dto.password, &credentials.password_hash)? {
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        let user = credentials.user;
        let token = tokens.issue(&user.id.to_string(), &user.email, user.role)?;

        Ok((user, token))
    }
}
