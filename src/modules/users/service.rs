use anyhow::anyhow;
use rentwise_core::{AppError, hash_password, verify_password};
use rentwise_db::{StoreError, UserStore};
use rentwise_models::{ChangePasswordDto, UpdateProfileDto, UpdateSettingsDto, User};
use tracing::{info, instrument};
use uuid::Uuid;

pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService;

impl UserService {
    #[instrument(skip(users))]
    pub async fn get_profile(users: &dyn UserStore, user_id: Uuid) -> Result<User, AppError> {
        users
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))
    }

    #[instrument(skip(users, dto))]
    pub async fn update_profile(
        users: &dyn UserStore,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        Ok(users.update_profile(user_id, dto).await?)
    }

    /// Replaces the password after checking the current one.
    #[instrument(skip(users, dto))]
    pub async fn change_password(
        users: &dyn UserStore,
        user_id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let credentials = users
            .find_credentials(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

        if !verify_password(&dto.current_password, &credentials.password_hash)? {
            return Err(AppError::bad_request(anyhow!(
                "Current password is incorrect"
            )));
        }

        let password_hash = hash_password(&dto.new_password)?;
        users
            .update_password(user_id, password_hash)
            .await
            .map_err(|err| match err {
                StoreError::NotFound(_) => AppError::not_found(anyhow!(USER_NOT_FOUND)),
                other => other.into(),
            })?;

        info!(%user_id, "Password changed");
        Ok(())
    }

    #[instrument(skip(users, dto))]
    pub async fn update_settings(
        users: &dyn UserStore,
        user_id: Uuid,
        dto: UpdateSettingsDto,
    ) -> Result<User, AppError> {
        Ok(users.update_settings(user_id, dto).await?)
    }

    #[instrument(skip(users))]
    pub async fn list_users(users: &dyn UserStore) -> Result<Vec<User>, AppError> {
        Ok(users.list_users().await?)
    }
}
