use async_trait::async_trait;
use rentwise_models::{
    NewUser, Property, PropertyDetails, PropertyWithOwner, UpdateProfileDto, UpdateSettingsDto,
    User, UserCredentials,
};
use uuid::Uuid;

use crate::StoreError;

pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const EMAIL_IN_USE: &str = "Email already in use";

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new account. Fails with `Conflict` when the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError>;

    async fn find_credentials(&self, id: Uuid) -> Result<Option<UserCredentials>, StoreError>;

    /// Applies the fields present in `changes`, leaving the rest untouched.
    async fn update_profile(&self, id: Uuid, changes: UpdateProfileDto)
    -> Result<User, StoreError>;

    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError>;

    async fn update_settings(
        &self,
        id: Uuid,
        changes: UpdateSettingsDto,
    ) -> Result<User, StoreError>;

    /// All accounts, oldest first.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn create_property(
        &self,
        owner: Uuid,
        details: PropertyDetails,
    ) -> Result<Property, StoreError>;

    async fn find_property(&self, id: Uuid) -> Result<Option<PropertyWithOwner>, StoreError>;

    /// One page of listings, oldest first, plus the total count.
    async fn list_properties(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PropertyWithOwner>, i64), StoreError>;

    async fn list_properties_by_owner(&self, owner: Uuid) -> Result<Vec<Property>, StoreError>;
}
