//! Process-local store. Data lives as long as the value does.

use async_trait::async_trait;
use chrono::Utc;
use rentwise_models::{
    NewUser, NotificationSettings, OwnerSummary, PrivacySettings, Property, PropertyDetails,
    PropertyWithOwner, UpdateProfileDto, UpdateSettingsDto, User, UserCredentials,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{EMAIL_IN_USE, USER_NOT_FOUND};
use crate::{PropertyStore, StoreError, UserStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserCredentials>>,
    properties: RwLock<Vec<Property>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn expand(property: &Property, users: &[UserCredentials]) -> Option<PropertyWithOwner> {
    let owner = users.iter().find(|c| c.user.id == property.owner)?;
    Some(property.clone().with_owner(OwnerSummary::from(&owner.user)))
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|c| c.user.email == new_user.email) {
            return Err(StoreError::Conflict(EMAIL_IN_USE));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            phone: None,
            bio: None,
            role: new_user.role,
            avatar: None,
            notifications: NotificationSettings::default(),
            privacy: PrivacySettings::default(),
            created_at: now,
            updated_at: now,
        };
        users.push(UserCredentials {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|c| c.user.id == id).map(|c| c.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|c| c.user.email == email).cloned())
    }

    async fn find_credentials(&self, id: Uuid) -> Result<Option<UserCredentials>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|c| c.user.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: UpdateProfileDto,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email
            && users
                .iter()
                .any(|c| c.user.id != id && &c.user.email == email)
        {
            return Err(StoreError::Conflict(EMAIL_IN_USE));
        }

        let entry = users
            .iter_mut()
            .find(|c| c.user.id == id)
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))?;
        let user = &mut entry.user;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(phone) = changes.phone {
            user.phone = Some(phone);
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let entry = users
            .iter_mut()
            .find(|c| c.user.id == id)
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))?;
        entry.password_hash = password_hash;
        entry.user.updated_at = Utc::now();
        Ok(())
    }

    async fn update_settings(
        &self,
        id: Uuid,
        changes: UpdateSettingsDto,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let entry = users
            .iter_mut()
            .find(|c| c.user.id == id)
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))?;
        let user = &mut entry.user;

        if let Some(notifications) = changes.notifications {
            user.notifications = notifications;
        }
        if let Some(privacy) = changes.privacy {
            user.privacy = privacy;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().map(|c| c.user.clone()).collect())
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn create_property(
        &self,
        owner: Uuid,
        details: PropertyDetails,
    ) -> Result<Property, StoreError> {
        if !self.users.read().await.iter().any(|c| c.user.id == owner) {
            return Err(StoreError::NotFound(USER_NOT_FOUND));
        }

        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            details,
            owner,
            created_at: now,
            updated_at: now,
        };
        self.properties.write().await.push(property.clone());
        Ok(property)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<PropertyWithOwner>, StoreError> {
        let users = self.users.read().await;
        let properties = self.properties.read().await;
        Ok(properties
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| expand(p, &users)))
    }

    async fn list_properties(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PropertyWithOwner>, i64), StoreError> {
        let users = self.users.read().await;
        let properties = self.properties.read().await;

        let all: Vec<PropertyWithOwner> =
            properties.iter().filter_map(|p| expand(p, &users)).collect();
        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(usize::try_from(offset.max(0)).unwrap_or(usize::MAX))
            .take(usize::try_from(limit.max(0)).unwrap_or(usize::MAX))
            .collect();

        Ok((page, total))
    }

    async fn list_properties_by_owner(&self, owner: Uuid) -> Result<Vec<Property>, StoreError> {
        let properties = self.properties.read().await;
        Ok(properties
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect())
    }
}
