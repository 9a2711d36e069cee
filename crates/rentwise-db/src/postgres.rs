//! PostgreSQL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rentwise_auth::Role;
use rentwise_auth::role::UnknownRole;
use rentwise_config::DatabaseConfig;
use rentwise_models::{
    NewUser, NotificationSettings, OwnerSummary, PrivacySettings, Property, PropertyDetails,
    PropertyWithOwner, UnknownVariant, UpdateProfileDto, UpdateSettingsDto, User, UserCredentials,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use crate::store::{EMAIL_IN_USE, USER_NOT_FOUND};
use crate::{PropertyStore, StoreError, UserStore};

/// Connects a pool sized by `config.max_connections`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the SQL files under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

const USER_COLUMNS: &str = "id, name, email, password_hash, phone, bio, role, avatar, \
     notifications, privacy, created_at, updated_at";

const PROPERTY_COLUMNS: &str = "p.id, p.title, p.description, p.location, p.price, \
     p.original_price, p.images, p.beds, p.baths, p.parking, p.furnished, p.area, \
     p.property_type, p.status, p.featured, p.owner_id, p.created_at, p.updated_at";

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    phone: Option<String>,
    bio: Option<String>,
    role: String,
    avatar: Option<String>,
    notifications: Json<NotificationSettings>,
    privacy: Json<PrivacySettings>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserCredentials {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e: UnknownRole| StoreError::Corrupt(e.to_string()))?;

        Ok(UserCredentials {
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                phone: row.phone,
                bio: row.bio,
                role,
                avatar: row.avatar,
                notifications: row.notifications.0,
                privacy: row.privacy.0,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            password_hash: row.password_hash,
        })
    }
}

fn to_user(row: UserRow) -> Result<User, StoreError> {
    UserCredentials::try_from(row).map(|c| c.user)
}

#[derive(FromRow)]
struct PropertyRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    price: f64,
    original_price: Option<f64>,
    images: Vec<String>,
    beds: i32,
    baths: i32,
    parking: bool,
    furnished: bool,
    area: f64,
    property_type: String,
    status: String,
    featured: bool,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PropertyRow> for Property {
    type Error = StoreError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        let corrupt = |e: UnknownVariant| StoreError::Corrupt(e.to_string());

        Ok(Property {
            id: row.id,
            details: PropertyDetails {
                title: row.title,
                description: row.description,
                location: row.location,
                price: row.price,
                original_price: row.original_price,
                images: row.images,
                beds: row.beds,
                baths: row.baths,
                parking: row.parking,
                furnished: row.furnished,
                area: row.area,
                property_type: row.property_type.parse().map_err(corrupt)?,
                status: row.status.parse().map_err(corrupt)?,
                featured: row.featured,
            },
            owner: row.owner_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(FromRow)]
struct PropertyWithOwnerRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    owner_name: String,
    owner_email: String,
    owner_avatar: Option<String>,
}

impl TryFrom<PropertyWithOwnerRow> for PropertyWithOwner {
    type Error = StoreError;

    fn try_from(row: PropertyWithOwnerRow) -> Result<Self, Self::Error> {
        let property = Property::try_from(row.property)?;
        let owner = OwnerSummary {
            id: property.owner,
            name: row.owner_name,
            email: row.owner_email,
            avatar: row.owner_avatar,
        };
        Ok(property.with_owner(owner))
    }
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_user_by_id(&self, id: Uuid) -> Result<Option<UserRow>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role, notifications, privacy)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(Json(NotificationSettings::default()))
            .bind(Json(PrivacySettings::default()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, EMAIL_IN_USE))?;

        to_user(row)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.fetch_user_by_id(id).await?.map(to_user).transpose()
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        self.fetch_user_by_email(email)
            .await?
            .map(UserCredentials::try_from)
            .transpose()
    }

    async fn find_credentials(&self, id: Uuid) -> Result<Option<UserCredentials>, StoreError> {
        self.fetch_user_by_id(id)
            .await?
            .map(UserCredentials::try_from)
            .transpose()
    }

    #[instrument(skip(self, changes))]
    async fn update_profile(
        &self,
        id: Uuid,
        changes: UpdateProfileDto,
    ) -> Result<User, StoreError> {
        let sql = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                bio = COALESCE($5, bio),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(changes.name)
            .bind(changes.email)
            .bind(changes.phone)
            .bind(changes.bio)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::from_write(e, EMAIL_IN_USE))?
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))?;

        to_user(row)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(USER_NOT_FOUND));
        }
        Ok(())
    }

    #[instrument(skip(self, changes))]
    async fn update_settings(
        &self,
        id: Uuid,
        changes: UpdateSettingsDto,
    ) -> Result<User, StoreError> {
        let sql = format!(
            "UPDATE users SET
                notifications = COALESCE($2, notifications),
                privacy = COALESCE($3, privacy),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(changes.notifications.map(Json))
            .bind(changes.privacy.map(Json))
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))?;

        to_user(row)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id");
        sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(to_user)
            .collect()
    }
}

#[async_trait]
impl PropertyStore for PgStore {
    #[instrument(skip(self, details), fields(title = %details.title))]
    async fn create_property(
        &self,
        owner: Uuid,
        details: PropertyDetails,
    ) -> Result<Property, StoreError> {
        let sql = format!(
            "INSERT INTO properties AS p (title, description, location, price, original_price,
                images, beds, baths, parking, furnished, area, property_type, status, featured,
                owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {PROPERTY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(&details.title)
            .bind(&details.description)
            .bind(&details.location)
            .bind(details.price)
            .bind(details.original_price)
            .bind(&details.images)
            .bind(details.beds)
            .bind(details.baths)
            .bind(details.parking)
            .bind(details.furnished)
            .bind(details.area)
            .bind(details.property_type.as_str())
            .bind(details.status.as_str())
            .bind(details.featured)
            .bind(owner)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    return StoreError::NotFound(USER_NOT_FOUND);
                }
                StoreError::Backend(e)
            })?;

        Property::try_from(row)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<PropertyWithOwner>, StoreError> {
        let sql = format!(
            "SELECT {PROPERTY_COLUMNS},
                u.name AS owner_name, u.email AS owner_email, u.avatar AS owner_avatar
             FROM properties p
             JOIN users u ON u.id = p.owner_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PropertyWithOwnerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(PropertyWithOwner::try_from)
            .transpose()
    }

    async fn list_properties(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PropertyWithOwner>, i64), StoreError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM properties p JOIN users u ON u.id = p.owner_id",
        )
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            "SELECT {PROPERTY_COLUMNS},
                u.name AS owner_name, u.email AS owner_email, u.avatar AS owner_avatar
             FROM properties p
             JOIN users u ON u.id = p.owner_id
             ORDER BY p.created_at, p.id
             LIMIT $1 OFFSET $2"
        );
        let properties = sqlx::query_as::<_, PropertyWithOwnerRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(PropertyWithOwner::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((properties, total))
    }

    async fn list_properties_by_owner(&self, owner: Uuid) -> Result<Vec<Property>, StoreError> {
        let sql = format!(
            "SELECT {PROPERTY_COLUMNS}
             FROM properties p
             WHERE p.owner_id = $1
             ORDER BY p.created_at, p.id"
        );
        sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Property::try_from)
            .collect()
    }
}
