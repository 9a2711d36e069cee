//! # Rentwise Models
//!
//! Records and request/response DTOs shared by the stores and the HTTP layer.
//!
//! - [`auth`]: registration, login and session responses
//! - [`users`]: user accounts, notification and privacy settings
//! - [`properties`]: rental/sale listings and their owner summaries
//!
//! JSON uses camelCase field names to match the browser client.

pub mod auth;
pub mod properties;
pub mod users;

pub use auth::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
pub use properties::{
    ListingStatus, ListingsResponse, OwnerSummary, PropertiesResponse, Property,
    PropertyCreatedResponse, PropertyDetails, PropertyResponse, PropertyType, PropertyWithOwner,
};
pub use users::{
    ChangePasswordDto, EmailNotifications, NewUser, NotificationSettings, PrivacySettings,
    ProfileVisibility, PushNotifications, UpdateProfileDto, UpdateSettingsDto, User,
    UserCredentials, UserResponse, UserUpdatedResponse, UsersResponse,
};

/// A stored enum column held a value outside its variant set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
