use rentwise_auth::{RequestIdentity, Role, TOKEN_COOKIE};
use rentwise_core::{ErrorBody, PaginationMeta, PaginationParams};
use rentwise_models::{
    AuthResponse, ChangePasswordDto, EmailNotifications, ListingStatus, ListingsResponse,
    LoginRequest, MessageResponse, NotificationSettings, OwnerSummary, PrivacySettings,
    ProfileVisibility, PropertiesResponse, Property, PropertyCreatedResponse, PropertyDetails,
    PropertyResponse, PropertyType, PropertyWithOwner, PushNotifications, RegisterRequest,
    UpdateProfileDto, UpdateSettingsDto, User, UserResponse, UserUpdatedResponse, UsersResponse,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::update_settings,
        crate::modules::properties::controller::list_properties,
        crate::modules::properties::controller::get_property,
        crate::modules::properties::controller::create_property,
        crate::modules::properties::controller::my_listings,
        crate::modules::admin::controller::list_users,
    ),
    components(
        schemas(
            ErrorBody,
            Role,
            RequestIdentity,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            MessageResponse,
            User,
            UserResponse,
            UserUpdatedResponse,
            UsersResponse,
            UpdateProfileDto,
            ChangePasswordDto,
            UpdateSettingsDto,
            NotificationSettings,
            EmailNotifications,
            PushNotifications,
            PrivacySettings,
            ProfileVisibility,
            PropertyType,
            ListingStatus,
            PropertyDetails,
            Property,
            PropertyWithOwner,
            OwnerSummary,
            PropertiesResponse,
            PropertyResponse,
            PropertyCreatedResponse,
            ListingsResponse,
            PaginationParams,
            PaginationMeta,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and session endpoints"),
        (name = "User", description = "The caller's profile, password and settings"),
        (name = "Properties", description = "Rental and sale listings"),
        (name = "Admin", description = "Administrative endpoints")
    ),
    info(
        title = "Rentwise API",
        version = "0.1.0",
        description = "Property rental marketplace API. Credentials are read from the `token` cookie or an `Authorization: Bearer` header.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(TOKEN_COOKIE))),
            );
        }
    }
}
