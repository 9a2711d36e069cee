//! Property listings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rentwise_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::UnknownVariant;
use crate::users::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Office,
    Shop,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::House,
        PropertyType::Office,
        PropertyType::Shop,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
            PropertyType::Office => "Office",
            PropertyType::Shop => "Shop",
            PropertyType::Land => "Land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

/// Whether a listing is offered for rent or for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ListingStatus {
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "For Sale")]
    ForSale,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForRent => "For Rent",
            ListingStatus::ForSale => "For Sale",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Rent" => Ok(ListingStatus::ForRent),
            "For Sale" => Ok(ListingStatus::ForSale),
            other => Err(UnknownVariant {
                kind: "listing status",
                value: other.to_string(),
            }),
        }
    }
}

/// The client-supplied part of a listing. Used as the create request body
/// and flattened into the stored [`Property`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0.0, message = "Original price cannot be negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
    #[validate(range(min = 0, message = "Beds cannot be negative"))]
    pub beds: i32,
    #[validate(range(min = 0, message = "Baths cannot be negative"))]
    pub baths: i32,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub furnished: bool,
    #[validate(range(min = 0.0, message = "Area cannot be negative"))]
    pub area: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    #[serde(default)]
    pub featured: bool,
}

/// A stored listing. `owner` is the id of the user who created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: PropertyDetails,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn with_owner(self, owner: OwnerSummary) -> PropertyWithOwner {
        PropertyWithOwner {
            id: self.id,
            details: self.details,
            owner,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Public contact card of a listing's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A listing with its owner expanded, as served by the public endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithOwner {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: PropertyDetails,
    pub owner: OwnerSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertiesResponse {
    pub properties: Vec<PropertyWithOwner>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyResponse {
    pub property: PropertyWithOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyCreatedResponse {
    pub message: String,
    pub property: Property,
}

/// The caller's own listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingsResponse {
    pub properties: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details_json() -> serde_json::Value {
        json!({
            "title": "Sunny two-bed flat",
            "description": "Close to the river",
            "location": "Porto",
            "price": 1200.0,
            "images": ["https://img.example.com/1.jpg"],
            "beds": 2,
            "baths": 1,
            "area": 74.5,
            "type": "Apartment",
            "status": "For Rent"
        })
    }

    #[test]
    fn test_details_defaults_flags_to_false() {
        let details: PropertyDetails = serde_json::from_value(details_json()).unwrap();
        assert!(!details.parking);
        assert!(!details.furnished);
        assert!(!details.featured);
        assert_eq!(details.original_price, None);
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_details_require_an_image() {
        let mut value = details_json();
        value["images"] = json!([]);
        let details: PropertyDetails = serde_json::from_value(value).unwrap();
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut value = details_json();
        value["price"] = json!(-1.0);
        let details: PropertyDetails = serde_json::from_value(value).unwrap();
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_unknown_type_fails_to_deserialize() {
        let mut value = details_json();
        value["type"] = json!("Castle");
        assert!(serde_json::from_value::<PropertyDetails>(value).is_err());
    }

    #[test]
    fn test_property_serializes_flat() {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            details: serde_json::from_value(details_json()).unwrap(),
            owner: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["title"], "Sunny two-bed flat");
        assert_eq!(value["type"], "Apartment");
        assert_eq!(value["status"], "For Rent");
        assert!(value.get("details").is_none());
        assert!(value.get("originalPrice").is_none());
        assert!(value["owner"].is_string());
    }

    #[test]
    fn test_enum_strings_round_trip_through_from_str() {
        for kind in PropertyType::ALL {
            assert_eq!(kind.as_str().parse::<PropertyType>().unwrap(), kind);
        }
        assert_eq!(
            "For Sale".parse::<ListingStatus>().unwrap(),
            ListingStatus::ForSale
        );
        assert!("for sale".parse::<ListingStatus>().is_err());
    }
}
