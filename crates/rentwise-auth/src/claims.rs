//! The signed credential payload.
//!
//! Wire shape: `{ "userId", "email", "role", "iat", "exp" }` with the two
//! timestamps in Unix seconds.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Opaque subject identifier
    pub user_id: String,
    pub email: String,
    pub role: Role,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiry (Unix timestamp)
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let claims = Claims {
            user_id: "665f0c".to_string(),
            email: "owner@example.com".to_string(),
            role: Role::Owner,
            iat: 1_700_000_000,
            exp: 1_700_604_800,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], "665f0c");
        assert_eq!(json["role"], "owner");
        assert_eq!(json["exp"], 1_700_604_800u64);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_unknown_role_fails_to_decode() {
        let json = r#"{"userId":"1","email":"a@b.c","role":"landlord","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
