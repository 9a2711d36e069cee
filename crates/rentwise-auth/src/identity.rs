use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::claims::Claims;
use crate::role::Role;

/// Who is making the current request.
///
/// Built by the gate from a verified credential and stored in that
/// request's extensions. It is never mutated and never outlives the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestIdentity {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}
