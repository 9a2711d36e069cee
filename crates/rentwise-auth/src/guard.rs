//! Role allow-lists applied after the gate.

use std::sync::Arc;

use crate::error::AuthError;
use crate::identity::RequestIdentity;
use crate::role::Role;

/// An allow-list of roles. Cheap to clone; one guard can protect any
/// number of routes.
///
/// An empty allow-list admits nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: Arc<[Role]>,
}

impl RoleGuard {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    pub fn check(&self, identity: Option<&RequestIdentity>) -> Result<(), AuthError> {
        let identity = identity.ok_or(AuthError::Unauthenticated)?;

        if !self.permits(identity.role) {
            return Err(AuthError::Forbidden);
        }

        Ok(())
    }
}

/// Shorthand for [`RoleGuard::new`].
pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> RoleGuard {
    RoleGuard::new(roles)
}
