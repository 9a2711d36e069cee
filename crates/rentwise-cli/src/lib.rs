//! Administrative operations behind the `rentwise-cli` binary.
//!
//! Admin accounts cannot be created through the public registration
//! endpoint, so this is the only way to bootstrap one.

use anyhow::{Context, anyhow};
use rentwise_auth::{Role, TokenKeys};
use rentwise_core::hash_password;
use rentwise_db::UserStore;
use rentwise_models::{NewUser, RegisterRequest, User};
use validator::Validate;

/// Validates the input like a registration request and inserts an `admin`.
pub async fn create_admin(
    store: &dyn UserStore,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Some(Role::Admin),
    };
    request.validate().context("Invalid admin details")?;

    let password_hash = hash_password(&request.password).map_err(|e| anyhow!("{e}"))?;

    let user = store
        .create_user(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            role: Role::Admin,
        })
        .await?;

    Ok(user)
}

/// Signs a credential for manual testing against a running server.
pub fn issue_token(
    keys: &TokenKeys,
    user_id: &str,
    email: &str,
    role: Role,
) -> anyhow::Result<String> {
    keys.issue(user_id, email, role)
        .map_err(|e| anyhow!("Failed to sign token: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentwise_config::JwtConfig;
    use rentwise_db::MemoryStore;

    #[tokio::test]
    async fn test_create_admin_inserts_admin() {
        let store = MemoryStore::new();
        let user = create_admin(&store, "Root", "root@example.com", "supersecret")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Admin);

        let creds = store
            .find_credentials_by_email("root@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(rentwise_core::verify_password("supersecret", &creds.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_admin_rejects_short_password() {
        let store = MemoryStore::new();
        let result = create_admin(&store, "Root", "root@example.com", "short").await;
        assert!(result.is_err());
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_admin_duplicate_email() {
        let store = MemoryStore::new();
        create_admin(&store, "Root", "root@example.com", "supersecret")
            .await
            .unwrap();
        let result = create_admin(&store, "Root 2", "root@example.com", "supersecret").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_issue_token_verifies() {
        let keys = TokenKeys::new(&JwtConfig::new("cli-test-secret"));
        let token = issue_token(&keys, "user-1", "a@example.com", Role::Broker).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.role, Role::Broker);
    }
}
