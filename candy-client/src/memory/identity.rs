use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::{AuthUser, ClientError, ClientResult, IdentityProvider, Session};

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

struct Account {
    user_id: String,
    password: String,
}

/// In-memory [`IdentityProvider`] with opaque random tokens
pub struct MemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    active: RwLock<HashSet<String>>,
    require_confirmation: bool,
    ttl: Duration,
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            active: RwLock::new(HashSet::new()),
            require_confirmation: false,
            ttl: Duration::hours(1),
        }
    }

    /// Sign-up returns no session until the account is confirmed
    pub fn with_confirmation(mut self) -> Self {
        self.require_confirmation = true;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Register an account directly, returning its user
    pub async fn register(&self, email: &str, password: &str) -> AuthUser {
        let email = normalize(email);
        let user_id = uuid::Uuid::new_v4().to_string();
        self.accounts.write().await.insert(
            email.clone(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
            },
        );
        AuthUser {
            id: user_id,
            email: Some(email),
        }
    }

    pub async fn is_active(&self, access_token: &str) -> bool {
        self.active.read().await.contains(access_token)
    }

    async fn issue(&self, user_id: &str, email: &str) -> Session {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.active.write().await.insert(token.clone());
        Session {
            access_token: token,
            refresh_token: Some(uuid::Uuid::new_v4().simple().to_string()),
            expires_at: Utc::now() + self.ttl,
            user: AuthUser {
                id: user_id.to_string(),
                email: Some(email.to_string()),
            },
        }
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let email = normalize(email);
        let user_id = {
            let accounts = self.accounts.read().await;
            match accounts.get(&email) {
                Some(account) if account.password == password => account.user_id.clone(),
                _ => return Err(ClientError::Auth(INVALID_CREDENTIALS.to_string())),
            }
        };
        Ok(self.issue(&user_id, &email).await)
    }

    async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>> {
        let email = normalize(email);
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::Auth("Signup requires a valid password".to_string()));
        }
        if self.accounts.read().await.contains_key(&email) {
            return Err(ClientError::Auth("User already registered".to_string()));
        }
        let user = self.register(&email, password).await;
        if self.require_confirmation {
            return Ok(None);
        }
        Ok(Some(self.issue(&user.id, &email).await))
    }

    async fn sign_out(&self, session: &Session) -> ClientResult<()> {
        self.active.write().await.remove(&session.access_token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_checks_password() {
        let identity = MemoryIdentity::new();
        identity.register("Admin@Candy.test", "secret").await;

        let session = identity.sign_in("admin@candy.test ", "secret").await.unwrap();
        assert_eq!(session.user.email.as_deref(), Some("admin@candy.test"));
        assert!(identity.is_active(&session.access_token).await);

        let err = identity.sign_in("admin@candy.test", "wrong").await.unwrap_err();
        assert!(matches!(err, ClientError::Auth(ref m) if m == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_sign_up_and_out() {
        let identity = MemoryIdentity::new();
        let session = identity.sign_up("new@candy.test", "pw").await.unwrap().unwrap();
        assert!(identity.sign_up("new@candy.test", "pw").await.is_err());
        identity.sign_out(&session).await.unwrap();
        assert!(!identity.is_active(&session.access_token).await);
    }

    #[tokio::test]
    async fn test_confirmation_required() {
        let identity = MemoryIdentity::new().with_confirmation();
        assert!(identity.sign_up("c@candy.test", "pw").await.unwrap().is_none());
        assert!(identity.sign_in("c@candy.test", "pw").await.is_ok());
    }
}
