//! Session container
//!
//! [`SessionStore`] is the injected replacement for an ambient auth
//! context: it holds the current session and a loading flag, delegates
//! sign-in/up/out to the [`IdentityProvider`] and keeps the remote
//! store's access token in step with the session.

mod cache;

pub use cache::{SessionCache, SessionCacheError};

use std::sync::Arc;

use candy_client::{IdentityProvider, RemoteStore, Session};
use chrono::Utc;
use shared::AppError;
use tokio::sync::RwLock;

use crate::error::AdminResult;

/// Point-in-time view of the session state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub is_loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.user.email.as_deref())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading until restore() has run
        Self {
            session: None,
            is_loading: true,
        }
    }
}

struct Inner {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn RemoteStore>,
    cache: Option<SessionCache>,
    state: RwLock<SessionState>,
}

/// Cloneable handle to the process-wide session
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RemoteStore>,
        cache: Option<SessionCache>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                identity,
                store,
                cache,
                state: RwLock::new(SessionState::default()),
            }),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.state.read().await.clone()
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.inner
            .state
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.user.id.clone())
    }

    /// Current user id or a not-authenticated error
    pub async fn require_user_id(&self) -> AdminResult<String> {
        self.current_user_id()
            .await
            .ok_or_else(|| AppError::not_authenticated().into())
    }

    /// Restore the cached session at startup
    ///
    /// Expired or unreadable cache entries are discarded.
    pub async fn restore(&self) -> Option<Session> {
        self.inner.state.write().await.is_loading = true;

        let restored = match &self.inner.cache {
            Some(cache) => match cache.load() {
                Ok(Some(session)) if !session.is_expired(Utc::now()) => Some(session),
                Ok(Some(_)) => {
                    tracing::info!("Cached session expired");
                    self.discard_cache();
                    None
                }
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read session cache");
                    self.discard_cache();
                    None
                }
            },
            None => None,
        };

        if let Some(session) = &restored {
            self.inner
                .store
                .set_access_token(Some(session.access_token.clone()))
                .await;
            tracing::info!(user_id = %session.user.id, "Session restored");
        }

        let mut state = self.inner.state.write().await;
        state.session = restored.clone();
        state.is_loading = false;
        restored
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AdminResult<Session> {
        let session = match self.inner.identity.sign_in(email, password).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Sign in failed");
                return Err(e.into());
            }
        };
        self.adopt(session.clone()).await;
        Ok(session)
    }

    /// Register a new account
    ///
    /// The returned session is not adopted: the user signs in explicitly
    /// afterwards.
    pub async fn sign_up(&self, email: &str, password: &str) -> AdminResult<Option<Session>> {
        match self.inner.identity.sign_up(email, password).await {
            Ok(session) => {
                tracing::info!(email = %email, "Account registered");
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Sign up failed");
                Err(e.into())
            }
        }
    }

    /// Sign out; local state is cleared even if the remote call fails
    pub async fn sign_out(&self) -> AdminResult<()> {
        let session = self.inner.state.write().await.session.take();
        self.inner.store.set_access_token(None).await;
        self.discard_cache();

        if let Some(session) = session
            && let Err(e) = self.inner.identity.sign_out(&session).await
        {
            tracing::warn!(error = %e, "Remote sign out failed");
        }
        tracing::info!("Signed out");
        Ok(())
    }

    async fn adopt(&self, session: Session) {
        self.inner
            .store
            .set_access_token(Some(session.access_token.clone()))
            .await;
        if let Some(cache) = &self.inner.cache
            && let Err(e) = cache.save(&session)
        {
            tracing::warn!(error = %e, "Failed to persist session");
        }
        let mut state = self.inner.state.write().await;
        state.session = Some(session);
        state.is_loading = false;
    }

    fn discard_cache(&self) {
        if let Some(cache) = &self.inner.cache
            && let Err(e) = cache.clear()
        {
            tracing::warn!(error = %e, "Failed to clear session cache");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_client::{MemoryIdentity, MemoryStore};
    use chrono::Duration;

    async fn fixture(cache: Option<SessionCache>) -> (SessionStore, Arc<MemoryStore>, Arc<MemoryIdentity>) {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(MemoryIdentity::new());
        identity.register("admin@example.com", "candy123").await;
        let sessions = SessionStore::new(identity.clone(), store.clone(), cache);
        (sessions, store, identity)
    }

    #[tokio::test]
    async fn test_starts_loading_until_restored() {
        let (sessions, _, _) = fixture(None).await;
        assert!(sessions.snapshot().await.is_loading);
        assert!(sessions.restore().await.is_none());
        let state = sessions.snapshot().await;
        assert!(!state.is_loading);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_pushes_token_to_store() {
        let (sessions, store, identity) = fixture(None).await;
        let session = sessions.sign_in("admin@example.com", "candy123").await.unwrap();
        assert_eq!(store.access_token().await.as_deref(), Some(session.access_token.as_str()));
        assert!(identity.is_active(&session.access_token).await);
        assert_eq!(sessions.current_user_id().await, Some(session.user.id.clone()));

        sessions.sign_out().await.unwrap();
        assert!(store.access_token().await.is_none());
        assert!(!identity.is_active(&session.access_token).await);
        assert!(sessions.current_user_id().await.is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_state_untouched() {
        let (sessions, store, _) = fixture(None).await;
        sessions.restore().await;
        let err = sessions.sign_in("admin@example.com", "nope").await.unwrap_err();
        assert!(err.is_auth());
        assert!(!sessions.snapshot().await.is_authenticated());
        assert!(store.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_sign_up_does_not_adopt_session() {
        let (sessions, _, _) = fixture(None).await;
        let session = sessions.sign_up("new@example.com", "secret1").await.unwrap();
        assert!(session.is_some());
        assert!(sessions.current_user_id().await.is_none());
    }

    #[tokio::test]
    async fn test_restore_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, _, _) = fixture(Some(SessionCache::new(dir.path()))).await;
        let session = sessions.sign_in("admin@example.com", "candy123").await.unwrap();

        let (restarted, store, _) = fixture(Some(SessionCache::new(dir.path()))).await;
        let restored = restarted.restore().await.unwrap();
        assert_eq!(restored.access_token, session.access_token);
        assert_eq!(store.access_token().await, Some(session.access_token));
    }

    #[tokio::test]
    async fn test_expired_cache_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());
        let (sessions, _, _) = fixture(Some(cache.clone())).await;
        let mut session = sessions.sign_in("admin@example.com", "candy123").await.unwrap();
        session.expires_at = Utc::now() - Duration::minutes(1);
        cache.save(&session).unwrap();

        let (restarted, _, _) = fixture(Some(cache.clone())).await;
        assert!(restarted.restore().await.is_none());
        assert!(cache.load().unwrap().is_none());
    }
}
