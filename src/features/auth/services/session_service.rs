use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::SessionTokenDto;
use crate::shared::constants::INVALID_CREDENTIALS_MESSAGE;

/// Process-wide holder of admin sessions
///
/// Built once at startup and shared by the auth routes and the dashboard
/// session middleware. Credentials are the configured demo pair; this is
/// a stand-in, not a security boundary.
pub struct SessionService {
    config: AdminConfig,
    /// token -> issued at
    sessions: RwLock<HashMap<String, Instant>>,
}

impl SessionService {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Check credentials and open a session on match
    ///
    /// Every attempt waits for the configured login delay first. A mismatch
    /// writes nothing.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionTokenDto> {
        if !self.config.login_delay.is_zero() {
            tokio::time::sleep(self.config.login_delay).await;
        }

        if username != self.config.username || password != self.config.password {
            tracing::warn!("Admin login failed for username: {}", username);
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ));
        }

        let token = Uuid::new_v4().simple().to_string();
        {
            let mut sessions = self.sessions.write().await;
            self.prune_expired(&mut sessions);
            sessions.insert(token.clone(), Instant::now());
        }

        tracing::info!("Admin login succeeded for username: {}", username);

        Ok(SessionTokenDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.session_ttl.as_secs() as i64,
        })
    }

    /// End a session; returns false when the token was not active
    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            tracing::info!("Admin session closed");
        }
        removed
    }

    /// True when the token belongs to a live, unexpired session
    pub async fn is_authenticated(&self, token: &str) -> bool {
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .map(|issued_at| self.is_live(issued_at))
            .unwrap_or(false)
    }

    /// Number of live sessions
    #[cfg(test)]
    pub async fn active_sessions(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.values().filter(|t| self.is_live(t)).count()
    }

    fn is_live(&self, issued_at: &Instant) -> bool {
        issued_at.elapsed() < self.config.session_ttl
    }

    fn prune_expired(&self, sessions: &mut HashMap<String, Instant>) {
        sessions.retain(|_, issued_at| self.is_live(issued_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service_with(ttl: Duration, delay: Duration) -> SessionService {
        SessionService::new(AdminConfig {
            session_ttl: ttl,
            login_delay: delay,
            ..AdminConfig::default()
        })
    }

    fn service() -> SessionService {
        service_with(Duration::from_secs(3600), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_accepts_exact_pair_only() {
        let service = service();

        let session = service.login("admin", "password123").await.unwrap();
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.expires_in, 3600);
        assert!(service.is_authenticated(&session.token).await);

        for (user, pass) in [
            ("admin", "password"),
            ("Admin", "password123"),
            ("admin ", "password123"),
            ("", ""),
            ("root", "password123"),
        ] {
            let err = service.login(user, pass).await.unwrap_err();
            match err {
                AppError::Unauthorized(msg) => assert_eq!(msg, INVALID_CREDENTIALS_MESSAGE),
                other => panic!("unexpected error: {:?}", other),
            }
        }
        assert_eq!(service.active_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_failed_login_writes_nothing() {
        let service = service();
        assert!(service.login("admin", "wrong").await.is_err());
        assert_eq!(service.active_sessions().await, 0);
    }

    #[tokio::test]
    async fn test_logout_ends_session() {
        let service = service();
        let session = service.login("admin", "password123").await.unwrap();

        assert!(service.logout(&session.token).await);
        assert!(!service.is_authenticated(&session.token).await);
        assert!(!service.logout(&session.token).await);
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_authenticated() {
        let service = service();
        assert!(!service.is_authenticated("true").await);
        assert!(!service.is_authenticated("").await);
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected() {
        let service = service_with(Duration::ZERO, Duration::ZERO);
        let session = service.login("admin", "password123").await.unwrap();
        assert!(!service.is_authenticated(&session.token).await);
        assert_eq!(service.active_sessions().await, 0);
    }

    #[tokio::test]
    async fn test_login_waits_for_delay() {
        let service = service_with(Duration::from_secs(60), Duration::from_millis(50));
        let started = Instant::now();
        service.login("admin", "nope").await.unwrap_err();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_custom_credentials() {
        let service = SessionService::new(AdminConfig {
            username: "officer".to_string(),
            password: "s3cret".to_string(),
            login_delay: Duration::ZERO,
            ..AdminConfig::default()
        });
        assert!(service.login("admin", "password123").await.is_err());
        assert!(service.login("officer", "s3cret").await.is_ok());
    }
}
