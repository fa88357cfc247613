use std::collections::HashMap;
use std::sync::Mutex;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use standard_error::{StandardError, Status};
use uuid::Uuid;

use crate::prelude::Result;

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, submitted: &str) -> bool;
}

// Stand-in for server-verified credentials: plain equality against one
// shared secret. Swap the implementation, keep the trait.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        SharedSecretVerifier {
            secret: secret.into(),
        }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, submitted: &str) -> bool {
        self.secret == submitted
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub expiry: DateTime<Utc>,
}

// Sessions live in memory only; a restart drops them all, which is the
// intended lifetime for admin access.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        SessionStore {
            ttl: Duration::minutes(ttl_minutes),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn issue(&self) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            expiry: Utc::now() + self.ttl,
        };
        self.sessions
            .lock()
            .expect("session store poisoned")
            .insert(session.token, session.expiry);
        session
    }

    pub fn validate(&self, token: &str) -> Result<Session> {
        let token = token
            .parse::<Uuid>()
            .map_err(|_| StandardError::new("ERR-AUTH-002").code(StatusCode::UNAUTHORIZED))?;
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        match sessions.get(&token) {
            Some(expiry) if *expiry > Utc::now() => Ok(Session {
                token,
                expiry: *expiry,
            }),
            Some(_) => {
                sessions.remove(&token);
                tracing::debug!("pruned expired session");
                Err(StandardError::new("ERR-AUTH-003").code(StatusCode::UNAUTHORIZED))
            }
            None => Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED)),
        }
    }

    pub fn revoke(&self, token: &str) {
        if let Ok(token) = token.parse::<Uuid>() {
            self.sessions
                .lock()
                .expect("session store poisoned")
                .remove(&token);
        }
    }
}
