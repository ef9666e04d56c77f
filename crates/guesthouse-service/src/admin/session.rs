//! In-process session table for the admin dashboard.
//!
//! The dashboard password buys a random token with a TTL. Sessions live
//! only in this process; a restart simply logs every admin out.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::RngExt;
use rand::distr::Alphanumeric;

use guesthouse_core::error::AppError;
use guesthouse_core::result::AppResult;

const TOKEN_LENGTH: usize = 48;

/// Issued session tokens and their creation times.
#[derive(Debug)]
pub struct AdminSessionStore {
    /// Token → issue time.
    sessions: DashMap<String, DateTime<Utc>>,
    /// Session lifetime.
    ttl: Duration,
}

impl AdminSessionStore {
    /// Create a session store with the given TTL.
    pub fn new(ttl_minutes: u64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::minutes(ttl_minutes as i64),
        }
    }

    /// Issue a fresh session token.
    pub fn issue(&self) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        self.sessions.insert(token.clone(), Utc::now());
        token
    }

    /// Validate a presented token.
    pub fn validate(&self, token: &str) -> AppResult<()> {
        let Some(issued_at) = self.sessions.get(token).map(|e| *e.value()) else {
            return Err(AppError::authentication("Invalid session token"));
        };

        if issued_at + self.ttl < Utc::now() {
            self.sessions.remove(token);
            return Err(AppError::authentication("Session expired"));
        }

        Ok(())
    }

    /// Drop a session (logout).
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}
