//! Form bodies posted by the integration tests

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT: AtomicU64 = AtomicU64::new(0);

/// Unique-enough suffix for account names.
///
/// Mixes the clock with a process counter so reruns against a persistent
/// database do not collide with accounts left over from earlier runs.
pub fn unique_suffix() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |t| t.as_millis() as u64);
    let count = NEXT.fetch_add(1, Ordering::Relaxed);
    (millis << 10) | (count & 0x3ff)
}

/// Body for POST /register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("author{suffix}"),
            email: format!("author{suffix}@test.example"),
            password: "sturdy-pass-9!".to_string(),
        }
    }
}

/// Body for POST /login. The credential field takes either half of the
/// account, which is exactly what the two constructors exercise.
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub credential: String,
    pub password: String,
}

impl LoginForm {
    pub fn with_username(account: &RegisterForm) -> Self {
        Self {
            credential: account.username.clone(),
            password: account.password.clone(),
        }
    }

    pub fn with_email(account: &RegisterForm) -> Self {
        Self {
            credential: account.email.clone(),
            password: account.password.clone(),
        }
    }
}

/// Body for the post composer and editor forms
#[derive(Debug, Serialize)]
pub struct PostForm {
    pub content: String,
}

impl PostForm {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Content no other test will have written, so the feed can be
    /// searched for it.
    pub fn unique() -> Self {
        Self::new(&format!("integration post {}", unique_suffix()))
    }
}

/// JSON payload returned by the delete endpoint
#[derive(Debug, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}
