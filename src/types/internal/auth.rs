use serde::{Deserialize, Serialize};

/// JWT Claims structure
///
/// Tokens are issued elsewhere (the marketplace's auth service); this
/// backend only validates them and reads the subject and role.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,

    /// Caller role, "admin" unlocks the operator console
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Whether the bearer may use admin-only operator endpoints
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Numeric user id from the subject claim, if it parses
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
