//! Authentication and user account types.

use serde::{Deserialize, Serialize};

/// A backend user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role identifier controlling backend permissions.
    pub role_id: i64,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext password; sent form-encoded over the transport.
    pub password: String,
}

/// Bearer token issued on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The opaque access token.
    pub access_token: String,
    /// Token scheme, always "bearer" from the current backend.
    pub token_type: String,
}
