//! Authentication endpoints.
//!
//! The login endpoint takes form-encoded credentials and returns a bearer
//! token, which the client stores in the shared [`Session`](super::Session)
//! so every subsequent request carries it.

use reqwest::Method;

use crate::errors::ApiError;
use crate::models::{Token, User};

use super::rest::RestClient;

impl RestClient {
    /// Logs in and stores the returned token in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let req = self
            .request(Method::POST, "/auth/login")
            .form(&[("username", username), ("password", password)]);
        let token: Token = self.send(req).await?;
        self.session().set_token(&token.access_token);
        tracing::info!(%username, "logged in");
        Ok(token)
    }

    /// Fetches the currently authenticated user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        if !self.session().is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }
        self.send(self.request(Method::GET, "/auth/me")).await
    }

    /// Logs out on the backend and clears the stored token.
    ///
    /// The local token is cleared even when the backend call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.send_empty(self.request(Method::POST, "/auth/logout")).await;
        self.session().clear();
        result
    }

    /// Whether a token is currently stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
