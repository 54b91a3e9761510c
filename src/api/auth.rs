// ABOUTME: Account endpoints: login, registration, logout, profile of the session user
// ABOUTME: Login and registration write the returned bearer token into the credential store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Account and session endpoints

use tracing::debug;
use url::form_urlencoded;

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::user::{
    EmailExistsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UserProfile,
};

/// Account and session endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in with email and password
    ///
    /// Posts the OAuth2 password-grant form (`username=<email>&password=...`)
    /// and stores the returned bearer token, so subsequent calls through the
    /// same credential store are authenticated.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 401 on bad
    /// credentials, and [`crate::errors::ApiError::Storage`] when the token
    /// cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let form = LoginRequest::new(email, password);
        let response: LoginResponse = self
            .client
            .post_form(routes::AUTH_LOGIN, &form)
            .await?;

        self.client.credentials().store(&response.token).await?;
        debug!("login succeeded, token stored");

        Ok(response)
    }

    /// Register a new account
    ///
    /// Posts JSON (email, password, optional gender). When the backend logs
    /// the new account straight in, the returned token is stored exactly as
    /// [`Self::login`] would store it.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] when the request
    /// fails client-side validation, before anything is sent.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        request.validate()?;

        let response: RegisterResponse = self
            .client
            .post(routes::AUTH_REGISTER, request)
            .await?;

        if let Some(token) = &response.token {
            self.client.credentials().store(token).await?;
            debug!("registration returned a session token, stored");
        }

        Ok(response)
    }

    /// Log out by destroying the stored credential
    ///
    /// Purely local: the backend keeps no session state beyond the token.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Storage`] when the store cannot be
    /// cleared.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client.credentials().clear().await?;
        debug!("credentials cleared");
        Ok(())
    }

    /// Profile of the authenticated user
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 401 when no
    /// valid token is stored.
    pub async fn current_user(&self) -> ApiResult<UserProfile> {
        self.client.get(routes::AUTH_ME).await
    }

    /// Whether an account with this email already exists
    ///
    /// Failures propagate; deciding that an unreachable backend means "not
    /// registered" is a screen-level call, not one the SDK makes.
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn email_exists(&self, email: &str) -> ApiResult<bool> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email)
            .finish();
        let path = format!("{}?{query}", routes::AUTH_EMAIL_EXISTS);

        let response: EmailExistsResponse = self.client.get(&path).await?;
        Ok(response.exists)
    }
}
