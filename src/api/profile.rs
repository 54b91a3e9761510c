// ABOUTME: Profile endpoints: read and partially update the user profile
// ABOUTME: Updates send only the fields being changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Profile endpoints

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::user::{UpdateProfileRequest, UserProfile};

/// Profile endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the user profile
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn get(&self) -> ApiResult<UserProfile> {
        self.client.get(routes::PROFILE).await
    }

    /// Update profile fields; absent fields are left unchanged
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn update(&self, request: &UpdateProfileRequest) -> ApiResult<UserProfile> {
        self.client.put(routes::PROFILE, request).await
    }
}
