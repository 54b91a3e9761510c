// ABOUTME: Typed endpoint groups, one per product area, all borrowing the ApiClient
// ABOUTME: Wrappers own path construction and envelope unwrapping, nothing else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Typed endpoint surface
//!
//! Each product area gets a small accessor struct borrowing the
//! [`ApiClient`]: `client.auth().login(...)`, `client.weight().history(...)`,
//! and so on. The wrappers add nothing beyond path construction, request
//! validation, typed (de)serialization, and envelope unwrapping; transport
//! behavior (auth header, timeout, cancellation, error mapping) all lives in
//! the client itself.

pub mod auth;
pub mod chat;
pub mod diet;
pub mod exercise;
pub mod labs;
pub mod plans;
pub mod profile;
pub mod weight;

pub use auth::AuthApi;
pub use chat::ChatApi;
pub use diet::DietApi;
pub use exercise::ExerciseApi;
pub use labs::LabsApi;
pub use plans::PlansApi;
pub use profile::ProfileApi;
pub use weight::WeightApi;

use crate::client::ApiClient;

impl ApiClient {
    /// Account and session endpoints
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Profile endpoints
    #[must_use]
    pub const fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }

    /// Weight tracking endpoints
    #[must_use]
    pub const fn weight(&self) -> WeightApi<'_> {
        WeightApi::new(self)
    }

    /// Diet tracking and food search endpoints
    #[must_use]
    pub const fn diet(&self) -> DietApi<'_> {
        DietApi::new(self)
    }

    /// Exercise tracking endpoints
    #[must_use]
    pub const fn exercise(&self) -> ExerciseApi<'_> {
        ExerciseApi::new(self)
    }

    /// Lab report endpoints
    #[must_use]
    pub const fn labs(&self) -> LabsApi<'_> {
        LabsApi::new(self)
    }

    /// AI plan endpoints
    #[must_use]
    pub const fn plans(&self) -> PlansApi<'_> {
        PlansApi::new(self)
    }

    /// AI assistant chat endpoints
    #[must_use]
    pub const fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }
}
