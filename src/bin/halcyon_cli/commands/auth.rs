// ABOUTME: Session commands for halcyon-cli: login, register, logout, whoami
// ABOUTME: Screen-level conveniences like the pre-registration email check live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

use anyhow::{bail, Context, Result};
use tracing::warn;

use halcyon_client::client::ApiClient;
use halcyon_client::models::user::{Gender, RegisterRequest};

/// Log in and persist the session token
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let response = client
        .auth()
        .login(email, password)
        .await
        .context("login failed")?;

    match response.user {
        Some(user) => println!("Logged in as {}", user.email),
        None => println!("Logged in as {email}"),
    }

    Ok(())
}

/// Create an account, logging in immediately when the backend allows it
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
    gender: Option<Gender>,
) -> Result<()> {
    // A failed existence check counts as unregistered; the register call
    // itself still rejects duplicates with a proper error.
    let already_registered = client.auth().email_exists(email).await.unwrap_or_else(|e| {
        warn!("email check failed: {e}");
        false
    });
    if already_registered {
        bail!("an account with {email} already exists; use `halcyon-cli login`");
    }

    let mut request = RegisterRequest::new(email, password);
    if let Some(gender) = gender {
        request = request.with_gender(gender);
    }

    let response = client
        .auth()
        .register(&request)
        .await
        .context("registration failed")?;

    if let Some(message) = response.message {
        println!("{message}");
    }
    if response.token.is_some() {
        println!("Registered and logged in as {email}");
    } else {
        println!("Registered {email}; run `halcyon-cli login` to start a session");
    }

    Ok(())
}

/// Destroy the stored session token
pub async fn logout(client: &ApiClient) -> Result<()> {
    client.auth().logout().await.context("logout failed")?;
    println!("Logged out");
    Ok(())
}

/// Show the profile of the logged-in user
pub async fn whoami(client: &ApiClient) -> Result<()> {
    let profile = client
        .auth()
        .current_user()
        .await
        .context("not logged in or the session expired")?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
