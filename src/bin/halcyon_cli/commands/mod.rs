// ABOUTME: Command implementations for halcyon-cli, grouped by product area
// ABOUTME: Each function takes the shared ApiClient and already-parsed arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

pub mod auth;
pub mod chat;
pub mod labs;
pub mod plans;
pub mod tracking;
