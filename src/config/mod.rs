// ABOUTME: Client configuration module
// ABOUTME: Re-exports the environment-driven ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Client configuration
//!
//! ## Module Structure
//! - `environment` - `ClientConfig` and its environment/host resolution

pub mod environment;

pub use environment::ClientConfig;
