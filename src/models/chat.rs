// ABOUTME: AI chat wire types for conversations with the health assistant
// ABOUTME: Sending without a conversation id starts a new conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! AI assistant chat types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The human
    User,
    /// The AI assistant
    Assistant,
}

/// One message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier of the message
    pub id: Uuid,
    /// Conversation the message belongs to
    pub conversation_id: Uuid,
    /// Message author
    pub role: ChatRole,
    /// Message text
    pub content: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

/// A conversation with the assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier of the conversation
    pub id: Uuid,
    /// Short AI-generated title, absent until the first exchange completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When the conversation last received a message
    pub updated_at: DateTime<Utc>,
}

/// Request to send a message to the assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSendRequest {
    /// Conversation to continue; a new one is created when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,
    /// Message text
    pub message: String,
}

impl ChatSendRequest {
    /// Start a new conversation with a first message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            conversation_id: None,
            message: message.into(),
        }
    }

    /// Continue an existing conversation
    #[must_use]
    pub fn in_conversation(mut self, conversation_id: Uuid) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the message is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.message.trim().is_empty() {
            return Err(ApiError::invalid_input("Chat message cannot be empty"));
        }
        Ok(())
    }
}
