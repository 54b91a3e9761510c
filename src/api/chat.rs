// ABOUTME: AI chat endpoints: send a message, read history, list conversations
// ABOUTME: The assistant reply comes back enveloped with the conversation id inside
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! AI assistant chat endpoints

use uuid::Uuid;

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::chat::{ChatMessage, ChatSendRequest, Conversation};
use crate::models::Envelope;

/// AI assistant chat endpoints
#[derive(Debug, Clone, Copy)]
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Send a message and receive the assistant reply
    ///
    /// Omitting the conversation id starts a new conversation; its id is on
    /// the returned message.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] for an empty
    /// message, before anything is sent.
    pub async fn send(&self, request: &ChatSendRequest) -> ApiResult<ChatMessage> {
        request.validate()?;

        let envelope: Envelope<ChatMessage> =
            self.client.post(routes::CHAT_MESSAGES, request).await?;
        envelope.into_result()
    }

    /// Messages of a conversation, oldest first
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// conversation does not exist.
    pub async fn history(&self, conversation_id: Uuid) -> ApiResult<Vec<ChatMessage>> {
        let path = format!("{}/{conversation_id}/messages", routes::CHAT_CONVERSATIONS);
        let envelope: Envelope<Vec<ChatMessage>> = self.client.get(&path).await?;
        envelope.into_result()
    }

    /// Conversations of the user, most recently active first
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn conversations(&self) -> ApiResult<Vec<Conversation>> {
        let envelope: Envelope<Vec<Conversation>> =
            self.client.get(routes::CHAT_CONVERSATIONS).await?;
        envelope.into_result()
    }
}
