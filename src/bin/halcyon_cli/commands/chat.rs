// ABOUTME: AI assistant chat commands for halcyon-cli
// ABOUTME: Sending without --conversation starts a new conversation and prints its id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

use anyhow::{Context, Result};
use uuid::Uuid;

use halcyon_client::client::ApiClient;
use halcyon_client::models::chat::{ChatRole, ChatSendRequest};

/// Send a message and print the assistant reply
pub async fn send(client: &ApiClient, message: &str, conversation: Option<Uuid>) -> Result<()> {
    let mut request = ChatSendRequest::new(message);
    if let Some(id) = conversation {
        request = request.in_conversation(id);
    }

    let reply = client
        .chat()
        .send(&request)
        .await
        .context("the assistant did not answer")?;

    println!("{}", reply.content);
    if conversation.is_none() {
        println!("\n(conversation {})", reply.conversation_id);
    }
    Ok(())
}

/// List conversations, most recently active first
pub async fn conversations(client: &ApiClient) -> Result<()> {
    let conversations = client
        .chat()
        .conversations()
        .await
        .context("failed to fetch conversations")?;

    if conversations.is_empty() {
        println!("No conversations yet");
        return Ok(());
    }
    for conversation in conversations {
        let title = conversation.title.as_deref().unwrap_or("(untitled)");
        println!("{}  {}  {}", conversation.updated_at, title, conversation.id);
    }
    Ok(())
}

/// Print a conversation transcript
pub async fn history(client: &ApiClient, id: Uuid) -> Result<()> {
    let messages = client
        .chat()
        .history(id)
        .await
        .context("failed to fetch the conversation")?;

    for message in messages {
        let who = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "halcyon",
        };
        println!("[{who}] {}", message.content);
    }
    Ok(())
}
