//! Conversation state for one chat

use crate::bridge::{ChatMessage, ChatProvider, Role};
use anyhow::Result;

/// A provider plus the running history, seeded with a system prompt.
pub struct ChatSession {
    provider: Box<dyn ChatProvider>,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(provider: Box<dyn ChatProvider>, system_prompt: impl Into<String>) -> Self {
        Self {
            provider,
            history: vec![ChatMessage::system(system_prompt)],
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send `question` with the full history. A failed request leaves the
    /// history unchanged.
    pub async fn ask(&mut self, question: impl Into<String>) -> Result<String> {
        self.history.push(ChatMessage::user(question));

        match self.provider.complete(&self.history).await {
            Ok(answer) => {
                self.history.push(ChatMessage::assistant(answer.clone()));
                Ok(answer)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }

    /// Forget every exchange, keeping the system prompt.
    pub fn reset(&mut self) {
        self.history.retain(|m| m.role == Role::System);
    }
}
