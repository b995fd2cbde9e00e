//! Offline provider answering from the prompt context

use crate::bridge::{ChatMessage, ChatProvider, Role};
use crate::prompt::{CLOSING_LINE, CYCLES_HEADER, REPORT_HEADER};
use anyhow::Result;

/// Answers without a network by quoting the relevant part of the system
/// prompt.
#[derive(Debug, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Text between `header` and the next section of the prompt.
fn section<'a>(context: &'a str, header: &str) -> Option<&'a str> {
    let start = context.find(header)? + header.len();
    let rest = &context[start..];
    let end = [CYCLES_HEADER, CLOSING_LINE]
        .iter()
        .filter_map(|next| rest.find(next))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[async_trait::async_trait]
impl ChatProvider for LocalProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let context = messages
            .iter()
            .find(|m| m.role == Role::System)
            .map_or("", |m| m.content.as_str());
        let question = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map_or(String::new(), |m| m.content.to_lowercase());

        let answer = if question.contains("cycle") || question.contains("circular") {
            let cycles: Vec<&str> = context.lines().filter(|l| l.contains(" -> ")).collect();
            if cycles.is_empty() {
                "No circular dependencies were found.".to_string()
            } else {
                format!("{}\n{}", CYCLES_HEADER, cycles.join("\n"))
            }
        } else if let Some(report) = section(context, REPORT_HEADER).filter(|r| !r.is_empty()) {
            format!("I can only quote the dependency report offline:\n\n{}", report)
        } else {
            "I'm a local provider with no dependency report to answer from.".to_string()
        };
        Ok(answer)
    }

    fn name(&self) -> &str {
        "Local (offline)"
    }
}
