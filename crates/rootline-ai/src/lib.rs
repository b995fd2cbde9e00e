//! Chat backend for Rootline
//!
//! Answers questions about a file's dependencies through a completion
//! provider, seeded with the file's dependency report.

pub mod bridge;
pub mod prompt;
pub mod providers;
pub mod session;


pub use bridge::{ChatMessage, ChatProvider, Role};
pub use prompt::PromptBuilder;
pub use providers::create_provider;
pub use session::ChatSession;
