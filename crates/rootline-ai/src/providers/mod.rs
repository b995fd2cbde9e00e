//! Chat provider implementations

pub mod local;
pub mod openai;

use crate::bridge::ChatProvider;
use anyhow::Result;

/// Factory function to create chat providers
pub fn create_provider(
    provider_name: &str,
    api_key: Option<String>,
    endpoint: Option<String>,
    model: Option<String>,
) -> Result<Box<dyn ChatProvider>> {
    match provider_name {
        "openai" => {
            let mut provider = openai::OpenAIProvider::new(api_key);
            if let Some(endpoint) = endpoint {
                provider = provider.with_endpoint(endpoint);
            }
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Ok(Box::new(provider))
        }
        "local" => Ok(Box::new(local::LocalProvider::new())),
        _ => anyhow::bail!("Unknown chat provider: {}", provider_name),
    }
}
