//! System prompt providers.

/// Failure to produce a system prompt. Recovered by substituting the
/// configured default prompt; never shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("context provider failed: {0}")]
pub struct ContextError(pub String);

pub trait ContextProvider: Send + Sync {
    fn system_prompt(&self) -> Result<String, ContextError>;
}

impl<F> ContextProvider for F
where
    F: Fn() -> Result<String, ContextError> + Send + Sync,
{
    fn system_prompt(&self) -> Result<String, ContextError> {
        self()
    }
}

/// Always returns the same prompt.
#[derive(Debug, Clone)]
pub struct StaticContext(pub String);

impl ContextProvider for StaticContext {
    fn system_prompt(&self) -> Result<String, ContextError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_providers() {
        let provider = || Ok::<_, ContextError>("collection has 12 cards".to_string());
        assert_eq!(provider.system_prompt().unwrap(), "collection has 12 cards");
    }

    #[test]
    fn static_context_returns_prompt() {
        let provider = StaticContext("be brief".into());
        assert_eq!(provider.system_prompt().unwrap(), "be brief");
    }
}
