//! Construction of a `ChatSession` from configuration.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chatdock_ai::{AiError, ChatClient, ChatTransport, ClientConfig, ModelId};
use chatdock_common::{ChatdockError, ConfigError};
use chatdock_config::ChatdockConfig;

use super::manager::{ChatSession, RenderHook, SendSettings};
use crate::providers::{
    AuthProvider, ContextProvider, CredentialStore, LayeredStore, StorageAuthProvider,
};
use crate::state::SessionState;

/// Builds a `ChatSession`.
///
/// Defaults: an HTTP transport with the configured timeouts, no context
/// provider (the configured default prompt is used), and a
/// `StorageAuthProvider` over the environment and credentials file.
pub struct ChatSessionBuilder {
    config: ChatdockConfig,
    transport: Option<Arc<dyn ChatTransport>>,
    context: Option<Arc<dyn ContextProvider>>,
    auth: Option<Arc<dyn AuthProvider>>,
    store: Option<Arc<dyn CredentialStore>>,
    on_render: Option<RenderHook>,
}

impl ChatSessionBuilder {
    pub fn new(config: ChatdockConfig) -> Self {
        Self {
            config,
            transport: None,
            context: None,
            auth: None,
            store: None,
            on_render: None,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn context_provider(mut self, provider: Arc<dyn ContextProvider>) -> Self {
        self.context = Some(provider);
        self
    }

    /// Replace the default storage-backed auth provider.
    pub fn auth_provider(mut self, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(provider);
        self
    }

    /// Store read by the default auth provider. Ignored if
    /// [`auth_provider`](Self::auth_provider) is set.
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn on_render(mut self, hook: impl Fn(&SessionState) + Send + Sync + 'static) -> Self {
        self.on_render = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Result<ChatSession, ChatdockError> {
        let api = &self.config.api;
        let chat = &self.config.chat;

        let model: ModelId = chat.default_model.parse().map_err(|e| {
            ConfigError::ValidationError(format!("chat.default_model: {e}"))
        })?;

        let client_config = ClientConfig::new(api.endpoint_url())
            .with_connect_timeout(Duration::from_secs(api.connect_timeout_secs.into()))
            .with_timeout(Duration::from_secs(api.timeout_secs.into()));
        let client = match self.transport {
            Some(transport) => ChatClient::new(client_config, transport),
            None => ChatClient::with_http(client_config).map_err(|e| match e {
                AiError::Transport(msg) => ChatdockError::Network(msg),
                other => ChatdockError::Network(other.to_string()),
            })?,
        };

        let auth = match self.auth {
            Some(auth) => auth,
            None => {
                let store = self
                    .store
                    .unwrap_or_else(|| Arc::new(LayeredStore::standard()));
                Arc::new(StorageAuthProvider::new(chat.credential_slot.clone(), store))
            }
        };

        let mut state = SessionState::new(model);
        state.is_open = self.config.widget.start_open;

        Ok(ChatSession {
            state: Mutex::new(state),
            client,
            context: self.context,
            auth,
            on_render: self.on_render,
            settings: SendSettings {
                max_tokens: api.max_tokens,
                history_limit: chat.history_limit as usize,
                default_system_prompt: chat.default_system_prompt.clone(),
            },
        })
    }
}

impl ChatSession {
    pub fn builder(config: ChatdockConfig) -> ChatSessionBuilder {
        ChatSessionBuilder::new(config)
    }
}
