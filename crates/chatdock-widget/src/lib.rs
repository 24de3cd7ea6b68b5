//! Embeddable chat widget for Chatdock.
//!
//! A `ChatSession` owns the widget state (open/closed, message history,
//! draft input, busy flag, selected model) and is the only thing that
//! mutates it. Hosts drive it through a small API and inject two
//! providers: one for the system prompt and one for request headers.
//! The view layer is a pure projection of a state snapshot.

pub mod message;
pub mod providers;
pub mod session;
pub mod state;
pub mod view;

pub use message::ChatMessage;
pub use providers::{
    AuthError, AuthProvider, ContextError, ContextProvider, CredentialStore, EnvStore, FileStore,
    LayeredStore, MemoryStore, StaticAuthProvider, StaticContext, StorageAuthProvider,
};
pub use session::{ChatSession, ChatSessionBuilder, RenderHook};
pub use state::SessionState;
pub use view::{build_view, render_html, render_text, WidgetView};

pub use chatdock_ai::{ModelId, Role};
