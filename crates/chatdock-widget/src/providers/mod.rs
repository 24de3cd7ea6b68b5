//! Host-supplied collaborators: system prompt and request headers.

mod auth;
mod context;
mod store;

pub use auth::{AuthError, AuthProvider, StaticAuthProvider, StorageAuthProvider};
pub use context::{ContextError, ContextProvider, StaticContext};
pub use store::{CredentialStore, EnvStore, FileStore, LayeredStore, MemoryStore};
