//! Request header providers.

use std::fmt;
use std::sync::Arc;

use chatdock_ai::Headers;

use super::store::CredentialStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no credential in slot {0:?}")]
    MissingCredential(String),
    #[error("invalid credential: {0}")]
    Invalid(String),
}

pub trait AuthProvider: Send + Sync {
    /// Headers for the next request, or an error if no credential is
    /// available. An error means the request must not be sent.
    fn headers(&self) -> Result<Headers, AuthError>;
}

/// Reads a bearer token from a named credential slot on every call.
pub struct StorageAuthProvider {
    slot: String,
    store: Arc<dyn CredentialStore>,
}

impl StorageAuthProvider {
    pub fn new(slot: impl Into<String>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            slot: slot.into(),
            store,
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl fmt::Debug for StorageAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAuthProvider")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl AuthProvider for StorageAuthProvider {
    fn headers(&self) -> Result<Headers, AuthError> {
        let token = self
            .store
            .get(&self.slot)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::MissingCredential(self.slot.clone()))?;

        if token.chars().any(char::is_control) {
            return Err(AuthError::Invalid(format!(
                "credential in slot {:?} contains control characters",
                self.slot
            )));
        }

        let mut headers = Headers::new();
        headers.insert("Content-Type".into(), "application/json".into());
        headers.insert("Authorization".into(), format!("Bearer {token}"));
        Ok(headers)
    }
}

/// Fixed header set, for hosts that manage credentials themselves.
#[derive(Clone)]
pub struct StaticAuthProvider(pub Headers);

impl fmt::Debug for StaticAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticAuthProvider")
            .field(&self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AuthProvider for StaticAuthProvider {
    fn headers(&self) -> Result<Headers, AuthError> {
        Ok(self.0.clone())
    }
}
