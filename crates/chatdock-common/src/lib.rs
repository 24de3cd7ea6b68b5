pub mod errors;
pub mod id;
pub mod models;

pub use errors::{ChatdockError, ConfigError};
pub use id::{new_id, MessageId};
pub use models::{ModelId, UnknownModel};
