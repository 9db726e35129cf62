use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated subject issued by the identity store.
/// Immutable once created; the profile shares its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

impl Identity {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}
