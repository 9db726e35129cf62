use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The (user, family) pair every household write is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantScope {
    pub user_id: Uuid,
    pub family_id: Uuid,
}

impl TenantScope {
    pub fn new(user_id: Uuid, family_id: Uuid) -> Self {
        Self { user_id, family_id }
    }

    pub fn owns(&self, family_id: Uuid) -> bool {
        self.family_id == family_id
    }
}
