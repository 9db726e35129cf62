use crate::session::profile_loader::ProfileLoader;

use ft_core::{Identity, Profile};

use std::sync::Arc;

use log::error;
use tokio::sync::OnceCell;

/// Per-request session state, stored in the request extensions by the
/// access middleware. The profile is loaded at most once per request no
/// matter how many callers ask for it.
#[derive(Clone)]
pub struct RequestSession {
    inner: Arc<Inner>,
}

struct Inner {
    identity: Option<Identity>,
    profile: OnceCell<Option<Profile>>,
    loader: Arc<ProfileLoader>,
}

impl RequestSession {
    pub fn new(identity: Option<Identity>, loader: Arc<ProfileLoader>) -> Self {
        Self {
            inner: Arc::new(Inner {
                identity,
                profile: OnceCell::new(),
                loader,
            }),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.inner.identity.as_ref()
    }

    /// None when unauthenticated, when the row is missing, or when the
    /// store failed (logged)
    pub async fn profile(&self) -> Option<&Profile> {
        let identity = self.inner.identity.as_ref()?;

        self.inner
            .profile
            .get_or_init(|| async {
                match self.inner.loader.load(identity).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        error!("load_profile failed for user {}: {}", identity.id, e);
                        None
                    }
                }
            })
            .await
            .as_ref()
    }
}
