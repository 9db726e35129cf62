//! Cross-request read-through cache of profiles keyed by identity id.
//!
//! Entries expire after the configured TTL and are dropped explicitly on
//! logout, on settings mutations and on onboarding writes. A TTL of zero
//! disables caching.
//!
//! Every invalidation bumps a generation counter. A loader snapshots the
//! generation before reading the store and passes it to [`ProfileCache::insert`],
//! so a read that raced an invalidation cannot refill the cache with the
//! stale row.

use ft_core::Profile;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

pub struct ProfileCache {
    entries: Cache<Uuid, Profile>,
    generation: AtomicU64,
    enabled: bool,
}

impl ProfileCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let entries = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(capacity.max(1) as u64)
            .build();

        Self {
            entries,
            generation: AtomicU64::new(0),
            enabled: !ttl.is_zero(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Take before reading the store; hand to [`ProfileCache::insert`]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn get(&self, identity_id: Uuid) -> Option<Profile> {
        if !self.enabled {
            return None;
        }
        self.entries.get(&identity_id).await
    }

    /// Cache `profile` read at `generation`. Dropped again if any
    /// invalidation happened since.
    pub async fn insert(&self, profile: Profile, generation: u64) {
        if !self.enabled {
            return;
        }

        let identity_id = profile.id;
        self.entries.insert(identity_id, profile).await;

        if self.generation() != generation {
            self.entries.invalidate(&identity_id).await;
        }
    }

    pub async fn invalidate(&self, identity_id: Uuid) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries.invalidate(&identity_id).await;
    }

    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}
