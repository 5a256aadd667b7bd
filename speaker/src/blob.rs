//! Transient playback references for synthesized audio.
//!
//! A [`PlaybackUrl`] plays the role a browser object URL plays for a page:
//! a handle that can be assigned as a player source and must be revoked once
//! it is no longer needed.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackUrl(String);

impl PlaybackUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaybackUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues and releases playback references.
pub trait BlobStore: Send + Sync {
    /// Keep `audio` alive behind a fresh reference.
    fn create(&self, audio: Vec<u8>) -> PlaybackUrl;
    /// Payload for a live reference.
    fn resolve(&self, url: &PlaybackUrl) -> Option<Vec<u8>>;
    /// Release a reference. Returns `false` if it was not live.
    fn revoke(&self, url: &PlaybackUrl) -> bool;
    /// Number of live references.
    fn live(&self) -> usize;
}

/// In-process [`BlobStore`] handing out `blob:<uuid>` references.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<PlaybackUrl, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> MutexGuard<'_, HashMap<PlaybackUrl, Vec<u8>>> {
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BlobStore for MemoryBlobStore {
    fn create(&self, audio: Vec<u8>) -> PlaybackUrl {
        let url = PlaybackUrl(format!("blob:{}", Uuid::new_v4()));
        self.blobs().insert(url.clone(), audio);
        url
    }

    fn resolve(&self, url: &PlaybackUrl) -> Option<Vec<u8>> {
        self.blobs().get(url).cloned()
    }

    fn revoke(&self, url: &PlaybackUrl) -> bool {
        self.blobs().remove(url).is_some()
    }

    fn live(&self) -> usize {
        self.blobs().len()
    }
}
