use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage configuration for reading tournament builder drafts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Prefix the builder puts in front of every slot key
    pub key_prefix: String,
    /// Payloads larger than this are reported as unreadable instead of parsed
    pub max_payload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: "tournament_builder_".to_string(),
            max_payload_bytes: 5 * 1024 * 1024, // localStorage quota
        }
    }
}

/// Slots the tournament builder writes to client storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftSlot {
    /// Full draft snapshot (config, teams, matches, rosters)
    Draft,
    Config,
    Teams,
    Matches,
    Participants,
}

impl DraftSlot {
    pub const ALL: [DraftSlot; 5] = [
        DraftSlot::Draft,
        DraftSlot::Config,
        DraftSlot::Teams,
        DraftSlot::Matches,
        DraftSlot::Participants,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            DraftSlot::Draft => "draft",
            DraftSlot::Config => "config",
            DraftSlot::Teams => "teams",
            DraftSlot::Matches => "matches",
            DraftSlot::Participants => "participants",
        }
    }

    pub fn key(&self, config: &StorageConfig) -> String {
        format!("{}{}", config.key_prefix, self.suffix())
    }
}

/// Read access to the key-value store holding builder drafts
pub trait SnapshotStore {
    /// Raw text stored under `key`, `None` when nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }
}

/// A store that could not be opened fails every read with the opening error
impl<S: SnapshotStore> SnapshotStore for Result<S, StorageError> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Ok(store) => store.get(key),
            Err(error) => Err(error.clone()),
        }
    }
}

/// Storage error types
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("Read failed for {key}: {message}")]
    Read { key: String, message: String },

    #[error("Data too large: {0} bytes (max: {1} bytes)")]
    DataTooLarge(usize, usize),
}

/// In-process store, used where no browser storage exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Stores `value` under the slot's key
    pub fn insert_slot(&mut self, slot: DraftSlot, config: &StorageConfig, value: impl Into<String>) {
        self.insert(slot.key(config), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }
}
