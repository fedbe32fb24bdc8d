use crate::dto::inspection::{InspectionReport, SlotReport};
use crate::error::DraftError;
use crate::models::client_storage::{DraftSlot, SnapshotStore, StorageConfig, StorageError};
use crate::models::config_overview::ConfigOverview;
use crate::models::draft::DraftSnapshot;
use crate::models::projection::{project_snapshot, MatchRow, ProjectedView};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a storage slot holds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotState {
    /// Nothing stored under the slot's key
    Absent,
    /// The store failed, or the payload exceeds the configured limit
    Unreadable { error: StorageError },
    /// Text is stored but is not valid JSON
    Malformed { raw: String, error: String },
    Loaded { value: Value },
}

/// Outcome of projecting the draft slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DraftProjection {
    Absent,
    /// The slot could not be read or parsed; see the slot report for details
    Unreadable { error: String },
    /// The snapshot parsed but has the wrong shape
    Rejected { error: DraftError, raw: Value },
    Projected(Box<ProjectedDraft>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedDraft {
    pub config: ConfigOverview,
    pub view: ProjectedView,
    pub group_rows: Vec<MatchRow>,
    pub playoff_rows: Vec<MatchRow>,
}

impl SlotState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SlotState::Loaded { .. })
    }
}

impl DraftProjection {
    /// Projects the state read from the draft slot
    pub fn from_slot(state: &SlotState) -> Self {
        match state {
            SlotState::Absent => DraftProjection::Absent,
            SlotState::Unreadable { error } => DraftProjection::Unreadable {
                error: error.to_string(),
            },
            SlotState::Malformed { error, .. } => DraftProjection::Unreadable {
                error: error.clone(),
            },
            SlotState::Loaded { value } => match DraftSnapshot::from_value(value) {
                Ok(snapshot) => {
                    let view = project_snapshot(&snapshot);
                    let group_rows = view.match_rows(&view.group_matches);
                    let playoff_rows = view.match_rows(&view.playoff_matches);
                    DraftProjection::Projected(Box::new(ProjectedDraft {
                        config: ConfigOverview::from_config(&snapshot.config),
                        view,
                        group_rows,
                        playoff_rows,
                    }))
                }
                Err(error) => {
                    warn!("Draft snapshot rejected: {}", error);
                    DraftProjection::Rejected {
                        error,
                        raw: value.clone(),
                    }
                }
            },
        }
    }

    pub fn view(&self) -> Option<&ProjectedView> {
        match self {
            DraftProjection::Projected(draft) => Some(&draft.view),
            _ => None,
        }
    }
}

/// Reads the tournament builder's slots from an injected store
pub struct DraftInspector<S> {
    store: S,
    config: StorageConfig,
}

impl<S: SnapshotStore> DraftInspector<S> {
    pub fn new(store: S, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// Reads one slot, telling absent, unreadable and malformed text apart
    pub fn read_slot(&self, slot: DraftSlot) -> SlotState {
        let key = slot.key(&self.config);

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Slot {} is empty", key);
                return SlotState::Absent;
            }
            Err(error) => {
                warn!("Failed to read slot {}: {}", key, error);
                return SlotState::Unreadable { error };
            }
        };

        if raw.len() > self.config.max_payload_bytes {
            warn!("Slot {} holds {} bytes, over the limit", key, raw.len());
            return SlotState::Unreadable {
                error: StorageError::DataTooLarge(raw.len(), self.config.max_payload_bytes),
            };
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => SlotState::Loaded { value },
            Err(error) => {
                warn!("Slot {} does not hold valid JSON: {}", key, error);
                SlotState::Malformed {
                    raw,
                    error: error.to_string(),
                }
            }
        }
    }

    /// Reads and projects the draft snapshot slot
    pub fn project_draft(&self) -> DraftProjection {
        DraftProjection::from_slot(&self.read_slot(DraftSlot::Draft))
    }

    /// Reads every slot and projects the draft snapshot
    pub fn inspect(&self) -> InspectionReport {
        let slots: Vec<SlotReport> = DraftSlot::ALL
            .iter()
            .map(|&slot| SlotReport {
                slot,
                key: slot.key(&self.config),
                state: self.read_slot(slot),
            })
            .collect();

        let draft = slots
            .iter()
            .find(|report| report.slot == DraftSlot::Draft)
            .map(|report| DraftProjection::from_slot(&report.state))
            .unwrap_or(DraftProjection::Absent);

        InspectionReport {
            inspected_at: chrono::Utc::now(),
            slots,
            draft,
        }
    }
}
