use crate::models::client_storage::DraftSlot;
use crate::models::inspection::{DraftProjection, SlotState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of one builder slot as handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotReport {
    pub slot: DraftSlot,
    pub key: String,
    pub state: SlotState,
}

/// Everything the draft inspector shows for one refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    pub inspected_at: DateTime<Utc>,
    pub slots: Vec<SlotReport>,
    pub draft: DraftProjection,
}

impl InspectionReport {
    pub fn slot(&self, slot: DraftSlot) -> Option<&SlotReport> {
        self.slots.iter().find(|report| report.slot == slot)
    }

    /// Number of slots holding valid JSON
    pub fn loaded_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|report| report.state.is_loaded())
            .count()
    }
}
