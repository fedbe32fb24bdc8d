pub mod models {
    pub mod client_storage;
    pub mod config_overview;
    pub mod draft;
    pub mod inspection;
    pub mod projection;
    pub mod score;
    pub mod stage;
}

pub mod dto {
    pub mod inspection;
}

pub mod error;

// Re-export commonly used items
pub use error::{DraftError, Result};

// Re-export models
pub use models::{
    client_storage::{DraftSlot, MemoryStore, SnapshotStore, StorageConfig, StorageError},
    config_overview::ConfigOverview,
    draft::{
        DraftConfig, DraftMatch, DraftSnapshot, DraftTeam, FieldDef, RosterEntry,
        DEFAULT_MATCH_DURATION_MINUTES,
    },
    inspection::{DraftInspector, DraftProjection, ProjectedDraft, SlotState},
    projection::{
        project, project_json, project_snapshot, DraftSummary, EnrichedTeam, FieldSchedule,
        MatchRow, ProjectedView, TeamLabel, BYE_LABEL, TBD_LABEL, UNASSIGNED_FIELD,
    },
    score::ScoreLine,
    stage::StagePhase,
};

// Re-export DTOs
pub use dto::inspection::{InspectionReport, SlotReport};
