use serde::{Deserialize, Serialize};

/// Tournament phase a match belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StagePhase {
    Group,
    Playoff,
}

impl StagePhase {
    /// Classifies a builder stage tag.
    ///
    /// The builder writes free-text stage ids, so this is a heuristic: a
    /// missing or empty tag, or one containing `group` (case-sensitive), is
    /// the group phase; anything else is a playoff. A tag such as
    /// `ungrouped_playoff` is therefore classified as group phase.
    pub fn classify(stage_id: Option<&str>) -> Self {
        match stage_id {
            None => StagePhase::Group,
            Some(tag) if tag.is_empty() || tag.contains("group") => StagePhase::Group,
            Some(_) => StagePhase::Playoff,
        }
    }

    pub fn is_group(self) -> bool {
        self == StagePhase::Group
    }
}
