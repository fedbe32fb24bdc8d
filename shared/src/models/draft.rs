use crate::error::{shape_of, DraftError, Result};
use crate::models::stage::StagePhase;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Duration assumed for a match that does not carry one
pub const DEFAULT_MATCH_DURATION_MINUTES: u32 = 60;

/// Draft snapshot as persisted by the tournament builder, after the guarded
/// parse step. Every field the builder may omit has a documented default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftSnapshot {
    pub config: DraftConfig,
    pub teams: Vec<DraftTeam>,
    pub matches: Vec<DraftMatch>,
    pub rosters: Vec<RosterEntry>,
}

/// Tournament settings of a draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftConfig {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub tournament_type: Option<String>,
    pub sets_per_match: Option<u32>,
    pub points_for_win: Option<u32>,
    pub points_for_loss: Option<u32>,
    pub fields: Vec<FieldDef>,
}

/// A configured playing field or court
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftTeam {
    pub id: Option<String>,
    pub name: String,
    pub short_name: Option<String>,
    pub color: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub team_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftMatch {
    pub id: Option<String>,
    pub team1_id: Option<String>,
    pub team2_id: Option<String>,
    pub stage_id: Option<String>,
    pub start_time: Option<String>,
    pub date: Option<String>,
    pub field: Option<String>,
    pub duration: Option<u32>,
    pub score_text: Option<String>,
}

impl DraftSnapshot {
    /// Maps an untyped snapshot document into typed structures.
    ///
    /// `null` is an empty snapshot. Fails only when the root is not an object
    /// or when `teams`, `matches` or `rosters` is present but not an array.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => return Err(DraftError::malformed("snapshot", "an object", other)),
        };

        let config = match root.get("config") {
            None | Some(Value::Null) => DraftConfig::default(),
            Some(Value::Object(map)) => DraftConfig::from_map(map),
            Some(other) => {
                warn!(
                    "Draft config is a {} instead of an object; using defaults",
                    shape_of(other)
                );
                DraftConfig::default()
            }
        };

        let teams = sequence(root, "teams")?
            .iter()
            .map(|item| item.as_object().map(DraftTeam::from_map).unwrap_or_default())
            .collect();
        let matches = sequence(root, "matches")?
            .iter()
            .map(|item| item.as_object().map(DraftMatch::from_map).unwrap_or_default())
            .collect();
        let rosters = sequence(root, "rosters")?
            .iter()
            .map(|item| item.as_object().map(RosterEntry::from_map).unwrap_or_default())
            .collect();

        Ok(Self {
            config,
            teams,
            matches,
            rosters,
        })
    }

    /// Parses snapshot JSON text and runs the guarded parse step on it
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

impl DraftConfig {
    fn from_map(map: &Map<String, Value>) -> Self {
        let fields = match map.get("fields") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().and_then(|def| non_blank_field(def, "name")))
                .map(|name| FieldDef { name })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            name: text_field(map, "name"),
            start_date: text_field(map, "start_date"),
            end_date: text_field(map, "end_date"),
            location: text_field(map, "location"),
            tournament_type: text_field(map, "tournament_type"),
            sets_per_match: count_field(map, "sets_per_match"),
            points_for_win: count_field(map, "points_for_win"),
            points_for_loss: count_field(map, "points_for_loss"),
            fields,
        }
    }

    /// Configured field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl DraftTeam {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: non_blank_field(map, "id"),
            name: text_field(map, "name").unwrap_or_default(),
            short_name: non_blank_field(map, "short_name"),
            color: text_field(map, "color"),
            logo_url: non_blank_field(map, "logo_url"),
        }
    }

    /// Display abbreviation: the short name, else the first three characters
    /// of the name upper-cased
    pub fn abbreviation(&self) -> Option<String> {
        if let Some(short_name) = &self.short_name {
            return Some(short_name.clone());
        }
        let prefix: String = self.name.trim().chars().take(3).collect();
        if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_uppercase())
        }
    }
}

impl RosterEntry {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            team_id: non_blank_field(map, "team_id"),
            first_name: text_field(map, "first_name").unwrap_or_default(),
            last_name: text_field(map, "last_name").unwrap_or_default(),
            number: count_field(map, "number"),
        }
    }
}

impl DraftMatch {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: non_blank_field(map, "id"),
            team1_id: non_blank_field(map, "team1_id"),
            team2_id: non_blank_field(map, "team2_id"),
            stage_id: text_field(map, "stage_id"),
            start_time: text_field(map, "start_time"),
            date: text_field(map, "date"),
            field: non_blank_field(map, "field"),
            duration: count_field(map, "duration"),
            score_text: text_field(map, "score_text"),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration.unwrap_or(DEFAULT_MATCH_DURATION_MINUTES)
    }

    /// Sort key for schedules; a match without a start time sorts first
    pub fn start_time_key(&self) -> &str {
        self.start_time.as_deref().unwrap_or("")
    }

    pub fn phase(&self) -> StagePhase {
        StagePhase::classify(self.stage_id.as_deref())
    }
}

fn sequence<'a>(root: &'a Map<String, Value>, field: &str) -> Result<&'a [Value]> {
    match root.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(DraftError::malformed(field, "an array", other)),
    }
}

/// Reads a string or number as text; other shapes read as absent
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(num) => Some(num.to_string()),
        _ => None,
    }
}

/// Like `text_field`, but blank text reads as absent
fn non_blank_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    text_field(map, key).filter(|text| !text.trim().is_empty())
}

/// Reads a non-negative number or numeric string
fn count_field(map: &Map<String, Value>, key: &str) -> Option<u32> {
    match map.get(key)? {
        Value::Number(num) => match num.as_u64() {
            Some(whole) => u32::try_from(whole).ok(),
            None => num.as_f64().and_then(float_to_count),
        },
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<u32>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(float_to_count))
        }
        _ => None,
    }
}

fn float_to_count(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value.round() as u32)
    } else {
        None
    }
}
