use crate::models::draft::DraftConfig;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Display-ready summary of a draft's tournament settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverview {
    pub name: Option<String>,
    pub location: Option<String>,
    pub tournament_type: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    /// Inclusive number of days, when both dates are known and ordered
    pub day_count: Option<i64>,
    pub sets_per_match: Option<u32>,
    pub points_for_win: Option<u32>,
    pub points_for_loss: Option<u32>,
    pub field_count: usize,
}

impl ConfigOverview {
    pub fn from_config(config: &DraftConfig) -> Self {
        let starts_on = config.start_date.as_deref().and_then(parse_date);
        let ends_on = config.end_date.as_deref().and_then(parse_date);
        let day_count = match (starts_on, ends_on) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_days() + 1),
            _ => None,
        };

        Self {
            name: config.name.clone(),
            location: config.location.clone(),
            tournament_type: config.tournament_type.clone(),
            starts_on,
            ends_on,
            day_count,
            sets_per_match: config.sets_per_match,
            points_for_win: config.points_for_win,
            points_for_loss: config.points_for_loss,
            field_count: config.fields.len(),
        }
    }
}

/// Accepts a plain `YYYY-MM-DD` date or the date part of an RFC 3339 timestamp
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
