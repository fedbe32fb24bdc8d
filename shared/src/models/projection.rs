use crate::error::Result;
use crate::models::draft::{DraftMatch, DraftSnapshot, DraftTeam, RosterEntry};
use crate::models::score::ScoreLine;
use crate::models::stage::StagePhase;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Label of the synthetic schedule for matches without a field
pub const UNASSIGNED_FIELD: &str = "Unassigned";
/// Label for an empty team slot
pub const BYE_LABEL: &str = "Bye";
/// Label for a team reference that does not resolve
pub const TBD_LABEL: &str = "TBD";

/// Display-ready view of a draft snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedView {
    pub enriched_teams: Vec<EnrichedTeam>,
    pub group_matches: Vec<DraftMatch>,
    pub playoff_matches: Vec<DraftMatch>,
    pub field_schedules: Vec<FieldSchedule>,
    pub summary: DraftSummary,
}

/// A team together with its roster entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedTeam {
    #[serde(flatten)]
    pub team: DraftTeam,
    pub players: Vec<RosterEntry>,
}

/// Matches played on one field, ordered by start time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSchedule {
    pub field: String,
    /// Set only on the synthetic bucket for matches without a field
    pub unassigned: bool,
    pub matches: Vec<DraftMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub team_count: usize,
    pub match_count: usize,
    pub group_match_count: usize,
    pub playoff_match_count: usize,
    pub average_match_duration_minutes: u32,
}

/// Resolved display labels for one side of a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamLabel {
    pub id: Option<String>,
    pub name: String,
    pub abbreviation: String,
}

/// One match as the inspector renders it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    pub id: Option<String>,
    pub home: TeamLabel,
    pub away: TeamLabel,
    pub score: ScoreLine,
    pub phase: StagePhase,
    pub field: String,
    pub start_time: Option<String>,
    pub date: Option<String>,
    pub duration_minutes: u32,
}

/// Projects an untyped snapshot document. `None` and `null` are an empty
/// snapshot.
pub fn project(snapshot: Option<&Value>) -> Result<ProjectedView> {
    let snapshot = match snapshot {
        Some(value) => DraftSnapshot::from_value(value)?,
        None => DraftSnapshot::default(),
    };
    Ok(project_snapshot(&snapshot))
}

/// Projects snapshot JSON text
pub fn project_json(text: &str) -> Result<ProjectedView> {
    let snapshot = DraftSnapshot::from_json(text)?;
    Ok(project_snapshot(&snapshot))
}

/// Projects an already-parsed snapshot
pub fn project_snapshot(snapshot: &DraftSnapshot) -> ProjectedView {
    let enriched_teams = enrich_teams(&snapshot.teams, &snapshot.rosters);

    let (mut group_matches, mut playoff_matches): (Vec<DraftMatch>, Vec<DraftMatch>) = snapshot
        .matches
        .iter()
        .cloned()
        .partition(|draft_match| draft_match.phase().is_group());
    sort_by_start_time(&mut group_matches);
    sort_by_start_time(&mut playoff_matches);

    let field_schedules = build_field_schedules(snapshot);

    let summary = DraftSummary {
        team_count: snapshot.teams.len(),
        match_count: snapshot.matches.len(),
        group_match_count: group_matches.len(),
        playoff_match_count: playoff_matches.len(),
        average_match_duration_minutes: average_duration(&snapshot.matches),
    };

    debug!(
        "Projected draft: {} teams, {} matches ({} group, {} playoff), {} field schedules",
        summary.team_count,
        summary.match_count,
        summary.group_match_count,
        summary.playoff_match_count,
        field_schedules.len()
    );

    ProjectedView {
        enriched_teams,
        group_matches,
        playoff_matches,
        field_schedules,
        summary,
    }
}

impl ProjectedView {
    /// Looks up a team by id; the first team with a matching id wins
    pub fn team(&self, id: &str) -> Option<&EnrichedTeam> {
        self.enriched_teams
            .iter()
            .find(|enriched| enriched.team.id.as_deref() == Some(id))
    }

    /// Display name for a match slot: `Bye` when no team is assigned, `TBD`
    /// when the id does not resolve to a named team
    pub fn team_name(&self, id: Option<&str>) -> String {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            return BYE_LABEL.to_string();
        };
        match self.team(id) {
            Some(enriched) if !enriched.team.name.is_empty() => enriched.team.name.clone(),
            _ => TBD_LABEL.to_string(),
        }
    }

    /// Short label for a match slot, `TBD` when nothing better exists
    pub fn team_abbreviation(&self, id: Option<&str>) -> String {
        id.filter(|id| !id.trim().is_empty())
            .and_then(|id| self.team(id))
            .and_then(|enriched| enriched.team.abbreviation())
            .unwrap_or_else(|| TBD_LABEL.to_string())
    }

    /// Schedule of a field by name; `Unassigned` finds the synthetic bucket,
    /// which also holds matches played on a field of that name
    pub fn field_schedule(&self, field: &str) -> Option<&FieldSchedule> {
        self.field_schedules
            .iter()
            .find(|schedule| schedule.field == field)
    }

    pub fn match_row(&self, draft_match: &DraftMatch) -> MatchRow {
        MatchRow {
            id: draft_match.id.clone(),
            home: self.team_label(draft_match.team1_id.as_deref()),
            away: self.team_label(draft_match.team2_id.as_deref()),
            score: ScoreLine::parse(draft_match.score_text.as_deref()),
            phase: draft_match.phase(),
            field: draft_match
                .field
                .clone()
                .unwrap_or_else(|| UNASSIGNED_FIELD.to_string()),
            start_time: draft_match.start_time.clone(),
            date: draft_match.date.clone(),
            duration_minutes: draft_match.duration_minutes(),
        }
    }

    pub fn match_rows(&self, matches: &[DraftMatch]) -> Vec<MatchRow> {
        matches.iter().map(|m| self.match_row(m)).collect()
    }

    fn team_label(&self, id: Option<&str>) -> TeamLabel {
        TeamLabel {
            id: id.map(str::to_string),
            name: self.team_name(id),
            abbreviation: self.team_abbreviation(id),
        }
    }
}

fn enrich_teams(teams: &[DraftTeam], rosters: &[RosterEntry]) -> Vec<EnrichedTeam> {
    let mut players_by_team: HashMap<&str, Vec<RosterEntry>> = HashMap::new();
    for entry in rosters {
        if let Some(team_id) = entry.team_id.as_deref() {
            players_by_team
                .entry(team_id)
                .or_default()
                .push(entry.clone());
        }
    }

    teams
        .iter()
        .map(|team| EnrichedTeam {
            team: team.clone(),
            players: team
                .id
                .as_deref()
                .and_then(|id| players_by_team.get(id))
                .cloned()
                .unwrap_or_default(),
        })
        .collect()
}

fn build_field_schedules(snapshot: &DraftSnapshot) -> Vec<FieldSchedule> {
    // A field literally named `Unassigned` shares the synthetic bucket
    let names: BTreeSet<&str> = snapshot
        .config
        .field_names()
        .chain(
            snapshot
                .matches
                .iter()
                .filter_map(|draft_match| draft_match.field.as_deref()),
        )
        .filter(|name| *name != UNASSIGNED_FIELD)
        .collect();

    let mut schedules: Vec<FieldSchedule> = names
        .iter()
        .map(|name| FieldSchedule {
            field: name.to_string(),
            unassigned: false,
            matches: Vec::new(),
        })
        .collect();
    let positions: HashMap<&str, usize> = names
        .into_iter()
        .enumerate()
        .map(|(position, name)| (name, position))
        .collect();

    let mut unassigned = Vec::new();
    for draft_match in &snapshot.matches {
        match draft_match
            .field
            .as_deref()
            .and_then(|field| positions.get(field))
        {
            Some(&position) => schedules[position].matches.push(draft_match.clone()),
            None => unassigned.push(draft_match.clone()),
        }
    }

    for schedule in &mut schedules {
        sort_by_start_time(&mut schedule.matches);
    }

    if !unassigned.is_empty() {
        sort_by_start_time(&mut unassigned);
        schedules.push(FieldSchedule {
            field: UNASSIGNED_FIELD.to_string(),
            unassigned: true,
            matches: unassigned,
        });
    }

    schedules
}

/// Stable sort; matches without a start time come first
fn sort_by_start_time(matches: &mut [DraftMatch]) {
    matches.sort_by(|a, b| a.start_time_key().cmp(b.start_time_key()));
}

fn average_duration(matches: &[DraftMatch]) -> u32 {
    if matches.is_empty() {
        return 0;
    }
    let total: u64 = matches
        .iter()
        .map(|draft_match| u64::from(draft_match.duration_minutes()))
        .sum();
    (total as f64 / matches.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DraftError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn project_value(value: Value) -> ProjectedView {
        project(Some(&value)).unwrap()
    }

    fn sample_snapshot() -> Value {
        json!({
            "config": {
                "name": "Harbor Open",
                "fields": [{ "name": "Court B" }, { "name": "Court A" }]
            },
            "teams": [
                { "id": "t1", "name": "Sharks", "short_name": "SHK", "color": "#0055aa" },
                { "id": "t2", "name": "Orcas" },
                { "id": "t3", "name": "Gulls" }
            ],
            "rosters": [
                { "team_id": "t2", "first_name": "Mia", "last_name": "Holm", "number": 4 },
                { "team_id": "t1", "first_name": "Ana", "last_name": "Berg" },
                { "team_id": "t2", "first_name": "Lea", "last_name": "Moe" },
                { "team_id": "t9", "first_name": "Orphan" }
            ],
            "matches": [
                { "id": "m1", "team1_id": "t1", "team2_id": "t2", "stage_id": "group_a",
                  "start_time": "10:00", "field": "Court A", "duration": 40, "score_text": "2-1" },
                { "id": "m2", "team1_id": "t2", "team2_id": "t3", "stage_id": "group_a",
                  "start_time": "09:00", "field": "Court A", "duration": 40 },
                { "id": "m3", "team1_id": "t1", "team2_id": "t3", "stage_id": "final",
                  "start_time": "15:00", "field": "Center Court", "duration": 90 },
                { "id": "m4", "team1_id": "t3", "stage_id": "semifinal", "start_time": "13:00" }
            ]
        })
    }

    #[test]
    fn test_empty_snapshot_projection() {
        let view = project_value(json!({}));
        assert_eq!(view, ProjectedView::default());
        assert_eq!(
            view.summary,
            DraftSummary {
                team_count: 0,
                match_count: 0,
                group_match_count: 0,
                playoff_match_count: 0,
                average_match_duration_minutes: 0,
            }
        );
    }

    #[test]
    fn test_absent_and_null_snapshots() {
        assert_eq!(project(None).unwrap(), ProjectedView::default());
        assert_eq!(project(Some(&Value::Null)).unwrap(), ProjectedView::default());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let snapshot = sample_snapshot();
        let first = project(Some(&snapshot)).unwrap();
        let second = project(Some(&snapshot)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_roster_attachment() {
        let view = project_value(json!({
            "teams": [{ "id": "A" }],
            "rosters": [
                { "team_id": "A", "first_name": "X" },
                { "team_id": "B", "first_name": "Y" }
            ]
        }));

        assert_eq!(view.enriched_teams.len(), 1);
        let players = &view.enriched_teams[0].players;
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].first_name, "X");
    }

    #[test]
    fn test_enriched_teams_keep_order() {
        let view = project_value(sample_snapshot());

        let names: Vec<&str> = view
            .enriched_teams
            .iter()
            .map(|enriched| enriched.team.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sharks", "Orcas", "Gulls"]);

        let orcas: Vec<&str> = view.enriched_teams[1]
            .players
            .iter()
            .map(|player| player.first_name.as_str())
            .collect();
        assert_eq!(orcas, vec!["Mia", "Lea"]);
        assert!(view.enriched_teams[2].players.is_empty());
    }

    #[test]
    fn test_team_without_id_gets_no_players() {
        let view = project_value(json!({
            "teams": [{ "name": "Nameless" }],
            "rosters": [{ "first_name": "Drifter" }]
        }));
        assert!(view.enriched_teams[0].players.is_empty());
    }

    #[test]
    fn test_phase_partition() {
        let view = project_value(sample_snapshot());

        let group: Vec<_> = view.group_matches.iter().map(|m| m.id.as_deref()).collect();
        let playoff: Vec<_> = view.playoff_matches.iter().map(|m| m.id.as_deref()).collect();
        assert_eq!(group, vec![Some("m2"), Some("m1")]);
        assert_eq!(playoff, vec![Some("m4"), Some("m3")]);
        assert_eq!(view.summary.group_match_count, 2);
        assert_eq!(view.summary.playoff_match_count, 2);
    }

    #[test]
    fn test_missing_start_time_sorts_first() {
        let view = project_value(json!({
            "matches": [
                { "id": "late", "start_time": "18:00" },
                { "id": "unscheduled" },
                { "id": "early", "start_time": "08:00" }
            ]
        }));

        let order: Vec<_> = view.group_matches.iter().map(|m| m.id.as_deref()).collect();
        assert_eq!(order, vec![Some("unscheduled"), Some("early"), Some("late")]);
    }

    #[test]
    fn test_field_union_and_unassigned_bucket() {
        let view = project_value(json!({
            "config": { "fields": [{ "name": "Court1" }] },
            "matches": [{ "field": "Court2" }, {}]
        }));

        let fields: Vec<&str> = view
            .field_schedules
            .iter()
            .map(|schedule| schedule.field.as_str())
            .collect();
        assert_eq!(fields, vec!["Court1", "Court2", "Unassigned"]);

        assert!(view.field_schedules[0].matches.is_empty());
        assert_eq!(view.field_schedules[1].matches.len(), 1);
        let unassigned = view.field_schedule(UNASSIGNED_FIELD).unwrap();
        assert!(unassigned.unassigned);
        assert_eq!(unassigned.matches.len(), 1);
    }

    #[test]
    fn test_unassigned_stays_last() {
        let view = project_value(json!({
            "matches": [{ "field": "Zeta" }, { "field": "" }, { "field": "Alpha" }]
        }));

        let fields: Vec<&str> = view
            .field_schedules
            .iter()
            .map(|schedule| schedule.field.as_str())
            .collect();
        assert_eq!(fields, vec!["Alpha", "Zeta", "Unassigned"]);
    }

    #[test]
    fn test_unassigned_bucket_when_a_match_lacks_a_field() {
        let view = project_value(sample_snapshot());
        assert!(view.field_schedule(UNASSIGNED_FIELD).is_some());
    }

    #[test]
    fn test_no_unassigned_bucket_when_every_match_has_a_field() {
        let view = project_value(json!({ "matches": [{ "field": "Court 1" }] }));
        assert!(view.field_schedule(UNASSIGNED_FIELD).is_none());
    }

    #[test]
    fn test_field_named_unassigned_merges_into_bucket() {
        let view = project_value(json!({
            "config": { "fields": [{ "name": "Unassigned" }, { "name": "Court 1" }] },
            "matches": [
                { "id": "named", "field": "Unassigned", "start_time": "11:00" },
                { "id": "fieldless", "start_time": "10:00" }
            ]
        }));

        let schedules: Vec<(&str, bool, usize)> = view
            .field_schedules
            .iter()
            .map(|s| (s.field.as_str(), s.unassigned, s.matches.len()))
            .collect();
        assert_eq!(schedules, vec![("Court 1", false, 0), ("Unassigned", true, 2)]);

        let bucket = view.field_schedule(UNASSIGNED_FIELD).unwrap();
        assert!(bucket.unassigned);
        let order: Vec<_> = bucket.matches.iter().map(|m| m.id.as_deref()).collect();
        assert_eq!(order, vec![Some("fieldless"), Some("named")]);
    }

    #[test]
    fn test_configured_unassigned_field_without_matches_adds_no_bucket() {
        let view = project_value(json!({
            "config": { "fields": [{ "name": "Unassigned" }] },
            "matches": [{ "field": "Court 1" }]
        }));
        assert!(view.field_schedule(UNASSIGNED_FIELD).is_none());
        assert_eq!(view.field_schedules.len(), 1);
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let view = project_value(json!({
            "config": { "fields": [{ "name": "court" }, { "name": "Court" }, { "name": "court" }] },
            "matches": [{ "field": "Court" }]
        }));

        let fields: Vec<&str> = view
            .field_schedules
            .iter()
            .map(|schedule| schedule.field.as_str())
            .collect();
        assert_eq!(fields, vec!["Court", "court"]);
        assert_eq!(view.field_schedule("Court").unwrap().matches.len(), 1);
    }

    #[test]
    fn test_field_schedules_sorted_by_start_time() {
        let view = project_value(sample_snapshot());

        let court_a: Vec<_> = view
            .field_schedule("Court A")
            .unwrap()
            .matches
            .iter()
            .map(|m| m.id.as_deref())
            .collect();
        assert_eq!(court_a, vec![Some("m2"), Some("m1")]);

        let fields: Vec<&str> = view
            .field_schedules
            .iter()
            .map(|schedule| schedule.field.as_str())
            .collect();
        assert_eq!(fields, vec!["Center Court", "Court A", "Court B", "Unassigned"]);
    }

    #[test]
    fn test_average_duration() {
        let view = project_value(json!({
            "matches": [{ "duration": 30 }, { "duration": 90 }, {}]
        }));
        assert_eq!(view.summary.average_match_duration_minutes, 60);
    }

    #[test]
    fn test_average_duration_rounds() {
        let view = project_value(json!({
            "matches": [{ "duration": 30 }, { "duration": 45 }]
        }));
        assert_eq!(view.summary.average_match_duration_minutes, 38);
    }

    #[test]
    fn test_team_name_lookup() {
        let view = project_value(json!({
            "teams": [{ "id": "t1", "name": "Sharks" }, { "id": "t2" }],
            "matches": [{ "team1_id": "ghost" }]
        }));

        assert_eq!(view.team_name(Some("t1")), "Sharks");
        assert_eq!(view.team_name(Some("ghost")), "TBD");
        assert_eq!(view.team_name(Some("t2")), "TBD");
        assert_eq!(view.team_name(None), "Bye");
        assert_eq!(view.team_name(Some("")), "Bye");
    }

    #[test]
    fn test_team_abbreviation_lookup() {
        let view = project_value(sample_snapshot());

        assert_eq!(view.team_abbreviation(Some("t1")), "SHK");
        assert_eq!(view.team_abbreviation(Some("t2")), "ORC");
        assert_eq!(view.team_abbreviation(Some("ghost")), "TBD");
        assert_eq!(view.team_abbreviation(None), "TBD");
    }

    #[test]
    fn test_match_rows() {
        let view = project_value(sample_snapshot());
        let rows = view.match_rows(&view.playoff_matches);

        let semifinal = &rows[0];
        assert_eq!(semifinal.id.as_deref(), Some("m4"));
        assert_eq!(semifinal.home.name, "Gulls");
        assert_eq!(semifinal.away.name, "Bye");
        assert_eq!(semifinal.away.abbreviation, "TBD");
        assert_eq!(semifinal.field, UNASSIGNED_FIELD);
        assert_eq!(semifinal.phase, StagePhase::Playoff);
        assert_eq!(semifinal.duration_minutes, 60);
        assert!(semifinal.score.is_empty());

        let opener = view.match_row(&view.group_matches[1]);
        assert_eq!(opener.home.abbreviation, "SHK");
        assert_eq!(opener.score.home_points(), Some(2));
        assert_eq!(opener.score.away_points(), Some(1));
    }

    #[test]
    fn test_malformed_teams_rejected() {
        let error = project(Some(&json!({ "teams": "not-an-array" }))).unwrap_err();
        assert_eq!(error.field(), Some("teams"));
        assert!(matches!(error, DraftError::MalformedInput { .. }));
    }

    #[test]
    fn test_project_json() {
        let view = project_json(r#"{"teams":[{"id":"a","name":"Alpha"}]}"#).unwrap();
        assert_eq!(view.summary.team_count, 1);
        assert!(matches!(project_json("{"), Err(DraftError::Parse(_))));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = project_value(json!({ "teams": [{ "id": "t1", "name": "Sharks" }] }));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["summary"]["teamCount"], 1);
        assert_eq!(json["summary"]["averageMatchDurationMinutes"], 0);
        assert_eq!(json["enrichedTeams"][0]["name"], "Sharks");
        assert!(json["enrichedTeams"][0]["players"].is_array());
        assert!(json["fieldSchedules"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_nested_records_serialize_camel_case() {
        let view = project_value(json!({
            "teams": [{ "id": "t1", "name": "Sharks", "short_name": "SHK", "logo_url": "s.png" }],
            "rosters": [{ "team_id": "t1", "first_name": "Ana", "last_name": "Berg" }],
            "matches": [{ "team1_id": "t1", "stage_id": "final", "start_time": "10:00",
                          "score_text": "2-1", "field": "Court 1" }]
        }));
        let json = serde_json::to_value(&view).unwrap();

        let team = &json["enrichedTeams"][0];
        assert_eq!(team["shortName"], "SHK");
        assert_eq!(team["logoUrl"], "s.png");
        assert_eq!(team["players"][0]["teamId"], "t1");
        assert_eq!(team["players"][0]["firstName"], "Ana");

        let playoff = &json["playoffMatches"][0];
        assert_eq!(playoff["team1Id"], "t1");
        assert_eq!(playoff["stageId"], "final");
        assert_eq!(playoff["startTime"], "10:00");
        assert_eq!(playoff["scoreText"], "2-1");
        assert!(playoff.get("start_time").is_none());
        assert_eq!(json["fieldSchedules"][0]["matches"][0]["startTime"], "10:00");
    }

    mod properties {
        use crate::models::projection::project;
        use proptest::prelude::*;
        use serde_json::{json, Value};

        fn match_value() -> impl Strategy<Value = Value> {
            (
                prop::option::of(prop_oneof![
                    Just("group_a".to_string()),
                    Just("semifinal".to_string()),
                    Just("final".to_string()),
                    "[a-z_]{0,8}",
                ]),
                prop::option::of(prop_oneof![
                    Just("Court 1".to_string()),
                    Just("Court 2".to_string()),
                    Just(String::new()),
                ]),
                prop::option::of(0u32..240),
                prop::option::of("[0-2][0-9]:[0-5][0-9]"),
            )
                .prop_map(|(stage_id, field, duration, start_time)| {
                    json!({
                        "stage_id": stage_id,
                        "field": field,
                        "duration": duration,
                        "start_time": start_time,
                    })
                })
        }

        proptest! {
            #[test]
            fn partition_covers_every_match(matches in prop::collection::vec(match_value(), 0..24)) {
                let count = matches.len();
                let view = project(Some(&json!({ "matches": matches }))).unwrap();

                prop_assert_eq!(view.group_matches.len() + view.playoff_matches.len(), count);
                let scheduled: usize = view.field_schedules.iter().map(|s| s.matches.len()).sum();
                prop_assert_eq!(scheduled, count);
            }

            #[test]
            fn projection_is_deterministic(matches in prop::collection::vec(match_value(), 0..24)) {
                let snapshot = json!({ "matches": matches });
                prop_assert_eq!(project(Some(&snapshot)).unwrap(), project(Some(&snapshot)).unwrap());
            }

            #[test]
            fn unassigned_bucket_is_last(matches in prop::collection::vec(match_value(), 1..24)) {
                let view = project(Some(&json!({ "matches": matches }))).unwrap();
                if let Some(position) = view.field_schedules.iter().position(|s| s.unassigned) {
                    prop_assert_eq!(position, view.field_schedules.len() - 1);
                }
            }
        }
    }
}
