use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
}

impl Team {
    /// Display name with the short-name override preferred when present.
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => &self.name,
        }
    }
}

/// Closed status classification. Rendering matches exhaustively so a new
/// variant cannot ship without a corresponding render case.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Finished,
    #[serde(other)]
    Scheduled,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    /// Feed event types we do not render (substitutions, VAR, ...).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub team_id: u64,
    pub minute: u32,
    #[serde(default)]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct HalfTimeScore {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct League {
    pub name: String,
}

/// One row of the scoreboard list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MatchSummary {
    pub id: u64,
    pub home: Team,
    pub away: Team,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
    #[serde(default)]
    pub live_time: Option<String>,
}

/// Full detail record for the right-hand panel. Read-only once decoded.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MatchDetails {
    pub id: u64,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
    #[serde(default)]
    pub live_time: Option<String>,
    pub league: League,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub kickoff: Option<DateTime<Utc>>,
    #[serde(default)]
    pub half_time: Option<HalfTimeScore>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_overrides_full_name() {
        let team = Team {
            id: 1,
            name: "Liverpool FC".to_string(),
            short_name: Some("LIV".to_string()),
        };
        assert_eq!(team.display_name(), "LIV");

        let plain = Team {
            id: 2,
            name: "Everton".to_string(),
            short_name: None,
        };
        assert_eq!(plain.display_name(), "Everton");
    }

    #[test]
    fn decodes_details_from_feed_json() {
        let json = r#"{
            "id": 9901,
            "home_team": {"id": 1, "name": "Liverpool FC", "short_name": "LIV"},
            "away_team": {"id": 2, "name": "Manchester City"},
            "home_score": 2,
            "away_score": 1,
            "status": "live",
            "live_time": "63'",
            "league": {"name": "Premier League"},
            "venue": "Anfield",
            "kickoff": "2026-08-22T16:30:00Z",
            "half_time": {"home": 1, "away": 1},
            "events": [
                {"type": "goal", "team_id": 1, "minute": 12, "player": "Salah"},
                {"type": "yellowCard", "team_id": 2, "minute": 34},
                {"type": "substitution", "team_id": 2, "minute": 46}
            ]
        }"#;
        let details: MatchDetails = serde_json::from_str(json).expect("fixture must decode");
        assert_eq!(details.status, MatchStatus::Live);
        assert_eq!(details.events.len(), 3);
        assert_eq!(details.events[0].kind, EventKind::Goal);
        assert_eq!(details.events[1].kind, EventKind::YellowCard);
        assert_eq!(details.events[1].player, None);
        assert_eq!(details.events[2].kind, EventKind::Other);
        assert_eq!(details.half_time, Some(HalfTimeScore { home: 1, away: 1 }));
    }

    #[test]
    fn unknown_status_decodes_as_scheduled() {
        let json = r#"{"id": 5, "home": {"id": 1, "name": "A"}, "away": {"id": 2, "name": "B"},
                       "status": "postponed"}"#;
        let summary: MatchSummary = serde_json::from_str(json).expect("fixture must decode");
        assert_eq!(summary.status, MatchStatus::Scheduled);
    }
}
