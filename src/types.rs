//! Records returned by the football-data.org API.
//!
//! The API omits or nulls fields inconsistently depending on which endpoint a
//! record is embedded in, so every field is optional: a missing or `null`
//! field decodes to `None`, never to a zero value. Unknown fields are
//! ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The filters the API echoes back on collection responses.
pub type EchoedFilters = Map<String, Value>;

/// State of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Canceled,
    Awarded,
    /// A status this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Which games a standings table counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StandingType {
    Total,
    Home,
    Away,
    #[serde(other)]
    Unknown,
}

/// Subscription tier a competition is available on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    TierOne,
    TierTwo,
    TierThree,
    TierFour,
    #[serde(other)]
    Unknown,
}

/// Home or away, from the point of view of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Venue {
    Home,
    Away,
}

/// Outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchWinner {
    HomeTeam,
    AwayTeam,
    Draw,
    #[serde(other)]
    Unknown,
}

/// A country or continent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub ensign_url: Option<String>,
    pub parent_area_id: Option<u64>,
    pub parent_area: Option<String>,
    pub child_areas: Option<Vec<Area>>,
}

/// A league or cup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: Option<u64>,
    pub area: Option<Area>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub emblem_url: Option<String>,
    pub plan: Option<Plan>,
    pub current_season: Option<Season>,
    pub number_of_available_seasons: Option<u32>,
    pub seasons: Option<Vec<Season>>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// One season of a competition.
///
/// Season dates are kept as the API sends them; depending on the endpoint
/// they are either plain dates or full timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: Option<u64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current_matchday: Option<u32>,
    pub winner: Option<Winner>,
    pub available_stages: Option<Vec<String>>,
}

/// The team that won a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest_url: Option<String>,
}

/// A club or national team.
///
/// Inside a match the team also carries its coach, captain, lineup, and
/// bench.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Option<u64>,
    pub area: Option<Area>,
    pub active_competitions: Option<Vec<Competition>>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub founded: Option<u32>,
    pub club_colors: Option<String>,
    pub venue: Option<String>,
    pub squad: Option<Vec<Player>>,
    pub coach: Option<Coach>,
    pub captain: Option<Player>,
    pub lineup: Option<Vec<Player>>,
    pub bench: Option<Vec<Player>>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub shirt_number: Option<u32>,
    pub role: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Option<u64>,
    pub competition: Option<Competition>,
    pub season: Option<Season>,
    pub utc_date: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
    pub minute: Option<u32>,
    pub attendance: Option<u32>,
    pub venue: Option<String>,
    pub matchday: Option<u32>,
    pub stage: Option<String>,
    pub group: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub home_team: Option<Team>,
    pub away_team: Option<Team>,
    pub score: Option<Score>,
    pub goals: Option<Vec<Goal>>,
    pub bookings: Option<Vec<Booking>>,
    pub substitutions: Option<Vec<Substitution>>,
    pub referees: Option<Vec<Referee>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub winner: Option<MatchWinner>,
    pub duration: Option<String>,
    pub full_time: Option<ScoreLine>,
    pub half_time: Option<ScoreLine>,
    pub extra_time: Option<ScoreLine>,
    pub penalties: Option<ScoreLine>,
}

/// Goals per side for one period of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub home_team: Option<u32>,
    pub away_team: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub minute: Option<u32>,
    pub extra_time: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub team: Option<Team>,
    pub scorer: Option<Player>,
    pub assist: Option<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub minute: Option<u32>,
    pub team: Option<Team>,
    pub player: Option<Player>,
    pub card: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub minute: Option<u32>,
    pub team: Option<Team>,
    pub player_out: Option<Player>,
    pub player_in: Option<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub nationality: Option<String>,
}

/// Previous meetings between the two teams of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    pub number_of_matches: Option<u32>,
    pub total_goals: Option<u32>,
    pub home_team: Option<HeadToHeadRecord>,
    pub away_team: Option<HeadToHeadRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub wins: Option<u32>,
    pub draws: Option<u32>,
    pub losses: Option<u32>,
}

/// One table of a competition's standings (total, home, or away; per group).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub stage: Option<String>,
    #[serde(rename = "type")]
    pub standing_type: Option<StandingType>,
    pub group: Option<String>,
    pub table: Option<Vec<TableEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub position: Option<u32>,
    pub team: Option<Team>,
    pub played_games: Option<u32>,
    pub form: Option<String>,
    pub won: Option<u32>,
    pub draw: Option<u32>,
    pub lost: Option<u32>,
    pub points: Option<i32>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub goal_difference: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorer {
    pub player: Option<Player>,
    pub team: Option<Team>,
    pub number_of_goals: Option<u32>,
}

// Response envelopes.

/// Response of `GET areas`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaList {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub areas: Option<Vec<Area>>,
}

/// Response of `GET competitions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionList {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub competitions: Option<Vec<Competition>>,
}

/// Response of `GET competitions/{id}/teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeams {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub competition: Option<Competition>,
    pub season: Option<Season>,
    pub teams: Option<Vec<Team>>,
}

/// Response of `GET competitions/{id}/standings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStandings {
    pub filters: Option<EchoedFilters>,
    pub competition: Option<Competition>,
    pub season: Option<Season>,
    pub standings: Option<Vec<Standing>>,
}

/// Response of `GET competitions/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionMatches {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub competition: Option<Competition>,
    pub matches: Option<Vec<Match>>,
}

/// Response of `GET competitions/{id}/scorers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionScorers {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub competition: Option<Competition>,
    pub season: Option<Season>,
    pub scorers: Option<Vec<Scorer>>,
}

/// Response of `GET matches/{id}`: the match plus head-to-head statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    #[serde(rename = "head2head")]
    pub head_to_head: Option<HeadToHead>,
    #[serde(rename = "match")]
    pub fixture: Option<Match>,
}

/// Response of `GET matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchList {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub matches: Option<Vec<Match>>,
}

/// Response of `GET players/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatches {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub player: Option<Player>,
    pub matches: Option<Vec<Match>>,
}

/// Response of `GET teams/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatches {
    pub count: Option<u32>,
    pub filters: Option<EchoedFilters>,
    pub matches: Option<Vec<Match>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_absent_and_null_fields_decode_to_none() {
        let area: Area = serde_json::from_str(
            r#"{
                "id": 2000,
                "name": "Afghanistan",
                "countryCode": "AFG",
                "ensignUrl": null,
                "parentAreaId": 2014,
                "parentArea": "Asia",
                "childAreas": []
            }"#,
        )
        .unwrap();

        assert_eq!(
            area,
            Area {
                id: Some(2000),
                name: Some("Afghanistan".into()),
                country_code: Some("AFG".into()),
                ensign_url: None,
                parent_area_id: Some(2014),
                parent_area: Some("Asia".into()),
                child_areas: Some(vec![]),
            }
        );
    }

    #[test]
    fn test_season_winner() {
        let season: Season = serde_json::from_str(
            r#"{
                "id": 4,
                "startDate": "2017-08-11",
                "endDate": "2018-05-20",
                "winner": {"id": 678, "name": "AFC Ajax", "shortName": "Ajax", "tla": "AJA", "crestUrl": null}
            }"#,
        )
        .unwrap();

        assert_eq!(
            season.winner,
            Some(Winner {
                id: Some(678),
                name: Some("AFC Ajax".into()),
                short_name: Some("Ajax".into()),
                tla: Some("AJA".into()),
                crest_url: None,
            })
        );
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let line: ScoreLine =
            serde_json::from_str(r#"{"homeTeam": 0, "awayTeam": null}"#).unwrap();
        assert_eq!(line.home_team, Some(0));
        assert_eq!(line.away_team, None);
    }

    #[test]
    fn test_unknown_enum_values_do_not_fail() {
        let m: Match = serde_json::from_str(r#"{"id": 1, "status": "ABANDONED_BY_ALIENS"}"#).unwrap();
        assert_eq!(m.status, Some(MatchStatus::Unknown));

        let c: Competition = serde_json::from_str(r#"{"plan": "TIER_NINE"}"#).unwrap();
        assert_eq!(c.plan, Some(Plan::Unknown));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let coach: Coach =
            serde_json::from_str(r#"{"id": 7, "favouriteFormation": "4-4-2"}"#).unwrap();
        assert_eq!(coach.id, Some(7));
        assert_eq!(coach.name, None);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(MatchStatus::InPlay).unwrap(),
            Value::String("IN_PLAY".into())
        );
        assert_eq!(
            serde_json::to_value(Plan::TierOne).unwrap(),
            Value::String("TIER_ONE".into())
        );
    }

    #[test]
    fn test_standing_type_and_goal_kind_renames() {
        let standing: Standing =
            serde_json::from_str(r#"{"stage": "REGULAR_SEASON", "type": "HOME", "group": null}"#)
                .unwrap();
        assert_eq!(standing.standing_type, Some(StandingType::Home));
        assert_eq!(standing.group, None);

        let goal: Goal = serde_json::from_str(r#"{"minute": 23, "type": "PENALTY"}"#).unwrap();
        assert_eq!(goal.kind.as_deref(), Some("PENALTY"));
    }
}
