//! Query filters accepted by the listing endpoints.
//!
//! Fields left as `None` are not sent. List fields are sent as one
//! comma-separated value, and dates as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{MatchStatus, Plan, StandingType, Venue};

/// Filters for `competitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionFilters {
    /// Only competitions held in these areas.
    pub areas: Option<Vec<u64>>,
    pub plan: Option<Plan>,
}

/// Filters for `competitions/{id}/teams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeamsFilters {
    /// Starting year of the season, e.g. `2020` for 2020/21.
    pub season: Option<u32>,
    pub stage: Option<String>,
}

/// Filters for `competitions/{id}/standings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsFilters {
    pub standing_type: Option<StandingType>,
    pub season: Option<u32>,
    pub matchday: Option<u32>,
}

/// Filters for `competitions/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionMatchesFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub stage: Option<String>,
    pub status: Option<Vec<MatchStatus>>,
    pub matchday: Option<u32>,
    pub group: Option<String>,
    pub season: Option<u32>,
}

/// Filters for `competitions/{id}/scorers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorersFilters {
    pub limit: Option<u32>,
    pub season: Option<u32>,
}

/// Filters for `matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<Vec<MatchStatus>>,
    /// Competition ids or codes, e.g. `PL`.
    pub competitions: Option<Vec<String>>,
}

/// Filters for `players/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchesFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<Vec<MatchStatus>>,
    pub competitions: Option<Vec<String>>,
    pub limit: Option<u32>,
}

/// Filters for `teams/{id}/matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchesFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub season: Option<u32>,
    pub status: Option<Vec<MatchStatus>>,
    pub venue: Option<Venue>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::encode_filter;

    fn pairs<F: Serialize>(filter: &F) -> Vec<(String, String)> {
        let mut pairs = encode_filter(filter).unwrap();
        pairs.sort();
        pairs
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_default_filters_encode_to_nothing() {
        assert!(pairs(&CompetitionFilters::default()).is_empty());
        assert!(pairs(&CompetitionMatchesFilters::default()).is_empty());
        assert!(pairs(&TeamMatchesFilters::default()).is_empty());
    }

    #[test]
    fn test_competition_filters_areas_only() {
        let filters = CompetitionFilters {
            areas: Some(vec![2001]),
            ..Default::default()
        };
        assert_eq!(pairs(&filters), vec![pair("areas", "2001")]);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let filters = CompetitionMatchesFilters {
            date_from: NaiveDate::from_ymd_opt(2021, 8, 13),
            date_to: NaiveDate::from_ymd_opt(2021, 8, 31),
            status: Some(vec![MatchStatus::Scheduled, MatchStatus::Finished]),
            matchday: Some(3),
            ..Default::default()
        };
        assert_eq!(
            pairs(&filters),
            vec![
                pair("dateFrom", "2021-08-13"),
                pair("dateTo", "2021-08-31"),
                pair("matchday", "3"),
                pair("status", "SCHEDULED,FINISHED"),
            ]
        );
    }

    #[test]
    fn test_standing_type_and_venue() {
        let standings = StandingsFilters {
            standing_type: Some(StandingType::Away),
            ..Default::default()
        };
        assert_eq!(pairs(&standings), vec![pair("standingType", "AWAY")]);

        let team = TeamMatchesFilters {
            venue: Some(Venue::Home),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(pairs(&team), vec![pair("limit", "10"), pair("venue", "HOME")]);
    }

    #[test]
    fn test_competitions_list_is_comma_joined() {
        let filters = MatchFilters {
            competitions: Some(vec!["PL".into(), "2002".into()]),
            ..Default::default()
        };
        assert_eq!(pairs(&filters), vec![pair("competitions", "PL,2002")]);
    }
}
