//! Resource accessor groups.
//!
//! Each group borrows a [`Client`] and maps every method onto exactly one
//! upstream endpoint: validate the identifier, encode the filter, send one
//! GET, decode the body. Obtain them through [`Client::areas`],
//! [`Client::competitions`], and friends.

use crate::{
    cancel::CancellationToken,
    filters::{
        CompetitionFilters, CompetitionMatchesFilters, CompetitionTeamsFilters, MatchFilters,
        PlayerMatchesFilters, ScorersFilters, StandingsFilters, TeamMatchesFilters,
    },
    routes,
    types::{
        Area, AreaList, Competition, CompetitionList, CompetitionMatches, CompetitionScorers,
        CompetitionStandings, CompetitionTeams, MatchDetail, MatchList, Player, PlayerMatches,
        Team, TeamMatches,
    },
    Client, Result,
};

macro_rules! accessor_group {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            client: &'a Client,
            cancel: Option<CancellationToken>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a Client) -> Self {
                Self {
                    client,
                    cancel: None,
                }
            }

            /// Aborts requests made through this group once `token` is cancelled.
            pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
                self.cancel = Some(token);
                self
            }
        }
    };
}

accessor_group! {
    /// Accessors for `areas`.
    Areas
}

accessor_group! {
    /// Accessors for `competitions` and their teams, standings, matches, and scorers.
    Competitions
}

accessor_group! {
    /// Accessors for `matches`.
    Matches
}

accessor_group! {
    /// Accessors for `players`.
    Players
}

accessor_group! {
    /// Accessors for `teams`.
    Teams
}

impl Areas<'_> {
    /// Looks up one area by id.
    pub async fn find(&self, id: &str) -> Result<Area> {
        self.client
            .fetch::<_, ()>(&routes::AREA, Some(id), None, self.cancel.as_ref())
            .await
    }

    /// Lists every area.
    pub async fn list(&self) -> Result<AreaList> {
        self.client
            .fetch::<_, ()>(&routes::AREAS, None, None, self.cancel.as_ref())
            .await
    }
}

impl Competitions<'_> {
    /// Looks up one competition by id or code (e.g. `PL`).
    pub async fn find(&self, id: &str) -> Result<Competition> {
        self.client
            .fetch::<_, ()>(&routes::COMPETITION, Some(id), None, self.cancel.as_ref())
            .await
    }

    /// Lists the competitions available to the account.
    pub async fn list(&self, filters: Option<&CompetitionFilters>) -> Result<CompetitionList> {
        self.client
            .fetch(&routes::COMPETITIONS, None, filters, self.cancel.as_ref())
            .await
    }

    /// Teams taking part in a competition.
    pub async fn teams(
        &self,
        id: &str,
        filters: Option<&CompetitionTeamsFilters>,
    ) -> Result<CompetitionTeams> {
        self.client
            .fetch(&routes::COMPETITION_TEAMS, Some(id), filters, self.cancel.as_ref())
            .await
    }

    /// Standings tables of a competition.
    pub async fn standings(
        &self,
        id: &str,
        filters: Option<&StandingsFilters>,
    ) -> Result<CompetitionStandings> {
        self.client
            .fetch(&routes::COMPETITION_STANDINGS, Some(id), filters, self.cancel.as_ref())
            .await
    }

    /// Matches of a competition.
    pub async fn matches(
        &self,
        id: &str,
        filters: Option<&CompetitionMatchesFilters>,
    ) -> Result<CompetitionMatches> {
        self.client
            .fetch(&routes::COMPETITION_MATCHES, Some(id), filters, self.cancel.as_ref())
            .await
    }

    /// Top scorers of a competition.
    pub async fn scorers(
        &self,
        id: &str,
        filters: Option<&ScorersFilters>,
    ) -> Result<CompetitionScorers> {
        self.client
            .fetch(&routes::COMPETITION_SCORERS, Some(id), filters, self.cancel.as_ref())
            .await
    }
}

impl Matches<'_> {
    /// Looks up one match, together with head-to-head statistics.
    pub async fn find(&self, id: &str) -> Result<MatchDetail> {
        self.client
            .fetch::<_, ()>(&routes::MATCH, Some(id), None, self.cancel.as_ref())
            .await
    }

    /// Lists matches across competitions.
    pub async fn list(&self, filters: Option<&MatchFilters>) -> Result<MatchList> {
        self.client
            .fetch(&routes::MATCHES, None, filters, self.cancel.as_ref())
            .await
    }
}

impl Players<'_> {
    /// Looks up one player by id.
    pub async fn find(&self, id: &str) -> Result<Player> {
        self.client
            .fetch::<_, ()>(&routes::PLAYER, Some(id), None, self.cancel.as_ref())
            .await
    }

    /// Matches a player took part in.
    pub async fn matches(
        &self,
        id: &str,
        filters: Option<&PlayerMatchesFilters>,
    ) -> Result<PlayerMatches> {
        self.client
            .fetch(&routes::PLAYER_MATCHES, Some(id), filters, self.cancel.as_ref())
            .await
    }
}

impl Teams<'_> {
    /// Looks up one team, including its squad and active competitions.
    pub async fn find(&self, id: &str) -> Result<Team> {
        self.client
            .fetch::<_, ()>(&routes::TEAM, Some(id), None, self.cancel.as_ref())
            .await
    }

    /// Matches of a team.
    pub async fn matches(
        &self,
        id: &str,
        filters: Option<&TeamMatchesFilters>,
    ) -> Result<TeamMatches> {
        self.client
            .fetch(&routes::TEAM_MATCHES, Some(id), filters, self.cancel.as_ref())
            .await
    }
}
