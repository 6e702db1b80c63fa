//! Path templates for every upstream endpoint.
//!
//! Each accessor is described by one [`Route`]; the client expands it into
//! URL path segments, validating the identifier on the way.

use crate::{Error, Result};

const ID_PLACEHOLDER: &str = "{id}";

/// A relative path template such as `competitions/{id}/teams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    entity: &'static str,
    template: &'static str,
}

impl Route {
    /// Creates a route for `entity` following `template`.
    ///
    /// `entity` names the resource in validation messages.
    pub const fn new(entity: &'static str, template: &'static str) -> Self {
        Self { entity, template }
    }

    /// The path template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Returns `true` if the template contains an `{id}` placeholder.
    pub fn takes_id(&self) -> bool {
        self.template.split('/').any(|s| s == ID_PLACEHOLDER)
    }

    /// Expands the template into path segments.
    ///
    /// The identifier is kept as a single segment so it gets percent-encoded
    /// rather than interpreted as extra path components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the template needs an identifier and
    /// `id` is missing or blank.
    pub fn expand(&self, id: Option<&str>) -> Result<Vec<String>> {
        let id = if self.takes_id() {
            match id.map(str::trim) {
                Some(id) if !id.is_empty() => Some(id),
                _ => {
                    return Err(Error::Validation(format!(
                        "{} identifier is required",
                        self.entity
                    )))
                }
            }
        } else {
            None
        };

        Ok(self
            .template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| match (segment, id) {
                (ID_PLACEHOLDER, Some(id)) => id.to_string(),
                _ => segment.to_string(),
            })
            .collect())
    }
}

pub(crate) const AREA: Route = Route::new("area", "areas/{id}");
pub(crate) const AREAS: Route = Route::new("area", "areas");

pub(crate) const COMPETITION: Route = Route::new("competition", "competitions/{id}");
pub(crate) const COMPETITIONS: Route = Route::new("competition", "competitions");
pub(crate) const COMPETITION_TEAMS: Route = Route::new("competition", "competitions/{id}/teams");
pub(crate) const COMPETITION_STANDINGS: Route =
    Route::new("competition", "competitions/{id}/standings");
pub(crate) const COMPETITION_MATCHES: Route =
    Route::new("competition", "competitions/{id}/matches");
pub(crate) const COMPETITION_SCORERS: Route =
    Route::new("competition", "competitions/{id}/scorers");

pub(crate) const MATCH: Route = Route::new("match", "matches/{id}");
pub(crate) const MATCHES: Route = Route::new("match", "matches");

pub(crate) const PLAYER: Route = Route::new("player", "players/{id}");
pub(crate) const PLAYER_MATCHES: Route = Route::new("player", "players/{id}/matches");

pub(crate) const TEAM: Route = Route::new("team", "teams/{id}");
pub(crate) const TEAM_MATCHES: Route = Route::new("team", "teams/{id}/matches");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_substitutes_id() {
        assert_eq!(
            COMPETITION_TEAMS.expand(Some("2021")).unwrap(),
            vec!["competitions", "2021", "teams"]
        );
    }

    #[test]
    fn test_expand_without_placeholder_ignores_id() {
        assert_eq!(AREAS.expand(None).unwrap(), vec!["areas"]);
        assert!(!MATCHES.takes_id());
    }

    #[test]
    fn test_blank_id_is_validation_error() {
        for id in [None, Some(""), Some("  ")] {
            match PLAYER.expand(id) {
                Err(Error::Validation(msg)) => assert_eq!(msg, "player identifier is required"),
                other => panic!("Expected Validation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_id_is_trimmed() {
        assert_eq!(TEAM.expand(Some(" 18 ")).unwrap(), vec!["teams", "18"]);
    }
}
