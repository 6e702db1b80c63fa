//! # football-data - a typed client for the football-data.org API
//!
//! Resource-oriented, read-only access to areas, competitions, matches,
//! players, and teams. Every call issues exactly one authenticated GET request
//! and decodes the JSON answer into the structures in [`types`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use football_data::{Client, CompetitionMatchesFilters, MatchStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), football_data::Error> {
//!     // Reads FOOTBALL_API_TOKEN whenever a request is made.
//!     let client = Client::from_env()?;
//!
//!     let player = client.players().find("44").await?;
//!     println!("{:?} plays as {:?}", player.name, player.position);
//!
//!     let filters = CompetitionMatchesFilters {
//!         status: Some(vec![MatchStatus::Scheduled]),
//!         matchday: Some(1),
//!         ..Default::default()
//!     };
//!     let fixtures = client.competitions().matches("PL", Some(&filters)).await?;
//!     for m in fixtures.matches.unwrap_or_default() {
//!         println!(
//!             "{:?} vs {:?}",
//!             m.home_team.and_then(|t| t.name),
//!             m.away_team.and_then(|t| t.name)
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Optional fields
//!
//! The API leaves fields out, or sends them as `null`, depending on the
//! endpoint. Every field in [`types`] is therefore an `Option`, and `None`
//! always means "not provided", never zero.
//!
//! ## Error Handling
//!
//! ```no_run
//! use football_data::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::from_env()?;
//! match client.teams().find("18").await {
//!     Ok(team) => println!("{:?}", team.name),
//!     Err(Error::Api { status, message, .. }) => {
//!         eprintln!("API said {status}: {message:?}");
//!     }
//!     Err(Error::Validation(msg)) | Err(Error::Configuration(msg)) => {
//!         eprintln!("Request not sent: {msg}");
//!     }
//!     Err(e) => eprintln!("Transport or decode failure: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is retried or cached; wrap the client in your own policy if you
//! need either.

pub mod auth;
mod cancel;
mod client;
mod error;
pub mod filters;
pub mod metadata;
pub mod rate_limit;
mod resources;
mod response;
pub mod routes;
pub mod types;

pub use auth::TokenSource;
pub use cancel::CancellationToken;
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use filters::{
    CompetitionFilters, CompetitionMatchesFilters, CompetitionTeamsFilters, MatchFilters,
    PlayerMatchesFilters, ScorersFilters, StandingsFilters, TeamMatchesFilters,
};
pub use resources::{Areas, Competitions, Matches, Players, Teams};
pub use response::Response;
pub use types::{MatchStatus, Plan, StandingType, Venue};
