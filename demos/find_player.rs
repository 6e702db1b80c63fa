//! Looks up a player and their most recent matches.
//!
//! Reads the API token from `FOOTBALL_API_TOKEN`.
//!
//! Run with: `cargo run --example find_player -- 44`

use football_data::{Client, Error, MatchStatus, PlayerMatchesFilters};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("football_data=debug,find_player=info")
        .init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "44".to_string());
    let client = Client::from_env()?;

    let player = client.players().find(&id).await?;
    println!("=== Player {id} ===");
    println!("Name: {}", player.name.as_deref().unwrap_or("?"));
    println!("Position: {}", player.position.as_deref().unwrap_or("?"));
    println!("Nationality: {}", player.nationality.as_deref().unwrap_or("?"));
    println!("Born: {}", player.date_of_birth.as_deref().unwrap_or("?"));
    println!();

    let filters = PlayerMatchesFilters {
        status: Some(vec![MatchStatus::Finished]),
        limit: Some(5),
        ..Default::default()
    };
    let history = client.players().matches(&id, Some(&filters)).await?;

    println!("=== Last finished matches ===");
    for m in history.matches.unwrap_or_default() {
        let home = m.home_team.and_then(|t| t.name).unwrap_or_default();
        let away = m.away_team.and_then(|t| t.name).unwrap_or_default();
        let full_time = m.score.and_then(|s| s.full_time).unwrap_or_default();
        println!(
            "{} {} {}-{} {}",
            m.utc_date.map(|d| d.date_naive().to_string()).unwrap_or_default(),
            home,
            full_time.home_team.map(|g| g.to_string()).unwrap_or_else(|| "-".into()),
            full_time.away_team.map(|g| g.to_string()).unwrap_or_else(|| "-".into()),
            away,
        );
    }

    Ok(())
}
