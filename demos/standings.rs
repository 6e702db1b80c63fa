//! Prints the standings of a competition and the remaining request quota.
//!
//! This example shows how to:
//! - Filter a standings request
//! - Give up on a slow request with a cancellation token
//! - Read rate-limit headers through the low-level `get` call
//!
//! Run with: `cargo run --example standings -- PL`

use std::time::Duration;

use football_data::types::CompetitionStandings;
use football_data::{CancellationToken, Client, Error, StandingType, StandingsFilters};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("football_data=debug,standings=info")
        .init();

    let code = std::env::args().nth(1).unwrap_or_else(|| "PL".to_string());
    let client = Client::from_env()?;

    let token = CancellationToken::new();
    let watchdog = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        watchdog.cancel();
    });

    let filters = StandingsFilters {
        standing_type: Some(StandingType::Total),
        ..Default::default()
    };

    match client
        .competitions()
        .with_cancellation(token)
        .standings(&code, Some(&filters))
        .await
    {
        Ok(standings) => print_tables(&standings),
        Err(Error::Cancelled) => {
            eprintln!("Gave up waiting for {code} standings");
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    println!();
    println!("=== Quota ===");
    let response = client
        .get::<CompetitionStandings, ()>(format!("competitions/{code}/standings"), None)
        .await?;
    println!("Request latency: {:?}", response.latency);
    match response.rate_limit() {
        Some(info) => {
            println!("Requests left this minute: {:?}", info.remaining);
            println!("Counter resets in: {:?}", info.reset_in);
        }
        None => println!("No rate-limit headers returned"),
    }

    Ok(())
}

fn print_tables(standings: &CompetitionStandings) {
    let name = standings
        .competition
        .as_ref()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("?");
    println!("=== {name} ===");

    for standing in standings.standings.iter().flatten() {
        if let Some(group) = &standing.group {
            println!("--- {group} ---");
        }
        for row in standing.table.iter().flatten() {
            println!(
                "{:>2}. {:<30} {:>3} pts ({} played)",
                row.position.unwrap_or_default(),
                row.team.as_ref().and_then(|t| t.name.as_deref()).unwrap_or("?"),
                row.points.unwrap_or_default(),
                row.played_games.unwrap_or_default(),
            );
        }
    }
}
