use std::io;

use chrono::Local;
use clap::Parser;
use log::info;
use rcharts::app::{App, ConfigBuilder, RunOutcome};
use rcharts::clients::SpotifyClient;
use rcharts::clients::errors::Result;
use rcharts::prompt::DatePrompt;

#[derive(Parser)]
#[command(name = "rcharts")]
#[command(
    version,
    about = "Create a private Spotify playlist from a weekly Billboard Hot 100 chart",
    long_about = None
)]
struct Cli {}

pub async fn run() -> Result<()> {
    Cli::parse();

    info!("Building config ...");
    let spotify = SpotifyClient::try_default()?;
    info!("Authorizing Spotify client ...");
    // CLI prompt may be shown here unless a cached token is still valid
    spotify.authorize_client().await?;
    let config = ConfigBuilder::new().catalog(spotify).build()?;

    let today = Local::now().date_naive();
    let date = DatePrompt::new(io::stdin().lock(), io::stdout()).read_date(today)?;

    let app = App::new(config);
    match app.run(date).await? {
        RunOutcome::Created {
            playlist,
            chart_size,
        } => {
            if playlist.tracks.is_empty() {
                println!("None of the {chart_size} songs could be found on Spotify.");
            } else {
                println!(
                    "Added {} of {chart_size} songs to the playlist '{}'.",
                    playlist.tracks.len(),
                    playlist.name
                );
            }
            println!("Playlist created for date {date}");
        }
        RunOutcome::FetchFailed(err) => {
            println!("{err}");
            println!("No songs found for the given date. Please check the date and try again.");
        }
        RunOutcome::NoEntries => {
            println!("No songs found for the given date. Please check the date and try again.");
        }
    }
    Ok(())
}
