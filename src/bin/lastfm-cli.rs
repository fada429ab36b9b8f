use clap::{Parser, Subcommand, ValueEnum};
use lastfm::{ClientConfig, LastFm};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lastfm-cli")]
#[command(about = "Query the Last.fm API and print the results as JSON", long_about = None)]
struct Cli {
    /// Last.fm API key (can also be set via LASTFM_API_KEY env var)
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Number of records to ask for
    #[arg(short, long)]
    limit: Option<u32>,

    /// Minimum milliseconds between two API calls
    #[arg(long, default_value_t = 200)]
    rate_limit_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query a user
    User {
        username: String,
        #[arg(value_enum)]
        method: UserMethod,
    },
    /// Query an artist
    Artist {
        artist: String,
        #[arg(value_enum)]
        method: ArtistMethod,
    },
    /// Query an album
    Album {
        album: String,
        artist: String,
        #[arg(value_enum)]
        method: AlbumMethod,
    },
    /// Query a track
    Track {
        track: String,
        artist: String,
        #[arg(value_enum)]
        method: TrackMethod,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum UserMethod {
    Friends,
    Info,
    LovedTracks,
    RecentTracks,
    Albums,
    Artists,
    Tags,
    Tracks,
    WeeklyAlbums,
    WeeklyArtists,
    WeeklyTracks,
    WeeklyCharts,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ArtistMethod {
    Info,
    Similar,
    Albums,
    Tags,
    Tracks,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AlbumMethod {
    Info,
    Tags,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TrackMethod {
    Info,
    Similar,
    Tags,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::default().with_rate_limit(Duration::from_millis(cli.rate_limit_ms));
    let lastfm = LastFm::with_config(&cli.api_key, config)?;
    let limit = cli.limit;

    match &cli.command {
        Commands::User { username, method } => {
            let user = lastfm.user(username);
            match method {
                UserMethod::Friends => print_json(&user.fetch_friends(limit).await?)?,
                UserMethod::Info => print_json(&user.fetch_info(limit).await?)?,
                UserMethod::LovedTracks => print_json(&user.fetch_loved_tracks(limit).await?)?,
                UserMethod::RecentTracks => print_json(&user.fetch_recent_tracks(limit).await?)?,
                UserMethod::Albums => print_json(&user.fetch_albums(limit).await?)?,
                UserMethod::Artists => print_json(&user.fetch_artists(limit).await?)?,
                UserMethod::Tags => print_json(&user.fetch_tags(limit).await?)?,
                UserMethod::Tracks => print_json(&user.fetch_tracks(limit).await?)?,
                UserMethod::WeeklyAlbums => print_json(&user.fetch_weekly_albums(limit).await?)?,
                UserMethod::WeeklyArtists => {
                    print_json(&user.fetch_weekly_artists(limit).await?)?
                }
                UserMethod::WeeklyTracks => print_json(&user.fetch_weekly_tracks(limit).await?)?,
                UserMethod::WeeklyCharts => print_json(&user.fetch_weekly_charts().await?)?,
            }
        }
        Commands::Artist { artist, method } => {
            let artist = lastfm.artist(artist);
            match method {
                ArtistMethod::Info => print_json(&artist.fetch_info(limit).await?)?,
                ArtistMethod::Similar => print_json(&artist.fetch_similar(limit).await?)?,
                ArtistMethod::Albums => print_json(&artist.fetch_albums(limit).await?)?,
                ArtistMethod::Tags => print_json(&artist.fetch_tags(limit).await?)?,
                ArtistMethod::Tracks => print_json(&artist.fetch_tracks(limit).await?)?,
            }
        }
        Commands::Album {
            album,
            artist,
            method,
        } => {
            let album = lastfm.album(album, artist);
            match method {
                AlbumMethod::Info => print_json(&album.fetch_info(limit).await?)?,
                AlbumMethod::Tags => print_json(&album.fetch_tags(limit).await?)?,
            }
        }
        Commands::Track {
            track,
            artist,
            method,
        } => {
            let track = lastfm.track(track, artist);
            match method {
                TrackMethod::Info => print_json(&track.fetch_info(limit).await?)?,
                TrackMethod::Similar => print_json(&track.fetch_similar(limit).await?)?,
                TrackMethod::Tags => print_json(&track.fetch_tags(limit).await?)?,
            }
        }
    }

    Ok(())
}
