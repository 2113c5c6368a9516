/// Stylus Console - drive a playback queue from the terminal
use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stylus_console::{load_playlist, run, ConsoleConfig, SimulatedPlayer};
use stylus_playback::{PlayMode, PlaybackController, StatusChange};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stylus-console")]
#[command(about = "Drive a Stylus playback queue from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON playlist to enqueue at startup
    #[arg(short, long)]
    playlist: Option<PathBuf>,

    /// Initial play mode (repeat, loop, random)
    #[arg(short, long)]
    mode: Option<PlayMode>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.playback.play_mode = mode;
    }
    if let Some(playlist) = cli.playlist {
        config.playlist = Some(playlist);
    }
    config.validate()?;

    // Initialize tracing; logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut controller = PlaybackController::build(config.playback.clone(), SimulatedPlayer::new);

    if let Some(path) = &config.playlist {
        let tracks = load_playlist(path)?;
        controller.add_all_to_queue(tracks);
    }

    controller.add_status_listener(|change: &StatusChange| {
        let track = change.track_id.as_deref().unwrap_or("-");
        match &change.error {
            Some(error) => println!("  ~ {:?} [{}]: {}", change.status, track, error),
            None => println!("  ~ {:?} [{}]", change.status, track),
        }
    });

    tracing::info!(
        mode = %controller.get_play_mode(),
        tracks = controller.queue_len(),
        "Console ready"
    );

    let stdin = io::stdin();
    let mut out = io::stdout();
    run(&mut controller, stdin.lock(), &mut out).context("console session failed")?;

    Ok(())
}
