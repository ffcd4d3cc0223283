//! Steam Shortcut Manager - add, list and remove non-Steam game shortcuts.
//!
//! This binary wraps the shortcut-core library and adds SteamGridDB artwork
//! search and download.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::Context;
use output::OutputFormat;
use shortcut_core::{ShortcutError, SteamDirs};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "steam-shortcut-manager")]
#[command(about = "Manage Steam shortcuts for non-Steam games", version)]
struct Args {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Term)]
    output: OutputFormat,

    /// Enable debug logging (also enabled by the DEBUG environment variable)
    #[arg(long, global = true)]
    debug: bool,

    /// Steam root directory (defaults to ~/.steam/steam)
    #[arg(long, global = true)]
    steam_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a Steam shortcut to your library
    Add(commands::add::AddArgs),
    /// List currently registered Steam shortcuts
    List,
    /// Remove a Steam shortcut from your library
    Remove(commands::remove::RemoveArgs),
    /// List current Steam user IDs
    Users,
    /// Search SteamGridDB for images
    Search(commands::search::SearchArgs),
    /// Download SteamGridDB images for a given app
    Download(commands::download::DownloadArgs),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let debug_env = std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty());
    let log_level = if args.debug || debug_env {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let format = args.output;
    if let Err(err) = run(args).await {
        println!("{}", output::render_error(format, &err));
        let code = err
            .downcast_ref::<ShortcutError>()
            .map_or(1, ShortcutError::exit_code);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let steam = match args.steam_dir {
        Some(root) => SteamDirs::new(root),
        None => SteamDirs::discover()?,
    };
    debug!("Steam root: {}", steam.base_dir().display());

    let ctx = Context {
        steam,
        output: args.output,
    };

    match args.command {
        Command::Add(add) => commands::add::run(&ctx, add).await,
        Command::List => commands::list::run(&ctx),
        Command::Remove(remove) => commands::remove::run(&ctx, remove),
        Command::Users => commands::users::run(&ctx),
        Command::Search(search) => commands::search::run(&ctx, search).await,
        Command::Download(download) => commands::download::run(&ctx, download).await,
    }
}
