//! apodview - Astronomy Picture of the Day in the terminal

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use apodview::adapters::controllers::{DateRequest, ViewPhase};
use apodview::adapters::presenters::ImagePresenter;
use apodview::application::ports::{DownloadOutcome, MediaPort, FETCH_FAILED_MESSAGE};
use apodview::domain::entities::ImageRecord;
use apodview::domain::value_objects::{ApodDate, ViewAdjustments};
use apodview::infrastructure::{AppController, CompositionRoot};
use apodview::shared::{logging, Config};

#[derive(Parser)]
#[command(name = "apodview", version)]
#[command(about = "Browse NASA's Astronomy Picture of the Day", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/apodview/config.toml or ./apodview.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where history, favorites and the log file are kept
    #[arg(long, global = true, env = "APODVIEW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// API key (overrides config and APOD_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Keep history and favorites in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the picture for a date (default: today)
    Show { date: Option<String> },
    /// Show the picture for a random date
    Random,
    /// List recently viewed pictures
    History {
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
    /// List favorites
    Favorites,
    /// Toggle a date in favorites
    Favorite { date: String },
    /// Save a picture to disk (videos print their link)
    Download {
        date: Option<String>,
        /// Target directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Interactive session
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    config.apply_env();
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    if let Some(key) = &cli.api_key {
        config.feed.api_key = key.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    let log_path = (!cli.ephemeral).then(|| config.log_path());
    logging::init(&config.logging.level, log_path.as_deref());
    info!("apodview v{} starting", env!("CARGO_PKG_VERSION"));

    let root = CompositionRoot::from_config(&config, cli.ephemeral)?;
    let timeout = Duration::from_secs(root.config().feed.timeout_secs.saturating_add(5));
    let presenter = ImagePresenter::new();

    match cli.command {
        Commands::Show { date } => {
            let mut controller = root.controller();
            let request = parse_request(&controller, date.as_deref())?;
            let record = fetch(&mut controller, request, timeout)?;
            print!(
                "{}",
                presenter.present_record(&record, controller.is_current_favorite(), &ViewAdjustments::new())
            );
        }
        Commands::Random => {
            let mut controller = root.controller();
            let record = fetch(&mut controller, DateRequest::Random, timeout)?;
            print!(
                "{}",
                presenter.present_record(&record, controller.is_current_favorite(), &ViewAdjustments::new())
            );
        }
        Commands::History { limit } => {
            let controller = root.controller();
            let entries = controller.history();
            let entries = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];
            let items = presenter.history_items(entries, |r| controller.is_favorite(&r.date));
            print!("{}", presenter.present_list(&items, "No history yet"));
        }
        Commands::Favorites => {
            let controller = root.controller();
            let items = presenter.favorite_items(controller.favorites());
            print!("{}", presenter.present_list(&items, "No favorites yet"));
        }
        Commands::Favorite { date } => {
            let mut controller = root.controller();
            let date = ApodDate::parse_in_range(&date, controller.today())?;

            // Prefer what we already have over another request
            let known = controller
                .favorites()
                .iter()
                .map(|f| &f.record)
                .chain(controller.history().iter().map(|h| &h.record))
                .find(|r| r.date == date)
                .cloned();
            let record = match known {
                Some(record) => record,
                None => fetch(&mut controller, DateRequest::On(date), timeout)?,
            };

            if controller.toggle_favorite_record(&record)? {
                println!("Added {} to favorites.", record.date);
            } else {
                println!("Removed {} from favorites.", record.date);
            }
        }
        Commands::Download { date, out } => {
            let mut controller = root.controller();
            let request = parse_request(&controller, date.as_deref())?;
            let record = fetch(&mut controller, request, timeout)?;
            match root.feed().download(&record, &out)? {
                DownloadOutcome::Saved(path) => println!("Saved {}", path.display()),
                DownloadOutcome::External(url) => println!("Not an image; open {}", url),
            }
        }
        Commands::Browse => {
            let download_dir = std::env::current_dir().context("resolving download directory")?;
            let mut view = root.browse_view(download_dir);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            view.run(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

fn parse_request(controller: &AppController, date: Option<&str>) -> Result<DateRequest> {
    Ok(match date {
        Some(text) => DateRequest::On(ApodDate::parse_in_range(text, controller.today())?),
        None => DateRequest::Today,
    })
}

/// Run one fetch to completion through the controller
fn fetch(controller: &mut AppController, request: DateRequest, timeout: Duration) -> Result<ImageRecord> {
    let ticket = controller.dispatch(request);
    debug!(seq = ticket.seq, date = %ticket.date, "waiting for fetch");

    if !controller.wait_for_latest(timeout) {
        bail!("timed out fetching {}", ticket.date);
    }

    match controller.phase() {
        ViewPhase::Ready => controller
            .current()
            .cloned()
            .ok_or_else(|| anyhow!("no record for {}", ticket.date)),
        _ => bail!("{}", controller.error().unwrap_or(FETCH_FAILED_MESSAGE)),
    }
}
