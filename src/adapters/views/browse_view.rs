//! BrowseView - interactive line-based view over the controller
//!
//! Reads one command per line, forwards intents to the controller and
//! prints what the presenter makes of the resulting state. Image
//! adjustments live here and nowhere else.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::adapters::controllers::{DateRequest, ViewStateController};
use crate::adapters::presenters::ImagePresenter;
use crate::application::ports::{ClockPort, DownloadOutcome, FeedPort, MediaPort};
use crate::domain::repositories::{FavoritesRepository, HistoryRepository};
use crate::domain::value_objects::{Adjustment, ViewAdjustments};

const HELP: &str = "\
commands:
  today                 today's picture
  date YYYY-MM-DD       picture for a date
  random                picture for a random date
  fav                   toggle favorite for the current picture
  history [N]           recently viewed
  favorites             saved pictures
  brightness|contrast|saturation|zoom N
                        adjust the view (percent)
  reset                 neutral adjustments
  download              save the current image
  share                 print a shareable line
  show                  redraw (and pick up finished loads)
  help                  this text
  quit                  leave";

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    Today,
    Date(String),
    Random,
    Favorite,
    History(Option<usize>),
    Favorites,
    Adjust(Adjustment, u16),
    Reset,
    Download,
    Share,
    Show,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or("").to_ascii_lowercase();
        let arg = parts.next();

        let command = match head.as_str() {
            "today" | "t" => BrowseCommand::Today,
            "date" | "d" => match arg {
                Some(date) => BrowseCommand::Date(date.to_string()),
                None => return Err("usage: date YYYY-MM-DD".to_string()),
            },
            "random" | "r" => BrowseCommand::Random,
            "fav" | "favorite" | "f" => BrowseCommand::Favorite,
            "history" | "h" => {
                let limit = match arg {
                    Some(n) => Some(n.parse().map_err(|_| format!("not a number: {}", n))?),
                    None => None,
                };
                BrowseCommand::History(limit)
            }
            "favorites" | "favs" => BrowseCommand::Favorites,
            "reset" => BrowseCommand::Reset,
            "download" | "save" => BrowseCommand::Download,
            "share" => BrowseCommand::Share,
            "show" | "" => BrowseCommand::Show,
            "help" | "?" => BrowseCommand::Help,
            "quit" | "q" | "exit" => BrowseCommand::Quit,
            other => match Adjustment::from_name(other) {
                Some(adjustment) => {
                    let value = arg.ok_or_else(|| format!("usage: {} N", other))?;
                    let value: u32 = value
                        .trim_end_matches('%')
                        .parse()
                        .map_err(|_| format!("not a number: {}", value))?;
                    // Out-of-range values are clamped later
                    BrowseCommand::Adjust(adjustment, u16::try_from(value).unwrap_or(u16::MAX))
                }
                None => return Err(format!("unknown command '{}', try 'help'", other)),
            },
        };

        Ok(command)
    }
}

/// Whether the loop should keep reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive browsing session
pub struct BrowseView<F, H, V, C>
where
    F: FeedPort + MediaPort + 'static,
    H: HistoryRepository,
    V: FavoritesRepository,
    C: ClockPort,
{
    controller: ViewStateController<F, H, V, C>,
    presenter: ImagePresenter,
    adjustments: ViewAdjustments,
    download_dir: PathBuf,
    fetch_timeout: Duration,
}

impl<F, H, V, C> BrowseView<F, H, V, C>
where
    F: FeedPort + MediaPort + 'static,
    H: HistoryRepository,
    V: FavoritesRepository,
    C: ClockPort,
{
    pub fn new(controller: ViewStateController<F, H, V, C>, download_dir: PathBuf) -> Self {
        Self {
            controller,
            presenter: ImagePresenter::new(),
            adjustments: ViewAdjustments::new(),
            download_dir,
            fetch_timeout: Duration::from_secs(30),
        }
    }

    /// How long a command waits for its fetch before handing back the prompt
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn controller(&self) -> &ViewStateController<F, H, V, C> {
        &self.controller
    }

    pub fn adjustments(&self) -> &ViewAdjustments {
        &self.adjustments
    }

    /// Mount the controller and read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        if self.controller.mount().is_some() {
            self.settle(out)?;
        }

        let mut lines = input.lines();
        loop {
            write!(out, "apod> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };

            if self.handle_line(&line?, out)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one input line
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        // Pick up anything that finished while we were waiting for input
        self.controller.poll();

        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "browse command");

        match command {
            BrowseCommand::Today => {
                self.controller.dispatch(DateRequest::Today);
                self.settle(out)?;
            }
            BrowseCommand::Date(input) => match self.controller.select_date_str(&input) {
                Ok(_) => self.settle(out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            BrowseCommand::Random => {
                self.controller.request_random();
                self.settle(out)?;
            }
            BrowseCommand::Favorite => match self.controller.toggle_favorite() {
                Ok(true) => writeln!(out, "Added to favorites.")?,
                Ok(false) => writeln!(out, "Removed from favorites.")?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            BrowseCommand::History(limit) => {
                self.controller.refresh();
                let entries = self.controller.history();
                let entries = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];
                let items = self
                    .presenter
                    .history_items(entries, |r| self.controller.is_favorite(&r.date));
                write!(out, "{}", self.presenter.present_list(&items, "No history yet"))?;
            }
            BrowseCommand::Favorites => {
                self.controller.refresh();
                let items = self.presenter.favorite_items(self.controller.favorites());
                write!(out, "{}", self.presenter.present_list(&items, "No favorites yet"))?;
            }
            BrowseCommand::Adjust(adjustment, value) => {
                let stored = self.adjustments.set(adjustment, value);
                writeln!(out, "{:?} {}%", adjustment, stored)?;
            }
            BrowseCommand::Reset => {
                self.adjustments.reset();
                writeln!(out, "Adjustments reset.")?;
            }
            BrowseCommand::Download => self.download(out)?,
            BrowseCommand::Share => match self.controller.current() {
                Some(record) => writeln!(out, "{}", self.presenter.share_text(record))?,
                None => writeln!(out, "Nothing to share yet.")?,
            },
            BrowseCommand::Show => self.render(out)?,
            BrowseCommand::Help => writeln!(out, "{}", HELP)?,
            BrowseCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Wait for the latest fetch, then draw whatever state we are in
    fn settle<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Loading {}...", self.controller.selected_date())?;
        if !self.controller.wait_for_latest(self.fetch_timeout) {
            writeln!(out, "Still loading; type 'show' to check again.")?;
            return Ok(());
        }
        self.render(out)
    }

    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let text = self.presenter.present_state(
            self.controller.state(),
            self.controller.is_current_favorite(),
            &self.adjustments,
        );
        writeln!(out, "{}", text.trim_end())
    }

    fn download<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(record) = self.controller.current().cloned() else {
            return writeln!(out, "Nothing to download yet.");
        };

        match self.controller.feed().download(&record, &self.download_dir) {
            Ok(DownloadOutcome::Saved(path)) => writeln!(out, "Saved {}", path.display()),
            Ok(DownloadOutcome::External(url)) => writeln!(out, "Open in a browser: {}", url),
            Err(e) => writeln!(out, "Download failed: {}", e),
        }
    }
}
