//! ViewStateController - Drives fetches, history and favorites for a view
//!
//! Phases: `Idle -> Loading -> {Ready, Failed}`, and back to `Loading` on
//! every new date intent. Fetches run on worker threads; completions come
//! back over a channel and are applied on the owner's thread by `poll` or
//! `wait_for_latest`. Every fetch carries a sequence number and only the
//! latest one issued may change the state.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::application::ports::{ClockPort, FeedPort, FetchError};
use crate::application::use_cases::FetchImageUseCase;
use crate::domain::entities::{FavoriteEntry, HistoryEntry, ImageRecord};
use crate::domain::errors::DomainError;
use crate::domain::repositories::{FavoritesRepository, HistoryRepository};
use crate::domain::value_objects::ApodDate;

/// Where the view is in its fetch cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is outstanding
    Loading,
    /// Last fetch succeeded
    Ready,
    /// Last fetch failed
    Failed,
}

/// Snapshot of what the view should show
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub phase: ViewPhase,
    /// Record on display. Cleared when a fetch fails.
    pub record: Option<ImageRecord>,
    /// User-facing error text while `Failed`
    pub error: Option<String>,
    /// Date the user asked for most recently
    pub selected_date: ApodDate,
}

/// A date intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRequest {
    Today,
    On(ApodDate),
    Random,
}

/// Handle for a fetch that has been started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub date: ApodDate,
}

/// Result of a worker fetch, tagged with its sequence number
struct Completion {
    seq: u64,
    result: Result<ImageRecord, FetchError>,
}

/// Controller for the image view
pub struct ViewStateController<F, H, V, C>
where
    F: FeedPort + 'static,
    H: HistoryRepository,
    V: FavoritesRepository,
    C: ClockPort,
{
    fetch_use_case: FetchImageUseCase<F>,
    history: H,
    favorites: V,
    clock: C,
    rng: StdRng,
    state: ViewState,
    /// Highest sequence number issued so far
    latest_seq: u64,
    /// Sequence number whose result is on display; each is applied once
    applied_seq: u64,
    /// Dispatched fetches whose completion has not been received
    in_flight: usize,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl<F, H, V, C> ViewStateController<F, H, V, C>
where
    F: FeedPort + 'static,
    H: HistoryRepository,
    V: FavoritesRepository,
    C: ClockPort,
{
    /// Create a new controller in the `Idle` phase
    pub fn new(feed: Arc<F>, history: H, favorites: V, clock: C) -> Self {
        let (tx, rx) = mpsc::channel();
        let selected_date = ApodDate::today(clock.today());

        Self {
            fetch_use_case: FetchImageUseCase::new(feed),
            history,
            favorites,
            clock,
            rng: StdRng::from_entropy(),
            state: ViewState {
                phase: ViewPhase::Idle,
                record: None,
                error: None,
                selected_date,
            },
            latest_seq: 0,
            applied_seq: 0,
            in_flight: 0,
            tx,
            rx,
        }
    }

    /// Use a fixed seed for random dates
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.phase
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.state.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn selected_date(&self) -> ApodDate {
        self.state.selected_date
    }

    pub fn is_loading(&self) -> bool {
        self.state.phase == ViewPhase::Loading
    }

    /// Highest sequence number issued so far (0 before the first fetch)
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Dispatched fetches not yet received back
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        self.favorites.entries()
    }

    pub fn is_favorite(&self, date: &ApodDate) -> bool {
        self.favorites.is_favorite(date)
    }

    /// Whether the record on display is a favorite
    pub fn is_current_favorite(&self) -> bool {
        self.current()
            .map(|r| self.favorites.is_favorite(&r.date))
            .unwrap_or(false)
    }

    /// Feed the controller fetches from
    pub fn feed(&self) -> &Arc<F> {
        self.fetch_use_case.feed()
    }

    // ------------------------------------------------------------------
    // Date intents
    // ------------------------------------------------------------------

    /// First load: fetch today's entry. Does nothing once the view has left `Idle`.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.state.phase != ViewPhase::Idle {
            return None;
        }
        Some(self.dispatch(DateRequest::Today))
    }

    /// Fetch a specific date, rejecting dates outside the feed range
    pub fn select_date(&mut self, date: NaiveDate) -> Result<FetchTicket, DomainError> {
        let date = ApodDate::new(date, self.clock.today())?;
        Ok(self.dispatch(DateRequest::On(date)))
    }

    /// Same as `select_date`, from user text
    pub fn select_date_str(&mut self, input: &str) -> Result<FetchTicket, DomainError> {
        let date = ApodDate::parse_in_range(input, self.clock.today())?;
        Ok(self.dispatch(DateRequest::On(date)))
    }

    /// Fetch a random date
    pub fn request_random(&mut self) -> FetchTicket {
        self.dispatch(DateRequest::Random)
    }

    /// Enter `Loading` for a request and issue its sequence number.
    ///
    /// Callers that perform the fetch themselves hand the result back to
    /// `complete`. Use `dispatch` to fetch on a worker thread instead.
    pub fn begin(&mut self, request: DateRequest) -> FetchTicket {
        let today = self.clock.today();
        let date = match request {
            DateRequest::Today => ApodDate::today(today),
            DateRequest::On(date) => date,
            DateRequest::Random => FetchImageUseCase::<F>::resolve_date(None, today, &mut self.rng),
        };

        self.latest_seq += 1;
        let ticket = FetchTicket {
            seq: self.latest_seq,
            date,
        };

        self.state.phase = ViewPhase::Loading;
        self.state.error = None;
        self.state.selected_date = date;

        debug!(seq = ticket.seq, date = %date, "fetch started");
        ticket
    }

    /// `begin`, then run the fetch on a worker thread
    pub fn dispatch(&mut self, request: DateRequest) -> FetchTicket {
        let ticket = self.begin(request);
        let today = self.clock.today();
        let use_case = self.fetch_use_case.clone();
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name(format!("apod-fetch-{}", ticket.seq))
            .spawn(move || {
                let result = use_case.execute(ticket.date, today);
                // Receiver only goes away with the controller
                let _ = tx.send(Completion {
                    seq: ticket.seq,
                    result,
                });
            });

        match spawned {
            Ok(_) => self.in_flight += 1,
            Err(e) => {
                warn!(seq = ticket.seq, error = %e, "could not start fetch worker");
                self.complete(ticket.seq, Err(FetchError::Network(e.to_string())));
            }
        }

        ticket
    }

    /// Apply a fetch result. Returns false if a newer fetch has been issued
    /// since, or this one was already applied, in which case the result is
    /// dropped.
    pub fn complete(&mut self, seq: u64, result: Result<ImageRecord, FetchError>) -> bool {
        if seq != self.latest_seq || seq == self.applied_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale fetch result");
            return false;
        }
        self.applied_seq = seq;

        match result {
            Ok(record) => {
                info!(seq, date = %record.date, title = %record.title, "image ready");
                if let Err(e) = self.history.record(&record, self.clock.now()) {
                    warn!(date = %record.date, error = %e, "failed to record history");
                }
                self.state.phase = ViewPhase::Ready;
                self.state.selected_date = record.date;
                self.state.error = None;
                self.state.record = Some(record);
            }
            Err(e) => {
                warn!(seq, date = %self.state.selected_date, error = %e, "fetch failed");
                self.state.phase = ViewPhase::Failed;
                self.state.error = Some(e.user_message().to_string());
                self.state.record = None;
            }
        }

        true
    }

    /// Apply every completion that has arrived. Returns how many changed the state.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.complete(completion.seq, completion.result) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until the latest fetch has been applied or `timeout` passes.
    /// Returns true if the view is no longer loading.
    pub fn wait_for_latest(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        while self.state.phase == ViewPhase::Loading {
            if self.in_flight == 0 {
                // Loading from a `begin` the caller has not completed yet
                return false;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(completion) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.complete(completion.seq, completion.result);
                }
                Err(RecvTimeoutError::Timeout) => {
                    debug!(seq = self.latest_seq, "timed out waiting for fetch");
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }

        true
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Toggle the record on display. Returns the new membership.
    pub fn toggle_favorite(&mut self) -> Result<bool, DomainError> {
        let record = self
            .state
            .record
            .clone()
            .ok_or_else(|| DomainError::InvalidState("no image loaded".to_string()))?;
        self.toggle_favorite_record(&record)
    }

    /// Toggle any record (e.g. one picked from the history list)
    pub fn toggle_favorite_record(&mut self, record: &ImageRecord) -> Result<bool, DomainError> {
        let now_favorite = self.favorites.toggle(record, self.clock.now())?;
        info!(date = %record.date, favorite = now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// Remove a favorite by date
    pub fn remove_favorite(&mut self, date: &ApodDate) -> Result<(), DomainError> {
        self.favorites.remove(date)
    }

    /// Re-read history and favorites from storage
    pub fn refresh(&mut self) {
        self.history.init();
        self.favorites.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::MemoryStoreGateway;
    use crate::application::ports::{FixedClock, KeyValueStore, StorageError};
    use crate::application::services::{FavoritesSet, HistoryLog};
    use crate::domain::entities::MediaType;
    use crate::domain::repositories::{NullFavoritesRepository, NullHistoryRepository};
    use parking_lot::Mutex;
    use std::collections::HashMap;

    /// Feed with canned answers; unknown dates get a 404
    #[derive(Default)]
    struct ScriptedFeed {
        answers: Mutex<HashMap<ApodDate, Result<ImageRecord, FetchError>>>,
        delays: Mutex<HashMap<ApodDate, Duration>>,
    }

    impl ScriptedFeed {
        fn answer(self, record: ImageRecord) -> Self {
            self.answers.lock().insert(record.date, Ok(record));
            self
        }

        fn fail(self, date: &str, status: u16) -> Self {
            self.answers
                .lock()
                .insert(date.parse().unwrap(), Err(FetchError::Status { status }));
            self
        }

        fn delay(self, date: &str, delay: Duration) -> Self {
            self.delays.lock().insert(date.parse().unwrap(), delay);
            self
        }
    }

    impl FeedPort for ScriptedFeed {
        fn fetch(&self, date: ApodDate) -> Result<ImageRecord, FetchError> {
            let delay = self.delays.lock().get(&date).copied();
            if let Some(delay) = delay {
                thread::sleep(delay);
            }
            self.answers
                .lock()
                .get(&date)
                .cloned()
                .unwrap_or(Err(FetchError::Status { status: 404 }))
        }
    }

    fn record(date: &str, title: &str) -> ImageRecord {
        ImageRecord {
            date: date.parse().unwrap(),
            title: title.to_string(),
            explanation: String::new(),
            url: format!("http://x/{}.jpg", date),
            hdurl: None,
            media_type: MediaType::Image,
            copyright: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    type TestController =
        ViewStateController<ScriptedFeed, HistoryLog<MemoryStoreGateway>, FavoritesSet<MemoryStoreGateway>, FixedClock>;

    fn controller(feed: ScriptedFeed) -> (TestController, Arc<MemoryStoreGateway>) {
        let store = Arc::new(MemoryStoreGateway::new());
        let controller = ViewStateController::new(
            Arc::new(feed),
            HistoryLog::new(store.clone()),
            FavoritesSet::new(store.clone()),
            FixedClock::on(today()),
        )
        .with_seed(5);
        (controller, store)
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_starts_idle() {
        let (c, _) = controller(ScriptedFeed::default());
        assert_eq!(c.phase(), ViewPhase::Idle);
        assert_eq!(c.selected_date().to_string(), "2024-06-01");
        assert!(c.current().is_none());
    }

    #[test]
    fn test_mount_fetches_today() {
        let feed = ScriptedFeed::default().answer(record("2024-06-01", "Today"));
        let (mut c, _) = controller(feed);

        let ticket = c.mount().unwrap();
        assert_eq!(ticket.date.to_string(), "2024-06-01");
        assert_eq!(c.phase(), ViewPhase::Loading);

        assert!(c.wait_for_latest(WAIT));
        assert_eq!(c.phase(), ViewPhase::Ready);
        assert_eq!(c.current().unwrap().title, "Today");
        assert_eq!(c.history().len(), 1);

        // Only the first mount fetches
        assert!(c.mount().is_none());
    }

    #[test]
    fn test_ready_record_lands_in_history() {
        let feed = ScriptedFeed::default().answer(record("2020-01-01", "T"));
        let (mut c, _) = controller(feed);

        c.select_date_str("2020-01-01").unwrap();
        assert!(c.wait_for_latest(WAIT));

        assert_eq!(c.phase(), ViewPhase::Ready);
        let shown = c.current().unwrap();
        assert_eq!(shown.title, "T");
        assert_eq!(shown.url, "http://x/2020-01-01.jpg");
        assert_eq!(c.history().len(), 1);
        assert_eq!(c.history()[0].record, *shown);
    }

    #[test]
    fn test_failure_leaves_history_alone() {
        let feed = ScriptedFeed::default()
            .answer(record("2020-01-01", "T"))
            .fail("2020-01-02", 404);
        let (mut c, _) = controller(feed);

        c.select_date_str("2020-01-01").unwrap();
        c.wait_for_latest(WAIT);
        let before = c.history().to_vec();

        c.select_date_str("2020-01-02").unwrap();
        assert!(c.wait_for_latest(WAIT));

        assert_eq!(c.phase(), ViewPhase::Failed);
        assert!(!c.error().unwrap().is_empty());
        assert!(c.current().is_none());
        assert_eq!(c.history(), before.as_slice());
    }

    #[test]
    fn test_failed_can_retry() {
        let feed = ScriptedFeed::default().answer(record("2020-01-01", "T"));
        let (mut c, _) = controller(feed);

        c.select_date_str("1999-01-01").unwrap();
        c.wait_for_latest(WAIT);
        assert_eq!(c.phase(), ViewPhase::Failed);

        c.select_date_str("2020-01-01").unwrap();
        assert_eq!(c.phase(), ViewPhase::Loading);
        assert!(c.error().is_none());

        c.wait_for_latest(WAIT);
        assert_eq!(c.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (mut c, _) = controller(ScriptedFeed::default());

        let first = c.begin(DateRequest::On("2020-01-01".parse().unwrap()));
        let second = c.begin(DateRequest::On("2020-01-02".parse().unwrap()));
        assert!(second.seq > first.seq);

        assert!(c.complete(second.seq, Ok(record("2020-01-02", "Newer"))));
        assert!(!c.complete(first.seq, Ok(record("2020-01-01", "Older"))));

        assert_eq!(c.current().unwrap().title, "Newer");
        assert_eq!(c.selected_date().to_string(), "2020-01-02");
        // The stale record is not logged either
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_result_applies_once() {
        let (mut c, _) = controller(ScriptedFeed::default());

        let ticket = c.begin(DateRequest::Today);
        assert!(c.complete(ticket.seq, Ok(record("2024-06-01", "Today"))));
        assert!(!c.complete(ticket.seq, Err(FetchError::Status { status: 500 })));
        assert!(!c.complete(ticket.seq, Ok(record("2024-06-01", "Again"))));

        assert_eq!(c.phase(), ViewPhase::Ready);
        assert_eq!(c.current().unwrap().title, "Today");
        assert!(c.error().is_none());
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_complete_before_any_request() {
        let (mut c, _) = controller(ScriptedFeed::default());
        assert!(!c.complete(0, Ok(record("2024-06-01", "Unasked"))));
        assert_eq!(c.phase(), ViewPhase::Idle);
        assert!(c.current().is_none());
    }

    #[test]
    fn test_stale_error_does_not_clobber_ready() {
        let (mut c, _) = controller(ScriptedFeed::default());

        let first = c.begin(DateRequest::On("2020-01-01".parse().unwrap()));
        let second = c.begin(DateRequest::On("2020-01-02".parse().unwrap()));

        c.complete(second.seq, Ok(record("2020-01-02", "Newer")));
        c.complete(first.seq, Err(FetchError::Status { status: 500 }));

        assert_eq!(c.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_slow_older_fetch_loses_to_newer() {
        let feed = ScriptedFeed::default()
            .answer(record("2020-01-01", "Slow"))
            .answer(record("2020-01-02", "Fast"))
            .delay("2020-01-01", Duration::from_millis(200));
        let (mut c, _) = controller(feed);

        c.select_date_str("2020-01-01").unwrap();
        c.select_date_str("2020-01-02").unwrap();
        assert!(c.wait_for_latest(WAIT));
        assert_eq!(c.current().unwrap().title, "Fast");

        // Let the slow worker finish, then drain it
        thread::sleep(Duration::from_millis(400));
        assert_eq!(c.poll(), 0);
        assert_eq!(c.in_flight(), 0);
        assert_eq!(c.current().unwrap().title, "Fast");
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut c, _) = controller(ScriptedFeed::default());

        assert!(matches!(
            c.select_date_str("1990-01-01"),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            c.select_date(today().succ_opt().unwrap()),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(c.select_date_str("yesterday"), Err(DomainError::ParseError(_))));

        // Rejected intents do not start a fetch
        assert_eq!(c.phase(), ViewPhase::Idle);
        assert_eq!(c.latest_seq(), 0);
    }

    #[test]
    fn test_random_requests_stay_in_range() {
        let (mut c, _) = controller(ScriptedFeed::default());

        for _ in 0..1_000 {
            let ticket = c.begin(DateRequest::Random);
            assert!(ticket.date.is_in_range(today()));
        }
    }

    #[test]
    fn test_toggle_favorite_keeps_phase() {
        let feed = ScriptedFeed::default().answer(record("2020-01-01", "T"));
        let (mut c, store) = controller(feed);

        c.select_date_str("2020-01-01").unwrap();
        c.wait_for_latest(WAIT);

        assert!(c.toggle_favorite().unwrap());
        assert_eq!(c.phase(), ViewPhase::Ready);
        assert!(c.is_current_favorite());
        assert_eq!(c.favorites().len(), 1);

        // Visible through a fresh reader of the same store
        let other = FavoritesSet::new(store);
        assert!(other.is_favorite(&"2020-01-01".parse().unwrap()));

        assert!(!c.toggle_favorite().unwrap());
        assert!(!c.is_current_favorite());
        assert_eq!(c.phase(), ViewPhase::Ready);
    }

    #[test]
    fn test_toggle_favorite_without_record() {
        let (mut c, _) = controller(ScriptedFeed::default());
        assert!(matches!(c.toggle_favorite(), Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_toggle_from_history_entry() {
        let (mut c, _) = controller(ScriptedFeed::default());
        let r = record("2010-10-10", "From history");

        assert!(c.toggle_favorite_record(&r).unwrap());
        assert!(c.is_favorite(&r.date));

        c.remove_favorite(&r.date).unwrap();
        assert!(!c.is_favorite(&r.date));
    }

    #[test]
    fn test_null_repositories() {
        let feed = ScriptedFeed::default().answer(record("2024-06-01", "Today"));
        let mut c = ViewStateController::new(
            Arc::new(feed),
            NullHistoryRepository,
            NullFavoritesRepository,
            FixedClock::on(today()),
        );

        c.mount();
        assert!(c.wait_for_latest(WAIT));
        assert_eq!(c.phase(), ViewPhase::Ready);
        assert!(c.history().is_empty());
    }

    /// Reads as empty, refuses every write
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_history_write_failure_is_not_surfaced() {
        let store = Arc::new(ReadOnlyStore);
        let feed = ScriptedFeed::default().answer(record("2020-01-01", "T"));
        let mut c = ViewStateController::new(
            Arc::new(feed),
            HistoryLog::new(store.clone()),
            FavoritesSet::new(store),
            FixedClock::on(today()),
        );

        c.select_date_str("2020-01-01").unwrap();
        assert!(c.wait_for_latest(WAIT));

        assert_eq!(c.phase(), ViewPhase::Ready);
        assert_eq!(c.current().unwrap().title, "T");
        assert!(c.error().is_none());
        assert!(c.history().is_empty());

        // Favorites do report the failure, and change nothing
        assert!(matches!(c.toggle_favorite(), Err(DomainError::StorageError(_))));
        assert!(!c.is_current_favorite());
    }

    #[test]
    fn test_timestamps_come_from_the_clock() {
        let feed = ScriptedFeed::default().answer(record("2020-01-01", "T"));
        let (mut c, _) = controller(feed);
        let noon = FixedClock::on(today()).now();

        c.select_date_str("2020-01-01").unwrap();
        assert!(c.wait_for_latest(WAIT));
        c.toggle_favorite().unwrap();

        assert_eq!(c.history()[0].viewed_at, Some(noon));
        assert_eq!(c.favorites()[0].saved_at, noon);
    }

    #[test]
    fn test_refresh_picks_up_other_writers() {
        let (mut c, store) = controller(ScriptedFeed::default());
        let mut other = HistoryLog::new(store);
        other
            .record(&record("2011-11-11", "Elsewhere"), FixedClock::on(today()).now())
            .unwrap();

        assert!(c.history().is_empty());
        c.refresh();
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_wait_without_dispatch_returns() {
        let (mut c, _) = controller(ScriptedFeed::default());
        c.begin(DateRequest::Today);
        assert!(!c.wait_for_latest(Duration::from_millis(10)));
        assert_eq!(c.phase(), ViewPhase::Loading);
    }
}
