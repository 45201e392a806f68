//! ImagePresenter - Formats view state, history and favorites for a terminal

use crate::adapters::controllers::{ViewPhase, ViewState};
use crate::domain::entities::{FavoriteEntry, HistoryEntry, ImageRecord};
use crate::domain::value_objects::ViewAdjustments;

/// Column width used when wrapping explanations
const WRAP_WIDTH: usize = 78;

/// View model for one list row (history or favorites)
#[derive(Clone, Debug, PartialEq)]
pub struct ListItemViewModel {
    pub date: String,
    pub title: String,
    pub media: &'static str,
    pub is_favorite: bool,
}

impl ListItemViewModel {
    fn line(&self) -> String {
        let star = if self.is_favorite { "*" } else { " " };
        format!("{} {}  [{}] {}", star, self.date, self.media, self.title)
    }
}

/// Presenter for the image view
#[derive(Clone, Debug)]
pub struct ImagePresenter {
    wrap_width: usize,
}

impl Default for ImagePresenter {
    fn default() -> Self {
        Self {
            wrap_width: WRAP_WIDTH,
        }
    }
}

impl ImagePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(20);
        self
    }

    /// Whole view: phase line plus the record when there is one
    pub fn present_state(
        &self,
        state: &ViewState,
        is_favorite: bool,
        adjustments: &ViewAdjustments,
    ) -> String {
        match state.phase {
            ViewPhase::Idle => "Nothing loaded yet.".to_string(),
            ViewPhase::Loading => format!("Loading {}...", state.selected_date),
            ViewPhase::Failed => state
                .error
                .clone()
                .unwrap_or_else(|| "Something went wrong.".to_string()),
            ViewPhase::Ready => match &state.record {
                Some(record) => self.present_record(record, is_favorite, adjustments),
                None => "Nothing loaded yet.".to_string(),
            },
        }
    }

    /// One record with its metadata
    pub fn present_record(
        &self,
        record: &ImageRecord,
        is_favorite: bool,
        adjustments: &ViewAdjustments,
    ) -> String {
        let mut out = String::new();

        let heart = if is_favorite { " [favorite]" } else { "" };
        out.push_str(&format!("{}  {}{}\n", record.date, record.title, heart));
        out.push_str(&format!("{}: {}\n", record.media_type.as_str(), record.url));
        if let Some(hd) = &record.hdurl {
            out.push_str(&format!("hd: {}\n", hd));
        }
        if let Some(credit) = record.attribution() {
            out.push_str(&format!("(c) {}\n", credit));
        }
        if record.media_type.is_image() && !adjustments.is_neutral() {
            out.push_str(&format!(
                "view: {} scale({:.2})\n",
                adjustments.css_filter(),
                adjustments.scale()
            ));
        }
        if !record.explanation.is_empty() {
            out.push('\n');
            for line in wrap(&record.explanation, self.wrap_width) {
                out.push_str(&line);
                out.push('\n');
            }
        }

        out
    }

    /// History rows, most recent first
    pub fn history_items<F>(&self, entries: &[HistoryEntry], is_favorite: F) -> Vec<ListItemViewModel>
    where
        F: Fn(&ImageRecord) -> bool,
    {
        entries
            .iter()
            .map(|e| Self::list_item(&e.record, is_favorite(&e.record)))
            .collect()
    }

    /// Favorites rows, in saved order
    pub fn favorite_items(&self, entries: &[FavoriteEntry]) -> Vec<ListItemViewModel> {
        entries.iter().map(|e| Self::list_item(&e.record, true)).collect()
    }

    /// Render list rows, or a placeholder when empty
    pub fn present_list(&self, items: &[ListItemViewModel], empty: &str) -> String {
        if items.is_empty() {
            return format!("{}\n", empty);
        }
        items.iter().map(|i| format!("{}\n", i.line())).collect()
    }

    /// Text handed to a share target
    pub fn share_text(&self, record: &ImageRecord) -> String {
        format!("{} ({}) {}", record.title, record.date, record.best_url())
    }

    fn list_item(record: &ImageRecord, is_favorite: bool) -> ListItemViewModel {
        ListItemViewModel {
            date: record.date.to_string(),
            title: record.title.clone(),
            media: record.media_type.as_str(),
            is_favorite,
        }
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
