//! State machine behind the talent table.
//!
//! `Loading` is the initial state and is re-entered on every activation.
//! A completed fetch moves it to `Error`, `Empty` or `Populated`, and it stays
//! there until the next activation. Each activation hands out a ticket; a
//! completion carrying an older ticket is dropped, so only the newest fetch
//! can ever be shown.

use crate::fetcher::{FetchError, Fetched};
use crate::filter::FilterCriteria;
use crate::model::talent::TalentRecord;

pub const LOADING_ROW: &str = "Loading talents…";
pub const NO_DATA_ROW: &str = "No data";
pub const NO_MATCH_ROW: &str = "No talents match the current filters";

/// Ticket identifying one activation of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<TalentRecord>),
}

/// What the table renders for the current criteria.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(Vec<&'a TalentRecord>),
}

/// One `<tr>` of the table body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow<'a> {
    Talent(&'a TalentRecord),
    /// A single full-width informational cell.
    Notice(&'static str),
}

impl<'a> DisplayState<'a> {
    /// Rows of the table body. An error renders no rows; the message is shown inline instead.
    pub fn rows(&self) -> Vec<TableRow<'a>> {
        match self {
            DisplayState::Loading => vec![TableRow::Notice(LOADING_ROW)],
            DisplayState::Error(_) => Vec::new(),
            DisplayState::Empty => vec![TableRow::Notice(NO_DATA_ROW)],
            DisplayState::Populated(records) if records.is_empty() => {
                vec![TableRow::Notice(NO_MATCH_ROW)]
            }
            DisplayState::Populated(records) => {
                records.iter().copied().map(TableRow::Talent).collect()
            }
        }
    }

    /// Number of talents shown, for the "N users" badge.
    pub fn talent_count(&self) -> usize {
        match self {
            DisplayState::Populated(records) => records.len(),
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&'a str> {
        match self {
            DisplayState::Error(message) => Some(*message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TalentListing {
    state: ListingState,
    latest: u64,
}

impl Default for TalentListing {
    fn default() -> Self {
        Self {
            state: ListingState::Loading,
            latest: 0,
        }
    }
}

impl TalentListing {
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Starts a new activation: back to `Loading`, previous tickets become stale.
    pub fn activate(&mut self) -> Activation {
        self.latest += 1;
        self.state = ListingState::Loading;
        Activation(self.latest)
    }

    pub fn is_current(&self, activation: Activation) -> bool {
        activation.0 == self.latest
    }

    /// Applies a fetch outcome. Returns `false` when the ticket is stale and nothing changed.
    pub fn complete(&mut self, activation: Activation, outcome: Result<Fetched, FetchError>) -> bool {
        if !self.is_current(activation) || !matches!(self.state, ListingState::Loading) {
            return false;
        }
        self.state = match outcome {
            Ok(Fetched::Records(records)) => ListingState::Populated(records),
            Ok(Fetched::Empty) => ListingState::Empty,
            Err(err) => ListingState::Error(err.to_string()),
        };
        true
    }

    /// Last fetched records; empty unless `Populated`.
    pub fn records(&self) -> &[TalentRecord] {
        match &self.state {
            ListingState::Populated(records) => records,
            _ => &[],
        }
    }

    pub fn display(&self, criteria: &FilterCriteria) -> DisplayState<'_> {
        match &self.state {
            ListingState::Loading => DisplayState::Loading,
            ListingState::Error(message) => DisplayState::Error(message),
            ListingState::Empty => DisplayState::Empty,
            ListingState::Populated(records) => DisplayState::Populated(criteria.apply(records)),
        }
    }
}
