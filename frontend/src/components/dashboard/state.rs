//! Runtime state of the dashboard.
//!
//! Domain state (listing, criteria, comments) comes from `common`; the fields
//! added here only drive presentation: which accordion section is open,
//! whether the filter panel is visible, and the transient "Copied!" hint.

use common::comments::{CommentBook, CommentPanel};
use common::filter::FilterCriteria;
use common::listing::TalentListing;

/// Accordion sections of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSection {
    Position,
    TotalExperience,
    Level,
}

impl FilterSection {
    pub const ALL: [FilterSection; 3] = [
        FilterSection::Position,
        FilterSection::TotalExperience,
        FilterSection::Level,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterSection::Position => "Position",
            FilterSection::TotalExperience => "Total Experience",
            FilterSection::Level => "Level",
        }
    }
}

pub struct DashboardComponent {
    pub listing: TalentListing,
    pub criteria: FilterCriteria,
    pub comments: CommentBook,
    pub panel: CommentPanel,
    pub show_filters: bool,
    pub open_section: Option<FilterSection>,
    /// Email currently showing "Copied!".
    pub copied: Option<String>,
    /// Bumped on each copy so an older timer cannot hide a newer hint.
    pub copy_generation: u64,
    /// Guards the first-render fetch.
    pub activated: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            listing: TalentListing::default(),
            criteria: FilterCriteria::default(),
            comments: CommentBook::default(),
            panel: CommentPanel::default(),
            show_filters: false,
            open_section: None,
            copied: None,
            copy_generation: 0,
            activated: false,
        }
    }
}
