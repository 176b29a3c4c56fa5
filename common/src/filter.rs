//! Filter criteria of the talent table.
//!
//! `FilterCriteria` holds what the filter panel and the search box edit: the
//! search text, the selected positions and levels, and the experience range.
//! It never touches records; `matches` and `apply` only read them, so the
//! visible rows are always recomputed from the last fetched sequence.
//!
//! Level selection has a derived "All" entry: it reads as checked exactly
//! when every concrete level is selected, and toggling it selects or clears
//! every concrete level at once.

use crate::model::talent::TalentRecord;

/// Positions offered by the filter panel, in display order.
pub const POSITIONS: [&str; 6] = [
    "3D Artist/Design",
    "AI Engineer",
    "Backend Engineer",
    "Cloud Engineer",
    "CTO",
    "Data Analyst",
];

/// Upper experience bound. As a maximum it means "30 and above".
pub const MAX_EXPERIENCE: u32 = 30;

/// Shortcut buttons under the experience inputs: each sets the range to `0..=value`.
pub const EXPERIENCE_QUICK_PICKS: [u32; 2] = [0, 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::One, Level::Two, Level::Three, Level::Four, Level::Five];

    pub fn label(self) -> &'static str {
        match self {
            Level::One => "Level 1",
            Level::Two => "Level 2",
            Level::Three => "Level 3",
            Level::Four => "Level 4",
            Level::Five => "Level 5",
        }
    }

    /// Case-insensitive match of a record's free-text level against this level.
    pub fn describes(self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(self.label())
    }
}

/// An entry of the level checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelChoice {
    All,
    Level(Level),
}

impl LevelChoice {
    /// Checklist entries in display order, "All" first.
    pub fn options() -> impl Iterator<Item = LevelChoice> {
        std::iter::once(LevelChoice::All).chain(Level::ALL.into_iter().map(LevelChoice::Level))
    }

    pub fn label(self) -> &'static str {
        match self {
            LevelChoice::All => "All",
            LevelChoice::Level(level) => level.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    search: String,
    positions: Vec<&'static str>,
    levels: Vec<Level>,
    min_experience: u32,
    max_experience: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            positions: Vec::new(),
            levels: Vec::new(),
            min_experience: 0,
            max_experience: MAX_EXPERIENCE,
        }
    }
}

impl FilterCriteria {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Selected positions in the order they were picked.
    pub fn positions(&self) -> &[&'static str] {
        &self.positions
    }

    pub fn is_position_selected(&self, position: &str) -> bool {
        self.positions.contains(&position)
    }

    /// Selects or deselects a position. Labels outside [`POSITIONS`] are ignored.
    pub fn toggle_position(&mut self, position: &str) {
        let Some(known) = POSITIONS.iter().copied().find(|p| *p == position) else {
            return;
        };
        if self.is_position_selected(known) {
            self.positions.retain(|p| *p != known);
        } else {
            self.positions.push(known);
        }
    }

    pub fn remove_position(&mut self, position: &str) {
        self.positions.retain(|p| *p != position);
    }

    /// Positions of the checklist narrowed by the search text.
    pub fn visible_positions(&self) -> Vec<&'static str> {
        let needle = self.search.to_lowercase();
        POSITIONS
            .iter()
            .copied()
            .filter(|position| position.to_lowercase().contains(&needle))
            .collect()
    }

    /// Selected levels, always in canonical order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn is_all_levels_selected(&self) -> bool {
        Level::ALL.iter().all(|level| self.levels.contains(level))
    }

    /// Checked state of a checklist entry; "All" is derived.
    pub fn is_level_selected(&self, choice: LevelChoice) -> bool {
        match choice {
            LevelChoice::All => self.is_all_levels_selected(),
            LevelChoice::Level(level) => self.levels.contains(&level),
        }
    }

    pub fn toggle_level(&mut self, choice: LevelChoice) {
        match choice {
            LevelChoice::All => {
                if self.is_all_levels_selected() {
                    self.levels.clear();
                } else {
                    self.levels = Level::ALL.to_vec();
                }
            }
            LevelChoice::Level(level) => {
                if self.levels.contains(&level) {
                    self.levels.retain(|l| *l != level);
                } else {
                    self.levels.push(level);
                    self.levels.sort();
                }
            }
        }
    }

    pub fn min_experience(&self) -> u32 {
        self.min_experience
    }

    pub fn max_experience(&self) -> u32 {
        self.max_experience
    }

    /// Sets the lower bound, clamped into `0..=max_experience`.
    pub fn set_min_experience(&mut self, years: i64) {
        self.min_experience = clamp_years(years, 0, self.max_experience);
    }

    /// Sets the upper bound, clamped into `min_experience..=MAX_EXPERIENCE`.
    pub fn set_max_experience(&mut self, years: i64) {
        self.max_experience = clamp_years(years, self.min_experience, MAX_EXPERIENCE);
    }

    /// Quick-select button: range becomes `0..=years`.
    pub fn quick_select(&mut self, years: u32) {
        self.min_experience = 0;
        self.max_experience = years.min(MAX_EXPERIENCE);
    }

    /// `true` while the range still covers everything (`0` to "30 and above").
    pub fn is_experience_default(&self) -> bool {
        self.min_experience == 0 && self.max_experience == MAX_EXPERIENCE
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of panel filters in use, for the badge on the filter toggle.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.positions.is_empty())
            + usize::from(!self.levels.is_empty() && !self.is_all_levels_selected())
            + usize::from(!self.is_experience_default())
    }

    /// Search text against name or email, case-insensitive. Empty search matches everything.
    pub fn matches_search(&self, record: &TalentRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.email.to_lowercase().contains(&needle)
    }

    /// All criteria combined. Each panel filter is unconstrained while empty or at its default.
    pub fn matches(&self, record: &TalentRecord) -> bool {
        self.matches_search(record)
            && self.matches_position(record)
            && self.matches_level(record)
            && self.matches_experience(record)
    }

    /// Records passing [`FilterCriteria::matches`], in their original order.
    pub fn apply<'a>(&self, records: &'a [TalentRecord]) -> Vec<&'a TalentRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    fn matches_position(&self, record: &TalentRecord) -> bool {
        if self.positions.is_empty() {
            return true;
        }
        record.position().is_some_and(|position| {
            self.positions
                .iter()
                .any(|selected| selected.eq_ignore_ascii_case(position))
        })
    }

    /// Unconstrained with no level or every level checked, so "All" also keeps unlevelled talents.
    fn matches_level(&self, record: &TalentRecord) -> bool {
        if self.levels.is_empty() || self.is_all_levels_selected() {
            return true;
        }
        record
            .level()
            .is_some_and(|label| self.levels.iter().any(|level| level.describes(label)))
    }

    fn matches_experience(&self, record: &TalentRecord) -> bool {
        if self.is_experience_default() {
            return true;
        }
        record.years_of_experience().is_some_and(|years| {
            years >= f64::from(self.min_experience)
                && (self.max_experience == MAX_EXPERIENCE || years <= f64::from(self.max_experience))
        })
    }
}

fn clamp_years(years: i64, low: u32, high: u32) -> u32 {
    // `low <= high` holds for both callers because the bounds never cross.
    years.clamp(i64::from(low), i64::from(high)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::Fetched;
    use crate::listing::TalentListing;
    use crate::model::talent::TalentId;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn talent(name: &str, email: &str) -> TalentRecord {
        TalentRecord {
            id: TalentId::from(name),
            name: name.to_string(),
            email: email.to_string(),
            level: None,
            position: None,
            skills: Vec::new(),
            years_of_experience: None,
            availability: None,
            profile_feedback: None,
            partner: None,
            status: None,
            job_comments: Vec::new(),
            logs: Vec::new(),
        }
    }

    fn fixture() -> Vec<TalentRecord> {
        let body = include_str!("../tests/fixtures/talents.json");
        serde_json::from_str::<crate::responses::Envelope<Vec<TalentRecord>>>(body)
            .unwrap()
            .data
    }

    #[test]
    fn search_is_case_insensitive_on_name_or_email() {
        let records = fixture();
        let mut criteria = FilterCriteria::default();

        criteria.set_search("SAGE");
        let names: Vec<&str> = criteria.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["sage"]);

        criteria.set_search("jett@");
        let names: Vec<&str> = criteria.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["jet"]);

        criteria.set_search("");
        assert_eq!(criteria.apply(&records).len(), records.len());
    }

    #[test]
    fn double_toggle_restores_positions() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_position("CTO");
        let before = criteria.positions().to_vec();

        criteria.toggle_position("AI Engineer");
        criteria.toggle_position("AI Engineer");
        assert_eq!(criteria.positions(), before.as_slice());
    }

    #[test]
    fn unknown_positions_are_ignored() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_position("Astronaut");
        assert!(criteria.positions().is_empty());
    }

    #[test]
    fn chips_keep_selection_order_and_can_be_removed() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_position("Data Analyst");
        criteria.toggle_position("CTO");
        assert_eq!(criteria.positions(), &["Data Analyst", "CTO"]);

        criteria.remove_position("Data Analyst");
        assert_eq!(criteria.positions(), &["CTO"]);
    }

    #[test]
    fn position_checklist_narrows_with_search() {
        let mut criteria = FilterCriteria::default();
        criteria.set_search("engineer");
        assert_eq!(
            criteria.visible_positions(),
            vec!["AI Engineer", "Backend Engineer", "Cloud Engineer"]
        );
    }

    #[test]
    fn selecting_each_level_equals_toggling_all() {
        let mut one_by_one = FilterCriteria::default();
        for level in Level::ALL {
            one_by_one.toggle_level(LevelChoice::Level(level));
        }

        let mut all = FilterCriteria::default();
        all.toggle_level(LevelChoice::All);

        assert_eq!(one_by_one.levels(), all.levels());
        assert!(all.is_level_selected(LevelChoice::All));

        all.toggle_level(LevelChoice::All);
        assert!(all.levels().is_empty());
    }

    #[test]
    fn deselecting_one_level_unchecks_all() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_level(LevelChoice::All);
        criteria.toggle_level(LevelChoice::Level(Level::Three));

        assert!(!criteria.is_level_selected(LevelChoice::All));
        assert_eq!(criteria.levels(), &[Level::One, Level::Two, Level::Four, Level::Five]);

        criteria.toggle_level(LevelChoice::All);
        assert_eq!(criteria.levels(), &Level::ALL);
    }

    #[test]
    fn all_levels_never_shrink_the_table() {
        let mut listing = TalentListing::default();
        let activation = listing.activate();
        listing.complete(activation, Ok(Fetched::Records(fixture())));

        let mut criteria = FilterCriteria::default();
        let before = listing.display(&criteria).talent_count();

        criteria.toggle_level(LevelChoice::All);
        assert_eq!(listing.display(&criteria).talent_count(), before);
        assert_eq!(criteria.active_filter_count(), 0);

        criteria.toggle_level(LevelChoice::Level(Level::Five));
        let names: Vec<&str> = criteria.apply(listing.records()).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["sage", "phoenix"]);
    }

    #[test]
    fn quick_select_keeps_lower_bound() {
        let mut criteria = FilterCriteria::default();
        assert_eq!((criteria.min_experience(), criteria.max_experience()), (0, 30));

        criteria.set_max_experience(9);
        assert_eq!((criteria.min_experience(), criteria.max_experience()), (0, 9));

        criteria.set_min_experience(4);
        criteria.quick_select(9);
        assert_eq!((criteria.min_experience(), criteria.max_experience()), (0, 9));
    }

    #[test]
    fn experience_bounds_never_cross() {
        let mut criteria = FilterCriteria::default();
        criteria.set_min_experience(12);
        criteria.set_max_experience(5);
        assert_eq!(criteria.max_experience(), 12);

        criteria.set_min_experience(40);
        assert_eq!(criteria.min_experience(), 12);

        criteria.set_max_experience(99);
        assert_eq!(criteria.max_experience(), MAX_EXPERIENCE);

        criteria.set_min_experience(-3);
        assert_eq!(criteria.min_experience(), 0);
    }

    #[test]
    fn panel_filters_are_combined_with_search() {
        let records = fixture();
        let mut criteria = FilterCriteria::default();

        criteria.toggle_level(LevelChoice::Level(Level::Two));
        let names: Vec<&str> = criteria.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["phoenix"]);

        criteria.clear();
        criteria.toggle_position("Backend Engineer");
        let names: Vec<&str> = criteria.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["sage"]);

        criteria.clear();
        criteria.quick_select(4);
        let names: Vec<&str> = criteria.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["phoenix"]);
        assert_eq!(criteria.active_filter_count(), 1);
    }

    #[test]
    fn thirty_means_thirty_and_above() {
        let mut veteran = talent("vet", "vet@yopmail.com");
        veteran.years_of_experience = Some(42.0);

        let mut criteria = FilterCriteria::default();
        criteria.set_min_experience(10);
        assert!(criteria.matches(&veteran));

        criteria.set_max_experience(29);
        assert!(!criteria.matches(&veteran));
    }

    proptest! {
        #[test]
        fn search_result_is_a_matching_subset(
            search in "[a-zA-Z@.]{0,4}",
            people in prop::collection::vec(("[a-zA-Z]{1,8}", "[a-z]{1,6}@[a-z]{1,5}\\.com"), 0..12),
        ) {
            let records: Vec<TalentRecord> = people
                .iter()
                .map(|(name, email)| talent(name, email))
                .collect();
            let mut criteria = FilterCriteria::default();
            criteria.set_search(search.clone());

            let visible = criteria.apply(&records);
            let needle = search.to_lowercase();
            for record in &visible {
                prop_assert!(records.contains(record));
                prop_assert!(
                    record.name.to_lowercase().contains(&needle)
                        || record.email.to_lowercase().contains(&needle)
                );
            }
            if search.is_empty() {
                prop_assert_eq!(visible.len(), records.len());
            }
        }

        #[test]
        fn position_double_toggle_is_identity(picks in prop::collection::vec(0usize..6, 0..6), target in 0usize..6) {
            let mut criteria = FilterCriteria::default();
            for pick in picks {
                criteria.toggle_position(POSITIONS[pick]);
            }
            let before = criteria.clone();
            criteria.toggle_position(POSITIONS[target]);
            criteria.toggle_position(POSITIONS[target]);
            prop_assert_eq!(criteria.positions().len(), before.positions().len());
            for position in before.positions() {
                prop_assert!(criteria.is_position_selected(position));
            }
        }
    }
}
