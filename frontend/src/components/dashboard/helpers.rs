use common::filter::MAX_EXPERIENCE;
use common::listing::DisplayState;
use common::model::talent::{TalentId, TalentRecord};

use super::state::DashboardComponent;

/// Parses a number input. An empty or non-numeric value yields `fallback`.
pub fn parse_years(value: &str, fallback: u32) -> i64 {
    value.trim().parse::<i64>().unwrap_or(i64::from(fallback))
}

/// Label of the max experience input; the top value means "and above".
pub fn max_experience_hint(max: u32) -> String {
    if max == MAX_EXPERIENCE {
        format!("{MAX_EXPERIENCE}+ years")
    } else {
        format!("up to {max} years")
    }
}

/// Rows currently visible in the table, in display order.
pub fn visible_talents(component: &DashboardComponent) -> Vec<&TalentRecord> {
    match component.listing.display(&component.criteria) {
        DisplayState::Populated(records) => records,
        _ => Vec::new(),
    }
}

pub fn find_talent<'a>(component: &'a DashboardComponent, id: &TalentId) -> Option<&'a TalentRecord> {
    component.listing.records().iter().find(|record| &record.id == id)
}

/// CSS modifier of the status pill.
pub fn status_class(status: &str) -> &'static str {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "approved" => "status-active",
        "rejected" | "inactive" => "status-rejected",
        _ => "status-pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_years_fall_back() {
        assert_eq!(parse_years("", 0), 0);
        assert_eq!(parse_years("  ", MAX_EXPERIENCE), 30);
        assert_eq!(parse_years("abc", 7), 7);
        assert_eq!(parse_years(" 12 ", 0), 12);
        assert_eq!(parse_years("-4", 0), -4);
    }

    #[test]
    fn status_pill_colour_ignores_case() {
        assert_eq!(status_class("Active"), "status-active");
        assert_eq!(status_class(" approved "), "status-active");
        assert_eq!(status_class("REJECTED"), "status-rejected");
        assert_eq!(status_class("Inactive"), "status-rejected");
        assert_eq!(status_class("Pending Review"), "status-pending");
        assert_eq!(status_class(""), "status-pending");
    }

    #[test]
    fn top_of_range_reads_as_and_above() {
        assert_eq!(max_experience_hint(MAX_EXPERIENCE), "30+ years");
        assert_eq!(max_experience_hint(9), "up to 9 years");
        assert_eq!(max_experience_hint(0), "up to 0 years");
    }
}
