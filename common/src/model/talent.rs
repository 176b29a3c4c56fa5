//! Talent records as returned by the listing endpoint.
//!
//! A `TalentRecord` is immutable once fetched: filters borrow records, the
//! export maps them into new rows, and a refetch replaces the whole sequence.
//! Optional wire fields deserialize to `None`/empty so a sparse payload still
//! renders; the display helpers here decide what "absent" means.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::activity::{ActivityLog, JobComment};

/// Status shown when the listing endpoint omits one.
pub const DEFAULT_STATUS: &str = "Pending";

/// Stable identifier of a talent. The endpoint may send it as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TalentId(pub String);

impl<'de> Deserialize<'de> for TalentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => TalentId(text),
            RawId::Number(number) => TalentId(number.to_string()),
        })
    }
}

impl fmt::Display for TalentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TalentId {
    fn from(value: &str) -> Self {
        TalentId(value.to_string())
    }
}

/// Years may arrive as a number or as text such as `"5"` or `""`.
/// Blank, null or non-numeric text reads as unknown rather than failing the record.
fn lenient_years<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYears {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawYears>::deserialize(deserializer)? {
        Some(RawYears::Number(years)) => Some(years),
        Some(RawYears::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRecord {
    pub id: TalentId,
    #[serde(alias = "fullName")]
    pub name: String,
    pub email: String,
    /// Free-text tier label such as `"Level 2"` or `"Senior"`.
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "yoe", deserialize_with = "lenient_years")]
    pub years_of_experience: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub profile_feedback: Option<String>,
    /// Name of the referring partner. Free text, not a reference to another record.
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub job_comments: Vec<JobComment>,
    #[serde(default)]
    pub logs: Vec<ActivityLog>,
}

impl TalentRecord {
    /// The status label, falling back to [`DEFAULT_STATUS`] when absent or blank.
    pub fn status(&self) -> &str {
        present(&self.status).unwrap_or(DEFAULT_STATUS)
    }

    pub fn level(&self) -> Option<&str> {
        present(&self.level)
    }

    pub fn position(&self) -> Option<&str> {
        present(&self.position)
    }

    pub fn availability(&self) -> Option<&str> {
        present(&self.availability)
    }

    pub fn profile_feedback(&self) -> Option<&str> {
        present(&self.profile_feedback)
    }

    pub fn partner(&self) -> Option<&str> {
        present(&self.partner)
    }

    /// Years of experience, ignoring negative or non-finite values.
    pub fn years_of_experience(&self) -> Option<f64> {
        self.years_of_experience
            .filter(|years| years.is_finite() && *years >= 0.0)
    }

    /// Skills joined with `", "`, or `None` when the talent lists no skills.
    pub fn skills_label(&self) -> Option<String> {
        let skills: Vec<&str> = self
            .skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .collect();
        if skills.is_empty() {
            None
        } else {
            Some(skills.join(", "))
        }
    }

    /// Years of experience formatted without a trailing `.0` for whole numbers.
    pub fn experience_label(&self) -> Option<String> {
        self.years_of_experience().map(|years| {
            if years.fract() == 0.0 {
                format!("{years:.0}")
            } else {
                format!("{years}")
            }
        })
    }

    /// First two characters of the name, upper-cased, for the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .trim()
            .chars()
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sparse(name: &str) -> TalentRecord {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": name,
            "email": "jett@yopmail.com"
        }))
        .unwrap()
    }

    #[test]
    fn numeric_ids_are_read_as_text() {
        assert_eq!(sparse("jet").id, TalentId::from("7"));
    }

    #[test]
    fn years_accept_numbers_and_numeric_text() {
        let read = |years: serde_json::Value| -> Option<f64> {
            serde_json::from_value::<TalentRecord>(serde_json::json!({
                "id": 7,
                "name": "jet",
                "email": "jett@yopmail.com",
                "yearsOfExperience": years
            }))
            .unwrap()
            .years_of_experience()
        };

        assert_eq!(read(serde_json::json!(5)), Some(5.0));
        assert_eq!(read(serde_json::json!(" 2.5 ")), Some(2.5));
        assert_eq!(read(serde_json::json!("")), None);
        assert_eq!(read(serde_json::json!("n/a")), None);
        assert_eq!(read(serde_json::Value::Null), None);
        assert_eq!(sparse("jet").years_of_experience(), None);
    }

    #[test]
    fn absent_status_defaults_to_pending() {
        let mut talent = sparse("jet");
        assert_eq!(talent.status(), "Pending");

        talent.status = Some("   ".to_string());
        assert_eq!(talent.status(), "Pending");

        talent.status = Some("Active".to_string());
        assert_eq!(talent.status(), "Active");
    }

    #[test]
    fn display_helpers_handle_missing_values() {
        let talent = sparse("jet");
        assert_eq!(talent.skills_label(), None);
        assert_eq!(talent.experience_label(), None);
        assert_eq!(talent.level(), None);
        assert!(talent.job_comments.is_empty());
    }

    #[test]
    fn experience_label_drops_whole_number_fraction() {
        let mut talent = sparse("sage");
        talent.years_of_experience = Some(5.0);
        assert_eq!(talent.experience_label().as_deref(), Some("5"));

        talent.years_of_experience = Some(2.5);
        assert_eq!(talent.experience_label().as_deref(), Some("2.5"));

        talent.years_of_experience = Some(-1.0);
        assert_eq!(talent.experience_label(), None);
    }

    #[test]
    fn initials_use_first_two_characters() {
        assert_eq!(sparse("phoenix").initials(), "PH");
        assert_eq!(sparse(" é").initials(), "É");
    }

    #[test]
    fn skills_are_joined_in_order() {
        let mut talent = sparse("sage");
        talent.skills = vec!["heal".into(), " ".into(), "wall".into(), "revive".into()];
        assert_eq!(talent.skills_label().as_deref(), Some("heal, wall, revive"));
    }
}
