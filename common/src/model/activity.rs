use serde::{Deserialize, Serialize};

/// A hiring-pipeline event attached to a talent, shown in the "Job Comments" tab.
///
/// Each entry records that the talent moved between two pipeline stages for a
/// given client position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobComment {
    /// The client company the position belongs to.
    pub company_name: String,
    /// The position the talent was considered for.
    pub position: String,
    /// The stage change this entry describes.
    pub status: StatusTransition,
    /// How long ago the change happened, as a short label (e.g. `"3m"`).
    pub duration: String,
}

/// A pipeline stage change, e.g. `Applied -> Proposed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from: String,
    pub to: String,
}

/// An application record attached to a talent, shown in the "Logs" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    /// The client company the talent applied to.
    pub company_name: String,
    /// The position applied for.
    pub position: String,
    /// Salary expectation as entered, already formatted (e.g. `"$0"`).
    pub expected_salary: String,
    /// Skills highlighted for this application.
    pub skills: String,
    /// Expert domains highlighted for this application.
    pub expert_domains: String,
    /// Current stage of the application.
    pub status: String,
}
