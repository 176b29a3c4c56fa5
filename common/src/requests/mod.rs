use serde::Serialize;

/// Request payload for the talent listing endpoint.
///
/// The endpoint supports server-side filtering through the array fields, but
/// the dashboard filters client-side and always sends them empty.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TalentListRequest {
    pub page: u32,
    pub page_size: u32,
    pub skills: Vec<String>,
    pub positions: Vec<String>,
    pub partners: Vec<String>,
    pub domains: Vec<String>,
    pub languages: Vec<String>,
    pub levels: Vec<String>,
    pub feedback: Vec<String>,
    pub status: Vec<String>,
}

impl TalentListRequest {
    /// An unfiltered request for one page. Pages are 1-based; `0` is read as `1`.
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
            skills: Vec::new(),
            positions: Vec::new(),
            partners: Vec::new(),
            domains: Vec::new(),
            languages: Vec::new(),
            levels: Vec::new(),
            feedback: Vec::new(),
            status: Vec::new(),
        }
    }
}

/// Request payload for the auth endpoint. `password` carries the salted hash,
/// never the plain password.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
