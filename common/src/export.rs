//! Spreadsheet export of the visible talent rows.
//!
//! Each record is flattened into an `ExportRow` with a fixed column order, any
//! absent field written as `"-"`. The rows are then written into a single-sheet
//! workbook; the caller decides how to hand the bytes to the user.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::model::talent::TalentRecord;

pub const EXPORT_FILE_NAME: &str = "talents.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Talent Members";
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Placeholder for absent fields.
pub const MISSING: &str = "-";

pub const COLUMNS: [&str; 9] = [
    "Name",
    "Email",
    "Level",
    "Skills",
    "YoE",
    "Availability",
    "Profile Feedback",
    "Partner",
    "Status",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build the spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub email: String,
    pub level: String,
    pub skills: String,
    pub years_of_experience: String,
    pub availability: String,
    pub profile_feedback: String,
    pub partner: String,
    pub status: String,
}

impl ExportRow {
    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.name,
            &self.email,
            &self.level,
            &self.skills,
            &self.years_of_experience,
            &self.availability,
            &self.profile_feedback,
            &self.partner,
            &self.status,
        ]
    }
}

impl From<&TalentRecord> for ExportRow {
    fn from(record: &TalentRecord) -> Self {
        Self {
            name: or_missing(Some(record.name.trim())),
            email: or_missing(Some(record.email.trim())),
            level: or_missing(record.level()),
            skills: or_missing(record.skills_label().as_deref()),
            years_of_experience: or_missing(record.experience_label().as_deref()),
            availability: or_missing(record.availability()),
            profile_feedback: or_missing(record.profile_feedback()),
            partner: or_missing(record.partner()),
            status: record.status().to_string(),
        }
    }
}

pub fn export_rows<'a>(records: impl IntoIterator<Item = &'a TalentRecord>) -> Vec<ExportRow> {
    records.into_iter().map(ExportRow::from).collect()
}

/// Builds the `.xlsx` file: a bold header row, then one row per record.
pub fn export<'a>(records: impl IntoIterator<Item = &'a TalentRecord>) -> Result<Vec<u8>, ExportError> {
    let rows = export_rows(records);
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(EXPORT_SHEET_NAME)?;
        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }
        for (index, row) in rows.iter().enumerate() {
            let line = index as u32 + 1;
            for (col, cell) in row.cells().iter().enumerate() {
                worksheet.write_string(line, col as u16, *cell)?;
            }
        }
        worksheet.set_freeze_panes(1, 0)?;
        worksheet.autofit();
    }

    Ok(workbook.save_to_buffer()?)
}

fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}
