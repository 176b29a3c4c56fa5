//! Per-talent comment threads and the side panel that shows them.
//!
//! Threads live in memory only and are keyed by `TalentId`, so two talents
//! sharing a display name never share a thread. Comments are append-only.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::talent::TalentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("comment must not be empty")]
    Empty,
    #[error("no talent selected")]
    NoActiveTalent,
}

/// Tabs of the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Comments,
    JobComments,
    Logs,
}

impl PanelTab {
    pub const ALL: [PanelTab; 3] = [PanelTab::Comments, PanelTab::JobComments, PanelTab::Logs];

    pub fn label(self) -> &'static str {
        match self {
            PanelTab::Comments => "Comments",
            PanelTab::JobComments => "Job Comments",
            PanelTab::Logs => "Logs",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentBook {
    threads: HashMap<TalentId, Vec<String>>,
}

impl CommentBook {
    /// Appends `text`, trimmed, to the talent's thread.
    pub fn add_comment(&mut self, talent: &TalentId, text: &str) -> Result<(), CommentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }
        self.threads
            .entry(talent.clone())
            .or_default()
            .push(text.to_string());
        Ok(())
    }

    /// The talent's comments in insertion order; empty when none were added.
    pub fn comments(&self, talent: &TalentId) -> &[String] {
        self.threads.get(talent).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn count(&self, talent: &TalentId) -> usize {
        self.comments(talent).len()
    }
}

/// Visibility, active talent, active tab and the draft input of the side panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentPanel {
    active: Option<TalentId>,
    tab: PanelTab,
    draft: String,
}

impl CommentPanel {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&TalentId> {
        self.active.as_ref()
    }

    pub fn tab(&self) -> PanelTab {
        self.tab
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Shows the panel for `talent`. Switching to another talent drops the draft.
    pub fn open(&mut self, talent: TalentId) {
        if self.active.as_ref() != Some(&talent) {
            self.draft.clear();
        }
        self.active = Some(talent);
    }

    pub fn close(&mut self) {
        self.active = None;
        self.draft.clear();
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.tab = tab;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Moves the draft into the active talent's thread and clears the input.
    pub fn submit(&mut self, book: &mut CommentBook) -> Result<(), CommentError> {
        let talent = self.active.as_ref().ok_or(CommentError::NoActiveTalent)?;
        book.add_comment(talent, &self.draft)?;
        self.draft.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comments_are_trimmed_and_kept_in_order() {
        let mut book = CommentBook::default();
        let sage = TalentId::from("2");
        book.add_comment(&sage, "  first ").unwrap();
        book.add_comment(&sage, "second").unwrap();

        assert_eq!(book.comments(&sage), &["first".to_string(), "second".to_string()]);
        assert_eq!(book.count(&sage), 2);
    }

    #[test]
    fn blank_comments_are_rejected() {
        let mut book = CommentBook::default();
        let jet = TalentId::from("1");
        assert_eq!(book.add_comment(&jet, " \t "), Err(CommentError::Empty));
        assert!(book.comments(&jet).is_empty());
    }

    #[test]
    fn threads_do_not_leak_between_talents_sharing_a_name() {
        // Two different talents both displayed as "sage".
        let mut book = CommentBook::default();
        let first = TalentId::from("2");
        let second = TalentId::from("9");
        book.add_comment(&first, "great fit").unwrap();

        assert_eq!(book.count(&first), 1);
        assert!(book.comments(&second).is_empty());
    }

    #[test]
    fn switching_talent_rekeys_the_panel() {
        let mut book = CommentBook::default();
        let mut panel = CommentPanel::default();

        panel.open(TalentId::from("1"));
        panel.set_draft("about jet");
        panel.submit(&mut book).unwrap();
        assert_eq!(panel.draft(), "");

        panel.set_draft("unsent");
        panel.open(TalentId::from("2"));
        assert_eq!(panel.draft(), "");
        assert!(book.comments(panel.active().unwrap()).is_empty());

        panel.open(TalentId::from("1"));
        assert_eq!(book.comments(panel.active().unwrap()), &["about jet".to_string()]);
    }

    #[test]
    fn tab_survives_talent_switch_and_close_hides_panel() {
        let mut panel = CommentPanel::default();
        assert_eq!(panel.tab(), PanelTab::Comments);

        panel.open(TalentId::from("1"));
        panel.select_tab(PanelTab::Logs);
        panel.open(TalentId::from("2"));
        assert_eq!(panel.tab(), PanelTab::Logs);

        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn submit_without_talent_fails() {
        let mut panel = CommentPanel::default();
        panel.set_draft("orphan");
        assert_eq!(
            panel.submit(&mut CommentBook::default()),
            Err(CommentError::NoActiveTalent)
        );
    }
}
