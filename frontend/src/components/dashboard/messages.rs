use common::comments::PanelTab;
use common::fetcher::{FetchError, Fetched};
use common::filter::LevelChoice;
use common::listing::Activation;
use common::model::talent::TalentId;

use super::state::FilterSection;

pub enum Msg {
    Activate,
    FetchCompleted(Activation, Result<Fetched, FetchError>),
    SetSearch(String),
    ToggleFilters,
    ToggleSection(FilterSection),
    TogglePosition(&'static str),
    RemovePosition(&'static str),
    ToggleLevel(LevelChoice),
    SetMinExperience(String),
    SetMaxExperience(String),
    QuickSelectExperience(u32),
    ClearFilters,
    Export,
    CopyEmail(String),
    CopyConfirmed(String),
    CopyExpired(u64),
    OpenComments(TalentId),
    CloseComments,
    SelectTab(PanelTab),
    UpdateDraft(String),
    SubmitComment,
}
