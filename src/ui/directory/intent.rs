use crate::country::CountryRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryIntent {
    /// The load finished with records.
    Loaded { records: Vec<CountryRecord> },
    /// The load failed; `message` is what the screen shows.
    Failed { message: String },
    SetQuery { query: String },
    InsertChar(char),
    DeleteChar,
    ClearQuery,
    /// Set the region filter directly. Empty clears it.
    SetRegion { region: String },
    NextRegion,
    PreviousRegion,
    /// Show [`PAGE_STEP`](crate::country::PAGE_STEP) more cards.
    LoadMore,
    SelectNext,
    SelectPrevious,
    /// Open or close the detail popup for the selected card.
    ToggleDetail,
    CloseDetail,
}

impl Intent for DirectoryIntent {}
