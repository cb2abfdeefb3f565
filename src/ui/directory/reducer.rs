use crate::country::{cycle_region, PAGE_STEP};
use crate::ui::mvi::Reducer;

use super::intent::DirectoryIntent;
use super::state::{Catalog, DirectoryState, LoadState};

/// State machine of the directory screen.
///
/// ```text
/// Pending --Loaded--> Loaded --filter/search/LoadMore--> Loaded
/// Pending --Failed--> Failed (terminal)
/// ```
///
/// Filter, paging and selection intents only act on a loaded screen.
pub struct DirectoryReducer;

impl Reducer for DirectoryReducer {
    type State = DirectoryState;
    type Intent = DirectoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DirectoryIntent::Loaded { records } => {
                if state.load == LoadState::Pending {
                    state.load = LoadState::Loaded(Catalog::new(records));
                }
                state
            }
            DirectoryIntent::Failed { message } => {
                if state.load == LoadState::Pending {
                    state.load = LoadState::Failed { message };
                }
                state
            }
            _ if !state.is_loaded() => state,
            DirectoryIntent::SetQuery { query } => with_query(state, query),
            DirectoryIntent::InsertChar(ch) => {
                let mut query = state.filter.query.clone();
                query.push(ch);
                with_query(state, query)
            }
            DirectoryIntent::DeleteChar => {
                let mut query = state.filter.query.clone();
                query.pop();
                with_query(state, query)
            }
            DirectoryIntent::ClearQuery => with_query(state, String::new()),
            DirectoryIntent::SetRegion { region } => with_region(state, region),
            DirectoryIntent::NextRegion => {
                let region = cycle_region(state.regions(), &state.filter.region, true);
                with_region(state, region)
            }
            DirectoryIntent::PreviousRegion => {
                let region = cycle_region(state.regions(), &state.filter.region, false);
                with_region(state, region)
            }
            DirectoryIntent::LoadMore => {
                state.filter.visible_count = state.filter.visible_count.saturating_add(PAGE_STEP);
                state
            }
            DirectoryIntent::SelectNext => {
                let len = state.page().items.len();
                if let Some(current) = state.selected_index(len) {
                    state.selected = (current + 1).min(len - 1);
                }
                state
            }
            DirectoryIntent::SelectPrevious => {
                let len = state.page().items.len();
                state.selected = state
                    .selected_index(len)
                    .map(|current| current.saturating_sub(1))
                    .unwrap_or(0);
                state
            }
            DirectoryIntent::ToggleDetail => {
                if state.detail_open {
                    state.detail_open = false;
                } else {
                    state.detail_open = state.selected_record().is_some();
                }
                state
            }
            DirectoryIntent::CloseDetail => {
                state.detail_open = false;
                state
            }
        }
    }
}

/// Changing the query keeps the page size and restarts the selection.
fn with_query(mut state: DirectoryState, query: String) -> DirectoryState {
    if state.filter.query != query {
        state.filter.query = query;
        state.selected = 0;
        state.detail_open = false;
    }
    state
}

fn with_region(mut state: DirectoryState, region: String) -> DirectoryState {
    if state.filter.region != region {
        state.filter.region = region;
        state.selected = 0;
        state.detail_open = false;
    }
    state
}
