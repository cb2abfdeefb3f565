mod common;

use common::sample_records;
use country_browser::country::PAGE_STEP;
use country_browser::ui::directory::{DirectoryIntent, DirectoryReducer, DirectoryState, LoadState};
use country_browser::ui::mvi::Reducer;

fn reduce_all(state: DirectoryState, intents: Vec<DirectoryIntent>) -> DirectoryState {
    intents.into_iter().fold(state, DirectoryReducer::reduce)
}

fn loaded() -> DirectoryState {
    DirectoryReducer::reduce(
        DirectoryState::default(),
        DirectoryIntent::Loaded {
            records: sample_records(),
        },
    )
}

#[test]
fn initial_page_is_one_step() {
    let state = loaded();
    let page = state.page();
    assert_eq!(page.items.len(), PAGE_STEP);
    assert_eq!(page.total_matches, 12);
    assert!(page.has_more());
}

#[test]
fn load_more_twice_adds_sixteen_regardless_of_matches() {
    let state = reduce_all(
        loaded(),
        vec![
            DirectoryIntent::SetRegion {
                region: "Asia".into(),
            },
            DirectoryIntent::LoadMore,
            DirectoryIntent::LoadMore,
        ],
    );
    assert_eq!(state.filter.visible_count, PAGE_STEP + 16);
    assert_eq!(state.page().items.len(), 2);
}

#[test]
fn visible_count_survives_filter_changes() {
    let state = reduce_all(
        loaded(),
        vec![
            DirectoryIntent::LoadMore,
            DirectoryIntent::NextRegion,
            DirectoryIntent::SetQuery {
                query: "a".into(),
            },
            DirectoryIntent::ClearQuery,
            DirectoryIntent::SetRegion {
                region: String::new(),
            },
        ],
    );
    assert_eq!(state.filter.visible_count, 16);
    assert_eq!(state.page().items.len(), 12);
    assert!(!state.page().has_more());
}

#[test]
fn region_options_are_computed_at_load() {
    let state = loaded();
    assert_eq!(
        state.regions(),
        ["Europe", "Africa", "Americas", "Asia", "Oceania"]
            .map(String::from)
            .as_slice()
    );

    // Filtering does not shrink the options
    let state = DirectoryReducer::reduce(
        state,
        DirectoryIntent::SetQuery {
            query: "tokyo".into(),
        },
    );
    assert_eq!(state.regions().len(), 5);
}

#[test]
fn region_cycle_walks_all_options() {
    let mut state = loaded();
    let mut seen = Vec::new();
    for _ in 0..6 {
        state = DirectoryReducer::reduce(state, DirectoryIntent::NextRegion);
        seen.push(state.filter.region.clone());
    }
    assert_eq!(seen, vec!["Europe", "Africa", "Americas", "Asia", "Oceania", ""]);

    let state = DirectoryReducer::reduce(state, DirectoryIntent::PreviousRegion);
    assert_eq!(state.filter.region, "Oceania");
}

#[test]
fn typing_narrows_results() {
    let state = reduce_all(
        loaded(),
        "nai".chars().map(DirectoryIntent::InsertChar).collect(),
    );
    assert_eq!(state.filter.query, "nai");
    let names: Vec<&str> = state.page().items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Kenya"]);
}

#[test]
fn failed_is_terminal() {
    let state = reduce_all(
        DirectoryState::default(),
        vec![
            DirectoryIntent::Failed {
                message: "not found".into(),
            },
            DirectoryIntent::Loaded {
                records: sample_records(),
            },
            DirectoryIntent::LoadMore,
            DirectoryIntent::InsertChar('x'),
        ],
    );
    assert_eq!(
        state.load,
        LoadState::Failed {
            message: "not found".into()
        }
    );
    assert_eq!(state.filter.visible_count, PAGE_STEP);
    assert!(state.filter.query.is_empty());
}

#[test]
fn detail_follows_selection() {
    let state = reduce_all(
        loaded(),
        vec![
            DirectoryIntent::SelectNext,
            DirectoryIntent::SelectNext,
            DirectoryIntent::ToggleDetail,
        ],
    );
    assert!(state.detail_open);
    assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Peru"));

    let state = DirectoryReducer::reduce(state, DirectoryIntent::InsertChar('k'));
    assert!(!state.detail_open);
    assert_eq!(state.selected, 0);
}
