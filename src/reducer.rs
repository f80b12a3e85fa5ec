//! Reducer - the list controller state machine and screen navigation

use tracing::debug;
use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::error::CatalogError;
use crate::state::{AppState, ListMode, Screen, PAGE_SIZE};

pub const FAVORITES_PENDING: &str = "Favorites are still loading";
pub const FAVORITES_SAVE_FAILED: &str = "Could not save favorites, try again";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            let mut effects = Vec::new();
            if !state.favorites_loaded {
                effects.push(Effect::LoadFavorites);
            }
            if state.browse.items.is_empty()
                && state.browse.next_offset == 0
                && !state.browse.is_loading()
            {
                state.browse.is_initial_loading = true;
                state.message = None;
                effects.push(Effect::FetchPage {
                    offset: 0,
                    limit: PAGE_SIZE,
                });
            }
            if effects.is_empty() {
                DispatchResult::unchanged()
            } else {
                DispatchResult::changed_with_many(effects)
            }
        }

        Action::LoadMore => match load_more(state) {
            Some(effect) => DispatchResult::changed_with(effect),
            None => DispatchResult::unchanged(),
        },

        Action::PageDidLoad { offset, entries } => {
            let browse = state.paging_browse_mut();
            if offset != browse.next_offset || !browse.is_loading() {
                debug!(offset, "discarding stale page");
                return DispatchResult::unchanged();
            }
            browse.apply_page(entries);
            DispatchResult::changed()
        }

        Action::PageDidError { offset, error } => {
            let browse = state.paging_browse_mut();
            if offset != browse.next_offset {
                return DispatchResult::unchanged();
            }
            browse.is_initial_loading = false;
            browse.is_loading_more = false;
            state.message = Some(error.to_string());
            DispatchResult::changed()
        }

        Action::SearchFocus => {
            if state.search.editing || state.screen != Screen::Home {
                return DispatchResult::unchanged();
            }
            state.search.editing = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.search.editing {
                return DispatchResult::unchanged();
            }
            state.search.editing = false;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            if query == state.search.query {
                return DispatchResult::unchanged();
            }
            state.search.query = query;
            if state.search.query.trim().is_empty()
                && (state.is_searching() || state.search.in_flight)
            {
                clear_search(state);
            }
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            let query = state.search.query.trim().to_string();
            if query.is_empty() {
                state.message = Some(CatalogError::Validation.to_string());
                return DispatchResult::changed();
            }
            state.search.generation += 1;
            state.search.in_flight = true;
            state.search.editing = false;
            state.message = None;
            DispatchResult::changed_with(Effect::Search {
                query,
                generation: state.search.generation,
            })
        }

        Action::SearchDidLoad {
            generation,
            matches,
        } => {
            if generation != state.search.generation {
                debug!(generation, "discarding stale search result");
                return DispatchResult::unchanged();
            }
            state.search.in_flight = false;
            if state.mode == ListMode::Browsing {
                state.search.saved_browse = Some(state.browse.clone());
                state.mode = ListMode::Searching;
            }
            state.browse.items = matches.iter().take(PAGE_SIZE).cloned().collect();
            state.browse.has_more = false;
            state.browse.is_initial_loading = false;
            state.browse.is_loading_more = false;
            state.message = if matches.is_empty() {
                Some(CatalogError::NotFound(state.search.query.trim().to_string()).to_string())
            } else {
                None
            };
            state.search.matches = Some(matches);
            state.search.page = 0;
            state.selected_index = 0;
            DispatchResult::changed()
        }

        Action::SearchDidError { generation, error } => {
            if generation != state.search.generation {
                debug!(generation, "discarding stale search error");
                return DispatchResult::unchanged();
            }
            state.search.in_flight = false;
            state.message = Some(error.to_string());
            DispatchResult::changed()
        }

        Action::SearchLoadMore => {
            if load_more_search_results(state) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SearchClear => {
            if clear_search(state) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::ListSelect(index) => select_list(state, index),

        Action::ListMove(delta) => {
            let index = (state.selected_index as i64 + delta as i64).max(0) as usize;
            select_list(state, index)
        }

        Action::DetailOpen => {
            let entry = match state.screen {
                Screen::Home => state.selected_entry(),
                Screen::Favorites => state.selected_favorite(),
                Screen::Detail => None,
            };
            let Some(entry) = entry.cloned() else {
                return DispatchResult::unchanged();
            };
            state.detail_return = state.screen;
            state.screen = Screen::Detail;
            state.detail = DataResource::Loading;
            state.message = None;
            let id = entry.id;
            state.detail_entry = Some(entry);
            DispatchResult::changed_with(Effect::FetchDetail { id })
        }

        Action::DetailClose => {
            if state.screen != Screen::Detail {
                return DispatchResult::unchanged();
            }
            close_detail(state, state.detail_return);
            DispatchResult::changed()
        }

        Action::DetailDidLoad(detail) => {
            if state.detail_entry.as_ref().map(|entry| entry.id) != Some(detail.id) {
                return DispatchResult::unchanged();
            }
            state.detail = DataResource::Loaded(detail);
            DispatchResult::changed()
        }

        Action::DetailDidError { id, error } => {
            if state.detail_entry.as_ref().map(|entry| entry.id) != Some(id) {
                return DispatchResult::unchanged();
            }
            state.detail = DataResource::Failed(error.to_string());
            DispatchResult::changed()
        }

        Action::FavoriteToggle => {
            if !state.favorites_loaded {
                return favorites_pending(state);
            }
            let entry = match state.screen {
                Screen::Home => state.selected_entry(),
                Screen::Favorites => state.selected_favorite(),
                Screen::Detail => state.detail_entry.as_ref(),
            };
            match entry.cloned() {
                Some(entry) => DispatchResult::changed_with(Effect::ToggleFavorite { entry }),
                None => DispatchResult::unchanged(),
            }
        }

        Action::FavoriteRemove => {
            if !state.favorites_loaded {
                return favorites_pending(state);
            }
            let entry = match state.screen {
                Screen::Favorites => state.selected_favorite(),
                Screen::Detail => state.detail_entry.as_ref(),
                Screen::Home => None,
            };
            match entry.cloned() {
                Some(entry) => DispatchResult::changed_with(Effect::RemoveFavorite { entry }),
                None => DispatchResult::unchanged(),
            }
        }

        Action::FavoriteSelect(index) => {
            let bounded = index.min(state.favorites.len().saturating_sub(1));
            if bounded == state.favorite_selected {
                return DispatchResult::unchanged();
            }
            state.favorite_selected = bounded;
            DispatchResult::changed()
        }

        Action::FavoritesDidLoad(entries) => {
            state.favorites = entries;
            state.favorites_loaded = true;
            state.clamp_favorite_selection();
            DispatchResult::changed()
        }

        Action::FavoritesDidChange { entries, notice } => {
            state.favorites = entries;
            state.favorites_loaded = true;
            state.clamp_favorite_selection();
            state.message = Some(notice);
            DispatchResult::changed()
        }

        Action::FavoritesDidError => {
            state.message = Some(FAVORITES_SAVE_FAILED.to_string());
            DispatchResult::changed()
        }

        Action::ScreenHome => switch_screen(state, Screen::Home),
        Action::ScreenFavorites => switch_screen(state, Screen::Favorites),

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Tick => {
            let loading = state.browse.is_loading()
                || state.search.in_flight
                || state.detail.is_loading();
            if loading {
                state.tick = state.tick.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Starts the next page fetch unless one is in flight or the list is exhausted.
fn load_more(state: &mut AppState) -> Option<Effect> {
    if state.mode != ListMode::Browsing || state.browse.is_loading() || !state.browse.has_more {
        return None;
    }
    state.browse.is_loading_more = true;
    Some(Effect::FetchPage {
        offset: state.browse.next_offset,
        limit: PAGE_SIZE,
    })
}

fn load_more_search_results(state: &mut AppState) -> bool {
    if state.mode != ListMode::Searching {
        return false;
    }
    let next = state.search.page + 1;
    let slice = state.search.page_slice(next).to_vec();
    if slice.is_empty() {
        return false;
    }
    state.browse.items.extend(slice);
    state.search.page = next;
    true
}

/// Leaves search mode, restoring the browse snapshot taken on entry.
fn clear_search(state: &mut AppState) -> bool {
    let was_active = state.is_searching()
        || state.search.in_flight
        || !state.search.query.is_empty()
        || state.search.matches.is_some();
    if !was_active {
        return false;
    }
    // Any result still in flight now belongs to an older generation.
    state.search.generation += 1;
    state.search.in_flight = false;
    state.search.query.clear();
    state.search.matches = None;
    state.search.page = 0;
    if let Some(saved) = state.search.saved_browse.take() {
        state.browse = saved;
        state.selected_index = 0;
    }
    state.mode = ListMode::Browsing;
    state.message = None;
    true
}

fn select_list(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    if state.screen != Screen::Home {
        return DispatchResult::unchanged();
    }
    let mut changed = state.set_selected_index(index);
    let mut effects = Vec::new();
    if state.near_end() {
        match state.mode {
            ListMode::Browsing => effects.extend(load_more(state)),
            ListMode::Searching => changed |= load_more_search_results(state),
        }
    }
    if !effects.is_empty() {
        DispatchResult::changed_with_many(effects)
    } else if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

fn close_detail(state: &mut AppState, target: Screen) {
    state.screen = target;
    state.detail = DataResource::Empty;
    state.detail_entry = None;
}

fn switch_screen(state: &mut AppState, target: Screen) -> DispatchResult<Effect> {
    if state.screen == target {
        return DispatchResult::unchanged();
    }
    if state.screen == Screen::Detail {
        close_detail(state, target);
    } else {
        state.screen = target;
    }
    state.search.editing = false;
    state.clamp_favorite_selection();
    DispatchResult::changed()
}

/// Favorites mutations are held off until the saved set has loaded.
fn favorites_pending(state: &mut AppState) -> DispatchResult<Effect> {
    if state.message.as_deref() == Some(FAVORITES_PENDING) {
        return DispatchResult::unchanged();
    }
    state.message = Some(FAVORITES_PENDING.to_string());
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::{BrowseState, CatalogDetail, CatalogEntry};

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry::from_resource(
            name.to_string(),
            format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
        )
        .unwrap()
    }

    fn page(offset: usize, count: usize) -> Vec<CatalogEntry> {
        (offset..offset + count)
            .map(|idx| entry(idx as u32 + 1, &format!("mon{}", idx + 1)))
            .collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        reducer(&mut state, Action::Init);
        reducer(
            &mut state,
            Action::PageDidLoad {
                offset: 0,
                entries: page(0, PAGE_SIZE),
            },
        );
        state
    }

    #[test]
    fn init_requests_first_page_and_favorites() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Init);
        assert!(result.changed);
        assert!(state.browse.is_initial_loading);
        assert_eq!(
            result.effects,
            vec![
                Effect::LoadFavorites,
                Effect::FetchPage {
                    offset: 0,
                    limit: PAGE_SIZE
                }
            ]
        );
    }

    #[test]
    fn init_fires_once() {
        let mut state = AppState::default();
        reducer(&mut state, Action::Init);
        let again = reducer(&mut state, Action::Init);
        assert!(again.effects.iter().all(|e| !matches!(e, Effect::FetchPage { .. })));
    }

    #[test]
    fn page_load_appends_and_advances_offset() {
        let state = loaded_state();
        assert_eq!(state.browse.items.len(), PAGE_SIZE);
        assert_eq!(state.browse.next_offset, PAGE_SIZE);
        assert!(state.browse.has_more);
        assert!(!state.browse.is_initial_loading);
    }

    #[test]
    fn short_page_ends_pagination() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::LoadMore);
        assert_eq!(
            result.effects,
            vec![Effect::FetchPage {
                offset: PAGE_SIZE,
                limit: PAGE_SIZE
            }]
        );
        reducer(
            &mut state,
            Action::PageDidLoad {
                offset: PAGE_SIZE,
                entries: page(PAGE_SIZE, 7),
            },
        );
        assert_eq!(state.browse.items.len(), PAGE_SIZE + 7);
        assert_eq!(state.browse.next_offset, 2 * PAGE_SIZE);
        assert!(!state.browse.has_more);

        let result = reducer(&mut state, Action::LoadMore);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn load_more_while_pending_issues_one_request() {
        let mut state = loaded_state();
        let first = reducer(&mut state, Action::LoadMore);
        let second = reducer(&mut state, Action::LoadMore);
        assert_eq!(first.effects.len(), 1);
        assert!(second.effects.is_empty());
        assert!(!second.changed);
    }

    #[test]
    fn page_error_leaves_items_untouched() {
        let mut state = loaded_state();
        reducer(&mut state, Action::LoadMore);
        let result = reducer(
            &mut state,
            Action::PageDidError {
                offset: PAGE_SIZE,
                error: CatalogError::RemoteUnavailable,
            },
        );
        assert!(result.changed);
        assert_eq!(state.browse.items.len(), PAGE_SIZE);
        assert_eq!(state.browse.next_offset, PAGE_SIZE);
        assert!(!state.browse.is_loading_more);
        assert_eq!(
            state.message.as_deref(),
            Some("Could not reach the catalog, try again")
        );
    }

    #[test]
    fn empty_search_is_rejected_without_effects() {
        let mut state = loaded_state();
        let before = state.browse.clone();
        state.search.query = "   ".into();
        let result = reducer(&mut state, Action::SearchSubmit);
        assert!(result.effects.is_empty());
        assert_eq!(state.browse, before);
        assert_eq!(state.mode, ListMode::Browsing);
        assert_eq!(
            state.message,
            Some(CatalogError::Validation.to_string())
        );
    }

    #[test]
    fn search_round_trip_restores_browse_state() {
        let mut state = loaded_state();
        reducer(&mut state, Action::SearchQueryChange("char".into()));
        let result = reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        assert_eq!(
            result.effects,
            vec![Effect::Search {
                query: "char".into(),
                generation
            }]
        );

        let matches = vec![
            entry(4, "charmander"),
            entry(5, "charmeleon"),
            entry(6, "charizard"),
        ];
        reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: matches.clone(),
            },
        );
        assert_eq!(state.mode, ListMode::Searching);
        assert_eq!(state.browse.items, matches);
        assert!(!state.browse.has_more);

        reducer(&mut state, Action::SearchClear);
        assert_eq!(state.mode, ListMode::Browsing);
        assert_eq!(state.browse.items, page(0, PAGE_SIZE));
        assert_eq!(state.browse.next_offset, PAGE_SIZE);
        assert!(state.browse.has_more);
        assert!(state.search.saved_browse.is_none());
    }

    #[test]
    fn search_pages_locally() {
        let mut state = loaded_state();
        state.search.query = "mon".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        let matches = page(0, 45);
        reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: matches.clone(),
            },
        );
        assert_eq!(state.browse.items.len(), 20);

        assert!(reducer(&mut state, Action::SearchLoadMore).changed);
        assert_eq!(state.browse.items.len(), 40);
        assert!(reducer(&mut state, Action::SearchLoadMore).changed);
        assert_eq!(state.browse.items, matches);
        assert_eq!(state.search.page, 2);

        let result = reducer(&mut state, Action::SearchLoadMore);
        assert!(!result.changed);
        assert_eq!(state.search.page, 2);
    }

    #[test]
    fn load_more_is_ignored_while_searching() {
        let mut state = loaded_state();
        state.search.query = "mon1".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: vec![entry(1, "mon1")],
            },
        );
        let result = reducer(&mut state, Action::LoadMore);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn empty_matches_show_no_results() {
        let mut state = loaded_state();
        state.search.query = "9999".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: Vec::new(),
            },
        );
        assert_eq!(state.mode, ListMode::Searching);
        assert!(state.browse.items.is_empty());
        assert_eq!(
            state.message.as_deref(),
            Some("No creature found for '9999'")
        );
    }

    #[test]
    fn search_error_keeps_browse_state() {
        let mut state = loaded_state();
        state.search.query = "pika".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        reducer(
            &mut state,
            Action::SearchDidError {
                generation,
                error: CatalogError::RemoteUnavailable,
            },
        );
        assert_eq!(state.mode, ListMode::Browsing);
        assert_eq!(state.browse.items.len(), PAGE_SIZE);
        assert!(!state.search.in_flight);
        assert!(state.message.is_some());
    }

    #[test]
    fn stale_search_after_clear_is_discarded() {
        let mut state = loaded_state();
        state.search.query = "char".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        reducer(&mut state, Action::SearchQueryChange(String::new()));

        let result = reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: vec![entry(4, "charmander")],
            },
        );
        assert!(!result.changed);
        assert_eq!(state.mode, ListMode::Browsing);
        assert_eq!(state.browse.items.len(), PAGE_SIZE);
    }

    #[test]
    fn research_keeps_first_snapshot() {
        let mut state = loaded_state();
        let before_search = state.browse.clone();
        for query in ["char", "pika"] {
            state.search.query = query.into();
            reducer(&mut state, Action::SearchSubmit);
            let generation = state.search.generation;
            reducer(
                &mut state,
                Action::SearchDidLoad {
                    generation,
                    matches: vec![entry(25, "pikachu")],
                },
            );
        }
        assert_eq!(state.search.saved_browse.as_ref(), Some(&before_search));
        reducer(&mut state, Action::SearchClear);
        assert_eq!(state.browse, before_search);
    }

    #[test]
    fn page_arriving_during_search_lands_in_snapshot() {
        let mut state = loaded_state();
        reducer(&mut state, Action::LoadMore);
        state.search.query = "mon".into();
        reducer(&mut state, Action::SearchSubmit);
        let generation = state.search.generation;
        reducer(
            &mut state,
            Action::SearchDidLoad {
                generation,
                matches: vec![entry(3, "mon3")],
            },
        );
        reducer(
            &mut state,
            Action::PageDidLoad {
                offset: PAGE_SIZE,
                entries: page(PAGE_SIZE, PAGE_SIZE),
            },
        );
        assert_eq!(state.browse.items.len(), 1);

        reducer(&mut state, Action::SearchClear);
        assert_eq!(state.browse.items.len(), 2 * PAGE_SIZE);
        assert_eq!(state.browse.next_offset, 2 * PAGE_SIZE);
        assert!(!state.browse.is_loading_more);
    }

    #[test]
    fn stale_page_offset_is_ignored() {
        let mut state = loaded_state();
        let result = reducer(
            &mut state,
            Action::PageDidLoad {
                offset: 0,
                entries: page(0, PAGE_SIZE),
            },
        );
        assert!(!result.changed);
        assert_eq!(state.browse.items.len(), PAGE_SIZE);
    }

    #[test]
    fn selecting_near_end_requests_next_page() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::ListSelect(PAGE_SIZE - 2));
        assert_eq!(
            result.effects,
            vec![Effect::FetchPage {
                offset: PAGE_SIZE,
                limit: PAGE_SIZE
            }]
        );
        let again = reducer(&mut state, Action::ListMove(1));
        assert!(again.effects.is_empty());
    }

    #[test]
    fn detail_flow_ignores_other_ids() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::DetailOpen);
        assert_eq!(result.effects, vec![Effect::FetchDetail { id: 1 }]);
        assert_eq!(state.screen, Screen::Detail);
        assert!(state.detail.is_loading());

        let other = CatalogDetail {
            id: 2,
            name: "mon2".into(),
            height: 1,
            weight: 1,
            types: Vec::new(),
            abilities: Vec::new(),
            image_url: String::new(),
            stats: Vec::new(),
        };
        assert!(!reducer(&mut state, Action::DetailDidLoad(other)).changed);

        reducer(
            &mut state,
            Action::DetailDidError {
                id: 1,
                error: CatalogError::NotFound("1".into()),
            },
        );
        assert_eq!(
            state.detail,
            DataResource::Failed("No creature found for '1'".into())
        );

        reducer(&mut state, Action::DetailClose);
        assert_eq!(state.screen, Screen::Home);
        assert!(state.detail_entry.is_none());
    }

    #[test]
    fn favorite_toggle_emits_effect_without_touching_mirror() {
        let mut state = loaded_state();
        state.favorites_loaded = true;
        let result = reducer(&mut state, Action::FavoriteToggle);
        assert_eq!(
            result.effects,
            vec![Effect::ToggleFavorite {
                entry: entry(1, "mon1")
            }]
        );
        assert!(state.favorites.is_empty());

        reducer(
            &mut state,
            Action::FavoritesDidChange {
                entries: vec![entry(1, "mon1")],
                notice: "mon1 added to favorites".into(),
            },
        );
        assert!(state.is_favorite(&entry(1, "mon1")));
    }

    #[test]
    fn favorite_remove_targets_favorites_selection() {
        let mut state = AppState {
            favorites: vec![entry(4, "charmander"), entry(25, "pikachu")],
            favorites_loaded: true,
            ..Default::default()
        };
        assert!(reducer(&mut state, Action::FavoriteRemove).effects.is_empty());

        reducer(&mut state, Action::ScreenFavorites);
        reducer(&mut state, Action::FavoriteSelect(1));
        let result = reducer(&mut state, Action::FavoriteRemove);
        assert_eq!(
            result.effects,
            vec![Effect::RemoveFavorite {
                entry: entry(25, "pikachu")
            }]
        );

        reducer(
            &mut state,
            Action::FavoritesDidChange {
                entries: vec![entry(4, "charmander")],
                notice: "pikachu removed from favorites".into(),
            },
        );
        assert_eq!(state.favorite_selected, 0);
    }

    #[test]
    fn favorite_mutations_wait_for_saved_set() {
        let mut state = loaded_state();
        assert!(!state.favorites_loaded);

        let toggle = reducer(&mut state, Action::FavoriteToggle);
        assert!(toggle.effects.is_empty());
        assert_eq!(state.message.as_deref(), Some(FAVORITES_PENDING));

        reducer(&mut state, Action::ScreenFavorites);
        assert!(reducer(&mut state, Action::FavoriteRemove).effects.is_empty());

        reducer(&mut state, Action::FavoritesDidLoad(vec![entry(6, "charizard")]));
        reducer(&mut state, Action::ScreenHome);
        let toggle = reducer(&mut state, Action::FavoriteToggle);
        assert_eq!(
            toggle.effects,
            vec![Effect::ToggleFavorite {
                entry: entry(1, "mon1")
            }]
        );
    }

    #[test]
    fn favorites_failure_shows_fixed_message() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::FavoritesDidError).changed);
        assert_eq!(state.message.as_deref(), Some(FAVORITES_SAVE_FAILED));
    }

    #[test]
    fn tick_only_rerenders_while_loading() {
        let mut state = AppState {
            browse: BrowseState::new(),
            ..Default::default()
        };
        assert!(!reducer(&mut state, Action::Tick).changed);
        state.browse.is_loading_more = true;
        assert!(reducer(&mut state, Action::Tick).changed);
    }
}
