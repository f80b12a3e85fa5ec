use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::state::{CatalogDetail, CatalogEntry};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Initial load on mount: first page plus persisted favorites
    Init,

    LoadMore,
    PageDidLoad { offset: usize, entries: Vec<CatalogEntry> },
    PageDidError { offset: usize, error: CatalogError },

    SearchFocus,
    SearchBlur,
    /// Search text changed; emptying it clears an active search
    SearchQueryChange(String),
    SearchSubmit,
    SearchLoadMore,
    SearchClear,
    SearchDidLoad { generation: u64, matches: Vec<CatalogEntry> },
    SearchDidError { generation: u64, error: CatalogError },

    ListSelect(usize),
    ListMove(i16),

    DetailOpen,
    DetailClose,
    DetailDidLoad(CatalogDetail),
    DetailDidError { id: u32, error: CatalogError },

    FavoriteToggle,
    FavoriteRemove,
    FavoriteSelect(usize),
    FavoritesDidLoad(Vec<CatalogEntry>),
    FavoritesDidChange { entries: Vec<CatalogEntry>, notice: String },
    FavoritesDidError,

    ScreenHome,
    ScreenFavorites,

    UiTerminalResize(u16, u16),
    Tick,
    Quit,
}
