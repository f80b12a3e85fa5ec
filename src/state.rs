use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

/// Items requested per list call, and the slice size for local search paging.
pub const PAGE_SIZE: usize = 20;
/// Rows from the end of the list at which the next page is requested.
pub const LOAD_MORE_THRESHOLD: usize = 5;

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub image_url: String,
}

impl CatalogEntry {
    /// Builds an entry from a list resource, taking the id from the last
    /// non-empty path segment of `url`.
    pub fn from_resource(name: String, url: String) -> Option<Self> {
        let id = id_from_url(&url)?;
        Some(Self {
            id,
            name,
            url,
            image_url: sprite_url(id),
        })
    }

    pub fn from_detail(detail: &CatalogDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            url: String::new(),
            image_url: sprite_url(detail.id),
        }
    }
}

pub fn id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|part| !part.is_empty())
        .last()
        .and_then(|part| part.parse::<u32>().ok())
        .filter(|id| *id > 0)
}

pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE}/{id}.png")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDetail {
    pub id: u32,
    pub name: String,
    /// Tenths of a metre.
    pub height: u32,
    /// Tenths of a kilogram.
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub image_url: String,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BrowseState {
    /// The displayed sequence (search results replace it while searching).
    pub items: Vec<CatalogEntry>,
    pub next_offset: usize,
    pub has_more: bool,
    pub is_initial_loading: bool,
    pub is_loading_more: bool,
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            has_more: true,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_initial_loading || self.is_loading_more
    }

    /// Appends one fetched page and advances the offset by a full page.
    pub fn apply_page(&mut self, entries: Vec<CatalogEntry>) {
        self.has_more = entries.len() >= PAGE_SIZE;
        self.items.extend(entries);
        self.next_offset += PAGE_SIZE;
        self.is_initial_loading = false;
        self.is_loading_more = false;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchState {
    pub query: String,
    /// Whether the search input has keyboard focus.
    pub editing: bool,
    pub matches: Option<Vec<CatalogEntry>>,
    pub page: usize,
    pub saved_browse: Option<BrowseState>,
    pub in_flight: bool,
    /// Bumped on every submit and clear; results carrying an older value are stale.
    pub generation: u64,
}

impl SearchState {
    /// The slice of matches that `page` would add, empty past the end.
    pub fn page_slice(&self, page: usize) -> &[CatalogEntry] {
        let Some(matches) = self.matches.as_deref() else {
            return &[];
        };
        let start = (page * PAGE_SIZE).min(matches.len());
        let end = (start + PAGE_SIZE).min(matches.len());
        &matches[start..end]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ListMode {
    #[default]
    Browsing,
    Searching,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Screen {
    #[default]
    Home,
    Detail,
    Favorites,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub screen: Screen,
    pub mode: ListMode,
    pub browse: BrowseState,
    pub search: SearchState,
    pub selected_index: usize,

    pub favorites: Vec<CatalogEntry>,
    pub favorites_loaded: bool,
    pub favorite_selected: usize,

    pub detail_entry: Option<CatalogEntry>,
    pub detail: DataResource<CatalogDetail>,
    pub detail_return: Screen,

    pub message: Option<String>,
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            terminal_size: (80, 24),
            screen: Screen::Home,
            mode: ListMode::Browsing,
            browse: BrowseState::new(),
            search: SearchState::default(),
            selected_index: 0,
            favorites: Vec::new(),
            favorites_loaded: false,
            favorite_selected: 0,
            detail_entry: None,
            detail: DataResource::Empty,
            detail_return: Screen::Home,
            message: None,
            tick: 0,
        }
    }
}

impl AppState {
    pub fn displayed(&self) -> &[CatalogEntry] {
        &self.browse.items
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.browse.items.get(self.selected_index)
    }

    pub fn selected_favorite(&self) -> Option<&CatalogEntry> {
        self.favorites.get(self.favorite_selected)
    }

    pub fn is_favorite(&self, entry: &CatalogEntry) -> bool {
        self.favorites.iter().any(|fav| fav.id == entry.id)
    }

    pub fn is_searching(&self) -> bool {
        self.mode == ListMode::Searching
    }

    /// The browse state owning list fetches: the snapshot while searching.
    pub fn paging_browse_mut(&mut self) -> &mut BrowseState {
        match self.search.saved_browse.as_mut() {
            Some(saved) if self.mode == ListMode::Searching => saved,
            _ => &mut self.browse,
        }
    }

    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if self.browse.items.is_empty() {
            self.selected_index = 0;
            return false;
        }
        let bounded = index.min(self.browse.items.len() - 1);
        if bounded != self.selected_index {
            self.selected_index = bounded;
            return true;
        }
        false
    }

    pub fn near_end(&self) -> bool {
        self.selected_index + LOAD_MORE_THRESHOLD >= self.browse.items.len()
    }

    pub fn clamp_favorite_selection(&mut self) {
        if self.favorite_selected >= self.favorites.len() {
            self.favorite_selected = self.favorites.len().saturating_sub(1);
        }
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("List")
                .entry("mode", ron_string(&self.mode))
                .entry("displayed", ron_string(&self.browse.items.len()))
                .entry("next_offset", ron_string(&self.browse.next_offset))
                .entry("has_more", ron_string(&self.browse.has_more))
                .entry("selected", ron_string(&self.selected_index)),
            DebugSection::new("Search")
                .entry("query", ron_string(&self.search.query))
                .entry("editing", ron_string(&self.search.editing))
                .entry(
                    "matches",
                    ron_string(&self.search.matches.as_ref().map(|m| m.len())),
                )
                .entry("page", ron_string(&self.search.page))
                .entry("saved", ron_string(&self.search.saved_browse.is_some()))
                .entry("generation", ron_string(&self.search.generation)),
            DebugSection::new("Status")
                .entry("screen", ron_string(&self.screen))
                .entry("initial_loading", ron_string(&self.browse.is_initial_loading))
                .entry("loading_more", ron_string(&self.browse.is_loading_more))
                .entry("search_in_flight", ron_string(&self.search.in_flight))
                .entry("favorites", ron_string(&self.favorites.len()))
                .entry("message", ron_string(&self.message)),
        ]
    }
}
