use crate::state::CatalogEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchPage { offset: usize, limit: usize },
    Search { query: String, generation: u64 },
    FetchDetail { id: u32 },
    LoadFavorites,
    ToggleFavorite { entry: CatalogEntry },
    RemoveFavorite { entry: CatalogEntry },
}
