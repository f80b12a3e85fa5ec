use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::state::{CatalogDetail, CatalogEntry, Stat};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
/// Large enough to cover the whole catalog in one page.
const ALL_LIMIT: usize = 100_000;

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<PokemonTypeSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    stats: Vec<PokemonStatSlot>,
    sprites: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u32,
    stat: NamedResource,
}

/// Read side of the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, offset: usize, limit: usize)
        -> Result<Vec<CatalogEntry>, CatalogError>;

    async fn fetch_detail(&self, name_or_id: &str) -> Result<CatalogDetail, CatalogError>;

    async fn fetch_all(&self) -> Result<Arc<[CatalogEntry]>, CatalogError>;

    /// Case-insensitive substring match over the full catalog, in catalog order.
    async fn search_by_partial_name(
        &self,
        query: &str,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let all = self.fetch_all().await?;
        Ok(all
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

/// Submit-search lookup: exact id for numeric input, partial name otherwise.
///
/// A numeric query that the catalog does not know yields no matches rather
/// than an error.
pub async fn search<S: CatalogSource + ?Sized>(
    source: &S,
    query: &str,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CatalogError::Validation);
    }
    if is_numeric_query(query) {
        return match source.fetch_detail(query).await {
            Ok(detail) => Ok(vec![CatalogEntry::from_detail(&detail)]),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(err) => Err(err),
        };
    }
    source.search_by_partial_name(query).await
}

pub fn is_numeric_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|ch| ch.is_ascii_digit())
}

/// Memo of the full catalog list, owned by one client.
#[derive(Debug, Default)]
pub struct CatalogCache {
    all: Mutex<Option<Arc<[CatalogEntry]>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<[CatalogEntry]>> {
        self.all.lock().await.clone()
    }

    pub async fn invalidate(&self) {
        self.all.lock().await.take();
    }
}

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    cache: CatalogCache,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: CatalogCache::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    async fn fetch_list(&self, offset: usize, limit: usize) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url);
        debug!(%url, "fetching catalog page");
        let response = self.client.get(&url).send().await.map_err(|err| {
            warn!(%url, error = %err, "catalog page request failed");
            CatalogError::RemoteUnavailable
        })?;
        let response = response.error_for_status().map_err(|err| {
            warn!(%url, error = %err, "catalog page returned error status");
            CatalogError::RemoteUnavailable
        })?;
        let body: ListResponse = response.json().await.map_err(|err| {
            warn!(%url, error = %err, "catalog page decode failed");
            CatalogError::RemoteUnavailable
        })?;
        body.results
            .into_iter()
            .map(|item| {
                CatalogEntry::from_resource(item.name, item.url).ok_or_else(|| {
                    warn!(%url, "catalog entry without a numeric id");
                    CatalogError::RemoteUnavailable
                })
            })
            .collect()
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.fetch_list(offset, limit).await
    }

    async fn fetch_detail(&self, name_or_id: &str) -> Result<CatalogDetail, CatalogError> {
        let key = name_or_id.trim().to_lowercase();
        let url = format!("{}/pokemon/{key}", self.base_url);
        debug!(%url, "fetching catalog detail");
        let response = self.client.get(&url).send().await.map_err(|err| {
            warn!(%url, error = %err, "detail request failed");
            CatalogError::RemoteUnavailable
        })?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "detail not found");
            return Err(CatalogError::NotFound(name_or_id.trim().to_string()));
        }
        let response = response.error_for_status().map_err(|err| {
            warn!(%url, error = %err, "detail returned error status");
            CatalogError::RemoteUnavailable
        })?;
        let body: PokemonResponse = response.json().await.map_err(|err| {
            warn!(%url, error = %err, "detail decode failed");
            CatalogError::RemoteUnavailable
        })?;
        Ok(detail_from_response(body))
    }

    async fn fetch_all(&self) -> Result<Arc<[CatalogEntry]>, CatalogError> {
        // Held across the fetch so concurrent first callers share one request.
        let mut slot = self.cache.all.lock().await;
        if let Some(all) = slot.as_ref() {
            return Ok(Arc::clone(all));
        }
        let entries: Arc<[CatalogEntry]> = self.fetch_list(0, ALL_LIMIT).await?.into();
        debug!(count = entries.len(), "cached full catalog");
        *slot = Some(Arc::clone(&entries));
        Ok(entries)
    }
}

fn detail_from_response(response: PokemonResponse) -> CatalogDetail {
    CatalogDetail {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        image_url: pointer_string(&response.sprites, "/front_default").unwrap_or_default(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| Stat {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
    }
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
