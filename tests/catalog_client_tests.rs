//! Catalog client against a mock PokeAPI server

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use pokedex::api::{self, CatalogClient, CatalogSource};
use pokedex::error::CatalogError;

fn list_body(names: &[(u32, &str)]) -> serde_json::Value {
    let results: Vec<_> = names
        .iter()
        .map(|(id, name)| {
            json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            })
        })
        .collect();
    json!({ "count": 1302, "next": null, "previous": null, "results": results })
}

fn pikachu_body() -> serde_json::Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }],
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "sprites": { "front_default": "https://example.test/25.png", "back_default": null }
    })
}

#[tokio::test]
async fn fetch_page_maps_ids_and_images() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pokemon")
                .query_param("offset", "20")
                .query_param("limit", "20");
            then.status(200)
                .json_body(list_body(&[(21, "spearow"), (22, "fearow")]));
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    let entries = client.fetch_page(20, 20).await.unwrap();

    mock.assert_hits_async(1).await;
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![21, 22]);
    assert_eq!(entries[0].name, "spearow");
    assert!(entries[1].image_url.ends_with("/22.png"));
}

#[tokio::test]
async fn fetch_page_server_error_is_remote_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon");
            then.status(503);
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    assert_eq!(
        client.fetch_page(0, 20).await,
        Err(CatalogError::RemoteUnavailable)
    );
}

#[tokio::test]
async fn fetch_detail_decodes_profile() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/pikachu");
            then.status(200).json_body(pikachu_body());
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    let detail = client.fetch_detail("  Pikachu ").await.unwrap();

    assert_eq!(detail.id, 25);
    assert_eq!(detail.height, 4);
    assert_eq!(detail.weight, 60);
    assert_eq!(detail.types, vec!["electric".to_string()]);
    assert_eq!(
        detail.abilities,
        vec!["static".to_string(), "lightning-rod".to_string()]
    );
    assert_eq!(detail.image_url, "https://example.test/25.png");
    assert_eq!(detail.stats[1].name, "speed");
    assert_eq!(detail.stats[1].value, 90);
}

#[tokio::test]
async fn fetch_detail_distinguishes_missing_from_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/9999");
            then.status(404).body("Not Found");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/25");
            then.status(500);
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    assert_eq!(
        client.fetch_detail("9999").await,
        Err(CatalogError::NotFound("9999".into()))
    );
    assert_eq!(
        client.fetch_detail("25").await,
        Err(CatalogError::RemoteUnavailable)
    );
}

#[tokio::test]
async fn numeric_search_for_unknown_id_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/9999");
            then.status(404);
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    assert_eq!(api::search(&client, "9999").await, Ok(Vec::new()));
}

#[tokio::test]
async fn full_catalog_is_fetched_once_across_searches() {
    let server = MockServer::start_async().await;
    let all = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pokemon")
                .query_param("offset", "0")
                .query_param("limit", "100000");
            then.status(200).json_body(list_body(&[
                (4, "charmander"),
                (5, "charmeleon"),
                (6, "charizard"),
                (25, "pikachu"),
            ]));
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    let first = api::search(&client, "char").await.unwrap();
    let second = api::search(&client, "pika").await.unwrap();

    all.assert_hits_async(1).await;
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, 25);
}

#[tokio::test]
async fn invalidated_cache_refetches() {
    let server = MockServer::start_async().await;
    let all = server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon").query_param("limit", "100000");
            then.status(200).json_body(list_body(&[(25, "pikachu")]));
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    client.fetch_all().await.unwrap();
    assert!(client.cache().get().await.is_some());

    client.cache().invalidate().await;
    assert!(client.cache().get().await.is_none());
    client.fetch_all().await.unwrap();

    all.assert_hits_async(2).await;
}

#[tokio::test]
async fn failed_full_fetch_is_not_cached() {
    let server = MockServer::start_async().await;
    let mut failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon");
            then.status(500);
        })
        .await;

    let client = CatalogClient::new(server.base_url());
    assert_eq!(
        api::search(&client, "pika").await,
        Err(CatalogError::RemoteUnavailable)
    );
    failing.delete_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon");
            then.status(200).json_body(list_body(&[(25, "pikachu")]));
        })
        .await;
    let matches = api::search(&client, "pika").await.unwrap();
    assert_eq!(matches.len(), 1);
}
