//! HTTP-level integration tests for venues, artists and shows.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let body = json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1015 Folsom Street",
        "genres": ["Jazz", "Reggae"],
        "website_link": "https://www.themusicalhop.com",
        "seeking_talent": true,
    });
    let response = post_json(build_test_app(pool.clone()), "/venues/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["venue"]["id"].as_i64().unwrap()
}

async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let body = json!({"name": name, "genres": ["Rock n Roll"], "seeking_venue": true});
    let response = post_json(build_test_app(pool.clone()), "/artists/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["artist"]["id"].as_i64().unwrap()
}

async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, days_from_now: i64) -> i64 {
    let body = json!({
        "venue_id": venue_id,
        "artist_id": artist_id,
        "start_time": Utc::now() + Duration::days(days_from_now),
    });
    let response = post_json(build_test_app(pool.clone()), "/shows/create", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["show"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Venues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn venues_are_grouped_by_city_and_state(pool: PgPool) {
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

    let json = body_json(get(build_test_app(pool), "/venues").await).await;

    let areas = json["areas"].as_array().unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0]["city"], "San Francisco");
    assert_eq!(areas[0]["venues"].as_array().unwrap().len(), 2);
    assert_eq!(areas[1]["state"], "NY");
    assert_eq!(areas[1]["venues"][0]["num_upcoming_shows"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_search_counts_matches(pool: PgPool) {
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

    let json = body_json(
        post_json(build_test_app(pool.clone()), "/venues/search", json!({"search_term": "Music"}))
            .await,
    )
    .await;
    assert_eq!(json["count"], 2);

    let all = body_json(
        post_json(build_test_app(pool), "/venues/search", json!({"search_term": ""})).await,
    )
    .await;
    assert_eq!(all["count"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_detail_splits_shows_by_time(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue_id, artist_id, -30).await;
    create_show(&pool, venue_id, artist_id, 30).await;
    create_show(&pool, venue_id, artist_id, 60).await;

    let json = body_json(get(build_test_app(pool), &format!("/venues/{venue_id}")).await).await;

    let venue = &json["venue"];
    assert_eq!(venue["name"], "The Musical Hop");
    assert_eq!(venue["past_shows_count"], 1);
    assert_eq!(venue["upcoming_shows_count"], 2);
    assert_eq!(venue["upcoming_shows"][0]["artist_name"], "Guns N Petals");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_venue_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/venues/4242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_edit_merges_supplied_fields(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let uri = format!("/venues/{venue_id}/edit");

    let response = post_json(build_test_app(pool.clone()), &uri, json!({"phone": "123-123-1234"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let form = body_json(get(build_test_app(pool), &uri).await).await;
    assert_eq!(form["venue"]["phone"], "123-123-1234");
    assert_eq!(form["venue"]["city"], "San Francisco");
    assert_eq!(form["venue"]["seeking_talent"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_edit_with_blank_link_clears_it(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let uri = format!("/venues/{venue_id}/edit");

    let response = post_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"website_link": "", "address": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let form = body_json(get(build_test_app(pool), &uri).await).await;
    assert_eq!(form["venue"]["website_link"], json!(null));
    assert_eq!(form["venue"]["address"], json!(null));
    assert_eq!(form["venue"]["city"], "San Francisco");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_without_name_is_422(pool: PgPool) {
    let response = post_json(build_test_app(pool.clone()), "/venues/create", json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(build_test_app(pool), "/venues/create", json!({"city": "Nowhere"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blanking_a_venue_name_is_422(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let response = post_json(
        build_test_app(pool),
        &format!("/venues/{venue_id}/edit"),
        json!({"name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_venue_removes_its_shows(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Matt Quevedo").await;
    create_show(&pool, venue_id, artist_id, 5).await;

    let uri = format!("/venues/{venue_id}/delete");
    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], venue_id);

    let shows = body_json(get(build_test_app(pool.clone()), "/shows").await).await;
    assert_eq!(shows["shows"], json!([]));

    let again = delete(build_test_app(pool), &uri).await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Artists and shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn artist_listing_and_search(pool: PgPool) {
    create_artist(&pool, "Guns N Petals").await;
    create_artist(&pool, "Matt Quevedo").await;
    create_artist(&pool, "The Wild Sax Band").await;

    let list = body_json(get(build_test_app(pool.clone()), "/artists").await).await;
    assert_eq!(list["artists"].as_array().unwrap().len(), 3);
    assert_eq!(list["artists"][0]["name"], "Guns N Petals");

    let hits = body_json(
        post_json(build_test_app(pool), "/artists/search", json!({"search_term": "a"})).await,
    )
    .await;
    assert_eq!(hits["count"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn artist_detail_splits_shows_by_time(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue_id, artist_id, -3).await;
    create_show(&pool, venue_id, artist_id, 3).await;
    create_show(&pool, venue_id, artist_id, 30).await;

    let response = get(build_test_app(pool), &format!("/artists/{artist_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["artist"]["name"], "Guns N Petals");
    assert_eq!(json["artist"]["past_shows_count"], 1);
    assert_eq!(json["artist"]["upcoming_shows_count"], 2);
    assert_eq!(json["artist"]["upcoming_shows"][0]["venue_name"], "The Musical Hop");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_artist_is_404(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/artists/4242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool), "/artists/4242/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn artist_edit_merges_and_clears_fields(pool: PgPool) {
    let artist_id = create_artist(&pool, "Matt Quevedo").await;
    let uri = format!("/artists/{artist_id}/edit");

    let response = post_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"city": "New York", "seeking_description": "Looking for shows"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"seeking_description": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let form = body_json(get(build_test_app(pool), &uri).await).await;
    assert_eq!(form["artist"]["name"], "Matt Quevedo");
    assert_eq!(form["artist"]["city"], "New York");
    assert_eq!(form["artist"]["seeking_description"], json!(null));
    assert_eq!(form["artist"]["seeking_venue"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_an_artist_twice_is_422(pool: PgPool) {
    let artist_id = create_artist(&pool, "The Wild Sax Band").await;
    let uri = format!("/artists/{artist_id}/delete");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], artist_id);

    let again = delete(build_test_app(pool), &uri).await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(again).await["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_show_twice_is_422(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    let show_id = create_show(&pool, venue_id, artist_id, 2).await;
    let uri = format!("/shows/{show_id}/delete");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], show_id);

    let shows = body_json(get(build_test_app(pool.clone()), "/shows").await).await;
    assert_eq!(shows["shows"], json!([]));

    let again = delete(build_test_app(pool), &uri).await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn show_listing_names_venue_and_artist(pool: PgPool) {
    let venue_id = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let artist_id = create_artist(&pool, "Guns N Petals").await;
    create_show(&pool, venue_id, artist_id, 1).await;

    let json = body_json(get(build_test_app(pool), "/shows").await).await;

    assert_eq!(json["shows"][0]["venue_name"], "The Musical Hop");
    assert_eq!(json["shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(json["shows"][0]["artist_id"], artist_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn show_with_unknown_venue_is_422(pool: PgPool) {
    let artist_id = create_artist(&pool, "The Wild Sax Band").await;
    let body = json!({"venue_id": 999, "artist_id": artist_id, "start_time": Utc::now()});

    let response = post_json(build_test_app(pool.clone()), "/shows/create", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let shows = body_json(get(build_test_app(pool), "/shows").await).await;
    assert_eq!(shows["shows"], json!([]));
}
