#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Request validation tests: every malformed input is a 400 with a JSON
//! message, checked before the store is touched.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::TestApp;

const BAD_PAGINATION: &str = "Invalid pagination format. Page and per_page should be positive integers with per_page no greater than 10.";

#[tokio::test]
async fn list_prizes_rejects_bad_catalog_ids() {
    let app = TestApp::new();
    for catalog_id in ["0", "6", "abc", "-1", "1.5"] {
        let (status, body) = app.list_prizes(catalog_id, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{catalog_id}");
        assert_eq!(
            body["error"],
            "Catalog ID should be an integer between 1 and 5.",
            "{catalog_id}"
        );
    }
}

#[tokio::test]
async fn per_page_above_ten_is_rejected() {
    let app = TestApp::new();

    for filter in [None, Some(json!({})), Some(json!({"description": "prize"}))] {
        let (status, body) = app
            .list_prizes("1", filter.as_ref(), Some(&json!({"page": 1, "per_page": 11})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], BAD_PAGINATION);
    }
}

#[tokio::test]
async fn incomplete_pagination_is_rejected() {
    let app = TestApp::new();
    for pagination in [
        json!({"page": 1}),
        json!({"per_page": 3}),
        json!({"page": 0, "per_page": 3}),
        json!({"page": "x", "per_page": 3}),
    ] {
        let (status, body) = app.list_prizes("1", None, Some(&pagination)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{pagination}");
        assert_eq!(body["error"], BAD_PAGINATION);
    }
}

#[tokio::test]
async fn filter_fields_are_validated() {
    let app = TestApp::new();
    let cases = [
        (json!({"id": "abc"}), "Filter ID should be a positive integer."),
        (json!({"id": "0"}), "Filter ID should be a positive integer."),
        (
            json!({"description": "d".repeat(81)}),
            "Filter description should not exceed 80 characters.",
        ),
        (
            json!({"description": "prize", "logical_operator": "XOR"}),
            "Invalid logical operator. Use 'AND' or 'OR'.",
        ),
    ];

    for (filter, message) in cases {
        let (status, body) = app.list_prizes("1", Some(&filter), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{filter}");
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn eighty_character_description_is_accepted() {
    let app = TestApp::new();
    let (status, body) = app
        .list_prizes("1", Some(&json!({"description": "d".repeat(80)})), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn malformed_json_parameters_are_rejected() {
    let app = TestApp::new();
    for query in [
        format!("filter={}", urlencoding::encode("{\"id\": ")),
        format!("pagination={}", urlencoding::encode("page=1")),
        format!("filter={}", urlencoding::encode("[\"id\"]")),
    ] {
        let (status, body) = app.get(&format!("/api/catalogs/1/prizes?{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(body["error"], "Invalid filter or pagination format.");
    }
}

#[tokio::test]
async fn single_prize_routes_require_digit_ids() {
    let app = TestApp::new();
    let message = "Both catalog ID and prize ID should be integers.";

    let (status, body) = app.get("/api/catalogs/one/prize/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);

    let (status, body) = app.delete("/api/catalogs/1/prize/-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);

    let (status, body) = app
        .put_json("/api/catalogs/1/prize/x", &json!({"title": "t"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);
}

#[tokio::test]
async fn update_requires_a_non_empty_object() {
    let app = TestApp::new();
    for body in ["", "{}", "null"] {
        let (status, response) = app
            .send_json("PUT", "/api/catalogs/1/prize/1", body.to_string())
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(response["error"], "No data provided for update.");
    }

    let (status, _) = app
        .put_json("/api/catalogs/1/prize/1", &json!({"title": 42}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Validation runs before the lookup, so nothing changed.
    let (_, prize) = app.get("/api/catalogs/1/prize/1").await;
    assert_eq!(prize["title"], "Prize 1");
}

#[tokio::test]
async fn create_prize_validates_catalog_and_body() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/catalogs/9/prize", &json!({"title": "t"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Catalog ID should be a valid integer between 1 and 5."
    );

    let (status, body) = app.post_json("/api/catalogs/1/prize", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No data provided for creating prize.");

    let (status, _) = app
        .post_json("/api/catalogs/1/prize", &json!({"title": "only a title"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listing) = app.list_prizes("1", None, None).await;
    assert_eq!(listing["total"], 10);
}

// =============================================================================
// Extraction failures and oversized integers
// =============================================================================

#[tokio::test]
async fn undecodable_path_segments_get_json_errors() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/catalogs/%FF/prizes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Catalog ID should be an integer between 1 and 5.");

    let (status, body) = app.get("/api/catalogs/1/prize/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Both catalog ID and prize ID should be integers.");

    let (status, body) = app.get("/api/catalog/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Catalog ID should be a valid integer.");

    let (status, body) = app.delete("/api/catalog/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Catalog ID should be a valid integer between 1 and 5.");
}

#[tokio::test]
async fn repeated_query_keys_use_the_first_value() {
    let app = TestApp::new();
    let first = urlencoding::encode(r#"{"id": 2}"#);
    let (status, body) = app
        .get(&format!("/api/catalogs/1/prizes?filter={first}&filter=%7B%7D"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::prize_ids(&body), vec![2]);
}

#[tokio::test]
async fn page_beyond_u64_is_an_empty_page() {
    let app = TestApp::new();
    let (status, body) = app
        .list_prizes(
            "1",
            None,
            Some(&json!({"page": "18446744073709551616", "per_page": 5})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total": 0, "prizes": []}));
}

#[tokio::test]
async fn filter_id_beyond_u64_matches_nothing() {
    let app = TestApp::new();
    let (status, body) = app
        .list_prizes("1", Some(&json!({"id": "18446744073709551616"})), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total": 0, "prizes": []}));
}

#[tokio::test]
async fn pagination_error_wins_over_malformed_filter() {
    let app = TestApp::new();
    let filter = urlencoding::encode("{\"id\": ");
    let pagination = urlencoding::encode(r#"{"page": 0, "per_page": 5}"#);
    let (status, body) = app
        .get(&format!("/api/catalogs/1/prizes?filter={filter}&pagination={pagination}"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], BAD_PAGINATION);
}

#[tokio::test]
async fn get_catalog_with_huge_integer_is_not_found() {
    let app = TestApp::new();
    let huge = "9".repeat(60);
    for raw in [huge.clone(), format!("-{huge}")] {
        let (status, body) = app.get(&format!("/api/catalog/{raw}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{raw}");
        assert_eq!(body["error"], "Catalog not found.");
    }
}
