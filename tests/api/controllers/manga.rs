use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use yomikata_proxy::model::MangaSummary;

use crate::AppStateTest;

async fn json_body(response: axum::response::Response) -> Value {
    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&response_body).unwrap()
}

#[tokio::test]
async fn show_should_be_ok_when_manga_is_exist() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder()
        .uri("/manga/abc")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response_body = response.into_body().collect().await.unwrap().to_bytes();
    let manga: MangaSummary = serde_json::from_slice(&response_body).unwrap();

    assert_eq!(
        manga,
        MangaSummary {
            id: "abc".into(),
            title: "Foo".into(),
            author: "A, B".into(),
            artist: "C".into(),
            content_rating: "suggestive".into(),
            tags: vec![Some("Drama".into()), Some("Mystery".into())],
            cover_image: Some("/cover/abc/x.jpg".into()),
            publication: "seinen".into(),
            description: "A long story.".into(),
            alt_titles: vec!["Foo".into(), "フー".into(), "Fuu".into()],
        }
    );
}

#[tokio::test]
async fn show_should_request_relationships_with_client_identifier() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder()
        .uri("/manga/abc")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let requests = test_state.catalog.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/manga/abc");
    assert_eq!(requests[0].user_agent.as_deref(), Some("Yomikata/0.1.0"));
    assert_eq!(
        requests[0].query.as_deref(),
        Some("includes%5B%5D=cover_art&includes%5B%5D=author&includes%5B%5D=artist")
    );
}

#[tokio::test]
async fn show_should_use_fallbacks_for_bare_record() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder()
        .uri("/manga/bare")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        json_body(response).await,
        json!({
            "id": "bare",
            "title": "No Title",
            "author": "Unknown",
            "artist": "Unknown",
            "contentRating": "Unknown",
            "tags": [],
            "coverImage": null,
            "publication": "Unknown",
            "description": "No description available",
            "altTitles": []
        })
    );
}

#[tokio::test]
async fn show_should_be_bad_request_when_id_is_missing() {
    let test_state = AppStateTest::new().await;

    for uri in ["/manga", "/manga/", "/manga/%20"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = test_state.generate_response(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Manga ID is required" }),
            "{}",
            uri
        );
    }

    assert!(test_state.catalog.requests().is_empty());
}

#[tokio::test]
async fn show_should_be_error_when_upstream_responds_with_failure() {
    let test_state = AppStateTest::new().await;

    for uri in ["/manga/missing", "/manga/explode"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = test_state.generate_response(request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Internal Server Error" }),
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn show_should_be_error_when_relationships_are_missing() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder()
        .uri("/manga/broken")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal Server Error" })
    );
}

#[tokio::test]
async fn show_should_be_error_when_upstream_is_unreachable() {
    let router = AppStateTest::unreachable();

    let request = Request::builder()
        .uri("/manga/abc")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal Server Error" })
    );
}

#[tokio::test]
async fn show_should_keep_encoded_id_as_one_segment() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder()
        .uri("/manga/a%2F..%2Fabc")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let requests = test_state.catalog.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/manga/a%2F..%2Fabc");
}
