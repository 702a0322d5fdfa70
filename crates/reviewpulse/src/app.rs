use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        reviews::{create_review, list_reviews},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/livez", get(livez))
        .route("/reviews", get(list_reviews).post(create_review))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn post_review(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/reviews")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::in_memory().await);

        let response = app.oneshot(get_request("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_reviews_empty() {
        let app = create_app(AppState::in_memory().await);

        let response = app.oneshot(get_request("/reviews")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_review_classifies_positive() {
        let app = create_app(AppState::in_memory().await);

        let response = app
            .oneshot(post_review("Я люблю этот продукт"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let review = json_body(response).await;
        assert_eq!(review["id"], 1);
        assert_eq!(review["text"], "Я люблю этот продукт");
        assert_eq!(review["sentiment"], "positive");
        assert!(review["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_review_classifies_negative() {
        let app = create_app(AppState::in_memory().await);

        let response = app.oneshot(post_review("Это просто ужас")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let review = json_body(response).await;
        assert_eq!(review["sentiment"], "negative");
    }

    #[tokio::test]
    async fn test_create_review_classifies_neutral() {
        let app = create_app(AppState::in_memory().await);

        let response = app.oneshot(post_review("Все в порядке")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let review = json_body(response).await;
        assert_eq!(review["sentiment"], "neutral");
    }

    #[tokio::test]
    async fn test_create_then_list_round_trips() {
        let app = create_app(AppState::in_memory().await);

        let response = app
            .clone()
            .oneshot(post_review("поставил лайк"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = json_body(response).await;

        let response = app.oneshot(get_request("/reviews")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = json_body(response).await;

        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn test_list_reviews_filters_by_sentiment() {
        let app = create_app(AppState::in_memory().await);

        app.clone().oneshot(post_review("супер")).await.unwrap();
        app.clone()
            .oneshot(post_review("Это просто ужас"))
            .await
            .unwrap();
        app.clone().oneshot(post_review("отлично")).await.unwrap();

        let response = app
            .oneshot(get_request("/reviews?sentiment=positive"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let listed = json_body(response).await;
        let reviews = listed.as_array().unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r["sentiment"] == "positive"));
    }

    #[tokio::test]
    async fn test_invalid_sentiment_filter_is_rejected() {
        let app = create_app(AppState::in_memory().await);

        let response = app
            .clone()
            .oneshot(get_request("/reviews?sentiment=happy"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let message = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(message, "Invalid sentiment filter");

        // Labels are matched exactly - no case folding
        let response = app
            .oneshot(get_request("/reviews?sentiment=Positive"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_sentiment_filter_is_ignored() {
        let app = create_app(AppState::in_memory().await);

        app.clone().oneshot(post_review("супер")).await.unwrap();
        app.clone()
            .oneshot(post_review("Это просто ужас"))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/reviews?sentiment="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reviews_come_back_in_insertion_order() {
        let app = create_app(AppState::in_memory().await);

        app.clone()
            .oneshot(post_review("первый отзыв"))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_review("второй отзыв"))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/reviews")).await.unwrap();

        let listed = json_body(response).await;
        let reviews = listed.as_array().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0]["id"], 1);
        assert_eq!(reviews[0]["text"], "первый отзыв");
        assert_eq!(reviews[1]["id"], 2);
        assert_eq!(reviews[1]["text"], "второй отзыв");
    }
}
