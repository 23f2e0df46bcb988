use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::models::landing_models::{Category, SlideshowImage};
use crate::AppState;

#[derive(Deserialize)]
pub struct SlideshowQuery {
    category: Option<String>,
}

pub async fn get_slideshow_images(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlideshowQuery>,
) -> Result<Json<Vec<SlideshowImage>>, (StatusCode, Json<serde_json::Value>)> {
    let Some(raw_category) = query.category else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing category query parameter"})),
        ));
    };
    let category: Category = raw_category.parse().map_err(|e: String| {
        (StatusCode::BAD_REQUEST, Json(json!({"error": e})))
    })?;

    match state.slideshow_images.find_by_category(category) {
        Ok(images) => {
            tracing::debug!("Serving {} {} slideshow images", images.len(), category);
            Ok(Json(images))
        }
        Err(e) => {
            tracing::error!("Failed to load {} slideshow images: {}", category, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to load slideshow images"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::landing_models::{Category, NewSlideshowImage};
    use crate::test_support::{read_json, test_app, test_state};
    use crate::api::resend::MockEmailDispatcher;
    use axum::{body::Body, http::{Request, StatusCode}};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_category_images_in_order() {
        let state = test_state(MockEmailDispatcher::new());
        state
            .slideshow_images
            .insert_many(&[
                NewSlideshowImage {
                    category: Category::Documentation.as_str().to_string(),
                    image_url: "https://cdn.test/b.png".to_string(),
                    alt_text: "Multi-Output Preview".to_string(),
                    order_index: 2,
                },
                NewSlideshowImage {
                    category: Category::Documentation.as_str().to_string(),
                    image_url: String::new(),
                    alt_text: "Format Transformation View".to_string(),
                    order_index: 1,
                },
            ])
            .unwrap();

        let response = test_app(state)
            .oneshot(
                Request::get("/api/slideshow-images?category=documentation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!([
                {"image_url": "", "alt_text": "Format Transformation View"},
                {"image_url": "https://cdn.test/b.png", "alt_text": "Multi-Output Preview"}
            ])
        );
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let response = test_app(test_state(MockEmailDispatcher::new()))
            .oneshot(
                Request::get("/api/slideshow-images?category=marketing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Unknown category: marketing");
    }

    #[tokio::test]
    async fn missing_category_is_a_json_error() {
        let response = test_app(test_state(MockEmailDispatcher::new()))
            .oneshot(Request::get("/api/slideshow-images").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Missing category query parameter");
    }
}
