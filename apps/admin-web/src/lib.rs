//! # Tienda Admin
//!
//! HTTP admin panel for the storefront catalog: products, brands and
//! categories.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                    Success                               │
//! │  ──────  ──────────────────────  ────────────────────────────────────  │
//! │  GET     /products               product listing (HTML)                │
//! │  POST    /products/register      303 → /products?status=saved          │
//! │  POST    /products/update        303 → /products?status=saved          │
//! │  POST    /products/delete        303 → /products?status=saved          │
//! │  GET     /brands                 brand page (HTML)                     │
//! │  POST    /brands/register        303 → /products?status=saved          │
//! │  POST    /brands/rename          303 → /brands?status=saved            │
//! │  GET     /categories             category page (HTML)                  │
//! │  POST    /categories/register    303 → /products?status=saved          │
//! │  POST    /categories/rename      303 → /categories?status=saved        │
//! │  GET     /api/products[/{id}]    JSON                                  │
//! │  GET     /api/brands             JSON                                  │
//! │  GET     /api/categories         JSON                                  │
//! │  GET     /health                 OK / 503                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, brand, category, health, product, PRODUCTS_PATH};

pub use config::{AdminConfig, ConfigError};
pub use error::{ApiError, ErrorCode, ErrorPage};
pub use state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(PRODUCTS_PATH) }))
        // Products
        .route("/products", get(product::list_page))
        .route("/products/register", post(product::register))
        .route("/products/update", post(product::update))
        .route("/products/delete", post(product::delete))
        // Brands
        .route("/brands", get(brand::list_page))
        .route("/brands/register", post(brand::register))
        .route("/brands/rename", post(brand::rename))
        // Categories
        .route("/categories", get(category::list_page))
        .route("/categories/register", post(category::register))
        .route("/categories/rename", post(category::rename))
        // JSON read-back
        .route("/api/products", get(api::list_products))
        .route("/api/products/{id}", get(api::get_product))
        .route("/api/brands", get(api::list_brands))
        .route("/api/categories", get(api::list_categories))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_util {
    use axum::{
        body::Body,
        http::{header, Request, Response},
        Router,
    };
    use tienda_db::{Database, DbConfig};
    use tower::ServiceExt;

    use crate::AppState;

    pub async fn test_state() -> AppState {
        AppState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    pub async fn test_app() -> Router {
        crate::router(test_state().await)
    }

    pub async fn get(app: &Router, uri: &str) -> Response<Body> {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    pub async fn body_string(resp: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use crate::test_util::{get, test_app};

    #[tokio::test]
    async fn test_root_redirects_to_products() {
        let app = test_app().await;

        let resp = get(&app, "/").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/products");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_app().await;

        assert_eq!(get(&app, "/nope").await.status(), StatusCode::NOT_FOUND);
    }
}
