//! # JSON Read Endpoints
//!
//! Read-back for scripts and tests. Errors are returned as
//! `{"code": "...", "message": "..."}` with the matching status.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use tienda_core::validation::parse_id;
use tienda_core::{Brand, Category, Product};

use crate::error::ApiError;
use crate::state::AppState;

/// Product DTO for JSON consumers.
///
/// Money is rendered as decimal text (`"15.50"`) so clients never see raw
/// cents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub description: String,
    pub unit_cost: String,
    pub sale_price: String,
    pub brand_id: i64,
    pub category_id: i64,
    pub active: bool,
    pub version: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            unit_cost: p.unit_cost().to_string(),
            sale_price: p.sale_price().to_string(),
            description: p.description,
            brand_id: p.brand_id,
            category_id: p.category_id,
            active: p.active,
            version: p.version,
        }
    }
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.db().products().list().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// `GET /api/products/{id}`
///
/// The id is taken as text and parsed here so a malformed id is reported in
/// the same JSON shape as every other error.
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_id("id", &raw_id)?;
    state
        .db()
        .products()
        .get(id)
        .await?
        .map(|p| Json(ProductDto::from(p)))
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// `GET /api/brands`
pub async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<Brand>>, ApiError> {
    Ok(Json(state.db().brands().list().await?))
}

/// `GET /api/categories`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.db().categories().list().await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::test_util::{body_string, get, post_form, test_app};

    async fn json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = get(app, uri).await;
        let status = resp.status();
        let body = body_string(resp).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_product_read_back() {
        let app = test_app().await;
        post_form(&app, "/brands/register", "name=Acme").await;
        post_form(&app, "/categories/register", "name=Hardware").await;
        post_form(
            &app,
            "/products/register",
            "description=Widget&unit_cost=10&sale_price=15.5&brand_id=1&category_id=1",
        )
        .await;

        let (status, body) = json(&app, "/api/products/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "Widget");
        assert_eq!(body["unitCost"], "10.00");
        assert_eq!(body["salePrice"], "15.50");
        assert_eq!(body["active"], true);
        assert_eq!(body["version"], 0);

        let (_, list) = json(&app, "/api/products").await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (_, brands) = json(&app, "/api/brands").await;
        assert_eq!(brands[0]["name"], "Acme");

        let (_, categories) = json(&app, "/api/categories").await;
        assert_eq!(categories[0]["name"], "Hardware");
    }

    #[tokio::test]
    async fn test_missing_product_is_json_not_found() {
        let app = test_app().await;

        let (status, body) = json(&app, "/api/products/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Product not found: 404");
    }

    #[tokio::test]
    async fn test_malformed_product_id_is_json_validation_error() {
        let app = test_app().await;

        for uri in ["/api/products/abc", "/api/products/0", "/api/products/-3"] {
            let (status, body) = json(&app, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["code"], "VALIDATION_ERROR", "{uri}");
            assert!(body["message"].as_str().unwrap().starts_with("id "), "{uri}");
        }
    }
}
