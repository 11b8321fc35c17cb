//! # Product Handlers
//!
//! Listing page plus the three product writes. Form fields arrive as text
//! and are parsed in [`tienda_core::validation`] before any statement runs.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use tienda_core::validation::{parse_id, parse_product_draft, parse_version};
use tienda_core::{ProductDraft, ValidationError};

use super::{saved_redirect, ListingQuery, PRODUCTS_PATH};
use crate::error::ErrorPage;
use crate::state::AppState;
use crate::views;

/// Register form. Missing fields deserialize as empty strings so they are
/// reported as validation errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub description: String,
    pub unit_cost: String,
    pub sale_price: String,
    pub brand_id: String,
    pub category_id: String,
}

impl ProductForm {
    fn to_draft(&self) -> Result<ProductDraft, ValidationError> {
        parse_product_draft(
            &self.description,
            &self.unit_cost,
            &self.sale_price,
            &self.brand_id,
            &self.category_id,
        )
    }
}

/// Update form: the register fields plus the target id and an optional
/// version for conflict detection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductForm {
    pub id: String,
    pub version: Option<String>,
    pub description: String,
    pub unit_cost: String,
    pub sale_price: String,
    pub brand_id: String,
    pub category_id: String,
}

impl UpdateProductForm {
    fn to_draft(&self) -> Result<ProductDraft, ValidationError> {
        parse_product_draft(
            &self.description,
            &self.unit_cost,
            &self.sale_price,
            &self.brand_id,
            &self.category_id,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteProductForm {
    pub id: String,
}

/// `GET /products`
pub async fn list_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, ErrorPage> {
    let products = state.db().products().list().await?;
    let brands = state.db().brands().list().await?;
    let categories = state.db().categories().list().await?;

    debug!(count = products.len(), "Rendering product listing");
    Ok(Html(views::products_page(
        &products,
        &brands,
        &categories,
        query.status.as_deref(),
    )))
}

/// `POST /products/register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, ErrorPage> {
    let draft = form.to_draft()?;
    let outcome = state.db().products().register(&draft).await?;

    info!(id = outcome.id, rows = outcome.rows_affected, "Product registered, saved");
    Ok(saved_redirect(PRODUCTS_PATH))
}

/// `POST /products/update`
///
/// With a `version` field the write only applies if the row is still at
/// that version; without one it is last-writer-wins.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateProductForm>,
) -> Result<Redirect, ErrorPage> {
    let id = parse_id("id", &form.id)?;
    let version = parse_version(form.version.as_deref())?;
    let draft = form.to_draft()?;

    let products = state.db().products();
    let outcome = match version {
        Some(expected) => products.update_checked(id, &draft, expected).await?,
        None => products.update(id, &draft).await?,
    };

    info!(id, rows = outcome.rows_affected, checked = version.is_some(), "Product updated, saved");
    Ok(saved_redirect(PRODUCTS_PATH))
}

/// `POST /products/delete`. Soft delete: the row stays, marked inactive.
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<DeleteProductForm>,
) -> Result<Redirect, ErrorPage> {
    let id = parse_id("id", &form.id)?;
    let outcome = state.db().products().soft_delete(id).await?;

    info!(id, rows = outcome.rows_affected, "Product deactivated, saved");
    Ok(saved_redirect(PRODUCTS_PATH))
}
