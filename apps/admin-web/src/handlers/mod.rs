//! # HTTP Handlers
//!
//! ## Write Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form POST                                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Parse fields (tienda-core::validation) ── invalid ──► 400 error page  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository write (tienda-db) ──────────── DbError ──► 4xx/5xx page    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  info! status line, 303 → listing?status=saved                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`product`] - product listing, register, update, soft delete
//! - [`brand`] - brand page, register, rename
//! - [`category`] - category page, register, rename
//! - [`api`] - JSON read-back
//! - [`health`] - liveness check

pub mod api;
pub mod brand;
pub mod category;
pub mod health;
pub mod product;

use axum::response::Redirect;
use serde::Deserialize;

use crate::views::STATUS_SAVED;

pub const PRODUCTS_PATH: &str = "/products";
pub const BRANDS_PATH: &str = "/brands";
pub const CATEGORIES_PATH: &str = "/categories";

/// Query string accepted by the listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub status: Option<String>,
}

/// 303 See Other to a listing page, carrying the saved marker.
pub(crate) fn saved_redirect(listing: &str) -> Redirect {
    Redirect::to(&format!("{}?status={}", listing, STATUS_SAVED))
}

/// Form body carrying only a name (brand/category register).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameForm {
    pub name: String,
}

/// Form body for brand/category rename.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenameForm {
    pub id: String,
    pub name: String,
}
