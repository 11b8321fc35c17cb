//! Category page and writes.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use tracing::info;

use tienda_core::validation::{parse_id, validate_name};

use super::{saved_redirect, ListingQuery, NameForm, RenameForm, CATEGORIES_PATH, PRODUCTS_PATH};
use crate::error::ErrorPage;
use crate::state::AppState;
use crate::views;

/// `GET /categories`
pub async fn list_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, ErrorPage> {
    let categories = state.db().categories().list().await?;
    Ok(Html(views::categories_page(&categories, query.status.as_deref())))
}

/// `POST /categories/register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ErrorPage> {
    validate_name(&form.name)?;
    let outcome = state.db().categories().register(&form.name).await?;

    info!(id = outcome.id, "Category registered, saved");
    Ok(saved_redirect(PRODUCTS_PATH))
}

/// `POST /categories/rename`
pub async fn rename(
    State(state): State<AppState>,
    Form(form): Form<RenameForm>,
) -> Result<Redirect, ErrorPage> {
    let id = parse_id("id", &form.id)?;
    validate_name(&form.name)?;
    let outcome = state.db().categories().rename(id, &form.name).await?;

    info!(id, rows = outcome.rows_affected, "Category renamed, saved");
    Ok(saved_redirect(CATEGORIES_PATH))
}
