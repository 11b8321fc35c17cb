//! Brand page and writes.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use tracing::info;

use tienda_core::validation::{parse_id, validate_name};

use super::{saved_redirect, ListingQuery, NameForm, RenameForm, BRANDS_PATH, PRODUCTS_PATH};
use crate::error::ErrorPage;
use crate::state::AppState;
use crate::views;

/// `GET /brands`
pub async fn list_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, ErrorPage> {
    let brands = state.db().brands().list().await?;
    Ok(Html(views::brands_page(&brands, query.status.as_deref())))
}

/// `POST /brands/register`. Lands on the product listing, where the new
/// brand shows up in the product forms.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ErrorPage> {
    validate_name(&form.name)?;
    let outcome = state.db().brands().register(&form.name).await?;

    info!(id = outcome.id, "Brand registered, saved");
    Ok(saved_redirect(PRODUCTS_PATH))
}

/// `POST /brands/rename`
pub async fn rename(
    State(state): State<AppState>,
    Form(form): Form<RenameForm>,
) -> Result<Redirect, ErrorPage> {
    let id = parse_id("id", &form.id)?;
    validate_name(&form.name)?;
    let outcome = state.db().brands().rename(id, &form.name).await?;

    info!(id, rows = outcome.rows_affected, "Brand renamed, saved");
    Ok(saved_redirect(BRANDS_PATH))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use crate::test_util::{body_string, get, post_form, test_app};

    #[tokio::test]
    async fn test_register_redirects_to_products() {
        let app = test_app().await;

        let resp = post_form(&app, "/brands/register", "name=Acme").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/products?status=saved");
    }

    #[tokio::test]
    async fn test_quoted_name_is_stored_verbatim() {
        let app = test_app().await;

        // O'Brien'; DROP TABLE marcaProd; --
        let resp = post_form(
            &app,
            "/brands/register",
            "name=O%27Brien%27%3B+DROP+TABLE+marcaProd%3B+--",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let page = body_string(get(&app, "/brands").await).await;
        assert!(page.contains("<td>O&#39;Brien&#39;; DROP TABLE marcaProd; --</td>"));
    }

    #[tokio::test]
    async fn test_blank_name_is_bad_request() {
        let app = test_app().await;

        let resp = post_form(&app, "/brands/register", "name=+++").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rename_redirects_to_brands() {
        let app = test_app().await;
        post_form(&app, "/brands/register", "name=Acme").await;

        let resp = post_form(&app, "/brands/rename", "id=1&name=Acme+Corp").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/brands?status=saved");

        let page = body_string(get(&app, "/brands?status=saved").await).await;
        assert!(page.contains("<td>Acme Corp</td>"));
        assert!(page.contains("Saved."));
    }

    #[tokio::test]
    async fn test_rename_unknown_id_is_not_found() {
        let app = test_app().await;

        let resp = post_form(&app, "/brands/rename", "id=5&name=Ghost").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_string(resp).await.contains("Brand not found: 5"));
    }
}
