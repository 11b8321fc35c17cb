//! # HTML Views
//!
//! Server-rendered pages for the admin panel. Every user-supplied value goes
//! through [`escape_html`] before it reaches the markup.

use std::fmt::Write;

use tienda_core::{Brand, Category, Product, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

use crate::error::ApiError;

/// Query marker appended to listing redirects after a successful write.
pub const STATUS_SAVED: &str = "saved";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title} | Tienda Admin</title>
</head>
<body>
<nav><a href="/products">Products</a> | <a href="/brands">Brands</a> | <a href="/categories">Categories</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

fn status_banner(status: Option<&str>) -> &'static str {
    match status {
        Some(STATUS_SAVED) => "<p class=\"status\" role=\"status\">Saved.</p>\n",
        _ => "",
    }
}

fn options<'a>(items: impl Iterator<Item = (i64, &'a str)>) -> String {
    let mut out = String::new();
    for (id, name) in items {
        let _ = writeln!(out, "<option value=\"{}\">{}</option>", id, escape_html(name));
    }
    out
}

fn name_of<'a>(id: i64, items: impl Iterator<Item = (i64, &'a str)>) -> String {
    items
        .into_iter()
        .find(|(item_id, _)| *item_id == id)
        .map(|(_, name)| escape_html(name))
        .unwrap_or_else(|| format!("#{}", id))
}

/// Product listing with the register, update and delete forms.
pub fn products_page(
    products: &[Product],
    brands: &[Brand],
    categories: &[Category],
    status: Option<&str>,
) -> String {
    let brand_pairs = || brands.iter().map(|b| (b.id, b.name.as_str()));
    let category_pairs = || categories.iter().map(|c| (c.id, c.name.as_str()));

    let mut body = String::from(status_banner(status));

    body.push_str(
        "<table>\n<thead><tr><th>Id</th><th>Description</th><th>Unit cost</th>\
         <th>Sale price</th><th>Brand</th><th>Category</th><th>State</th><th>Version</th></tr></thead>\n<tbody>\n",
    );
    for p in products {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            p.id,
            escape_html(&p.description),
            p.unit_cost(),
            p.sale_price(),
            name_of(p.brand_id, brand_pairs()),
            name_of(p.category_id, category_pairs()),
            if p.active { "active" } else { "inactive" },
            p.version,
        );
    }
    body.push_str("</tbody>\n</table>\n");

    let product_fields = format!(
        r#"<label>Description <input name="description" maxlength="{max}" required></label>
<label>Unit cost <input name="unit_cost" inputmode="decimal" required></label>
<label>Sale price <input name="sale_price" inputmode="decimal" required></label>
<label>Brand <select name="brand_id">
{brands}</select></label>
<label>Category <select name="category_id">
{categories}</select></label>
"#,
        max = MAX_DESCRIPTION_LEN,
        brands = options(brand_pairs()),
        categories = options(category_pairs()),
    );

    let _ = write!(
        body,
        r#"<h2>Register product</h2>
<form method="post" action="/products/register">
{fields}<button type="submit">Register</button>
</form>
<h2>Update product</h2>
<form method="post" action="/products/update">
<label>Id <input name="id" inputmode="numeric" required></label>
<label>Version <input name="version" inputmode="numeric"></label>
{fields}<button type="submit">Update</button>
</form>
<h2>Delete product</h2>
<form method="post" action="/products/delete">
<label>Id <input name="id" inputmode="numeric" required></label>
<button type="submit">Delete</button>
</form>
<h2>Register brand</h2>
<form method="post" action="/brands/register">
<label>Name <input name="name" maxlength="{name_max}" required></label>
<button type="submit">Register</button>
</form>
<h2>Register category</h2>
<form method="post" action="/categories/register">
<label>Name <input name="name" maxlength="{name_max}" required></label>
<button type="submit">Register</button>
</form>
"#,
        fields = product_fields,
        name_max = MAX_NAME_LEN,
    );

    layout("Products", &body)
}

/// Id/name listing plus register and rename forms. Shared by brands and
/// categories, which have the same shape.
fn named_page<'a>(
    title: &str,
    path: &str,
    items: impl Iterator<Item = (i64, &'a str)>,
    status: Option<&str>,
) -> String {
    let mut body = String::from(status_banner(status));

    body.push_str("<table>\n<thead><tr><th>Id</th><th>Name</th></tr></thead>\n<tbody>\n");
    for (id, name) in items {
        let _ = writeln!(body, "<tr><td>{}</td><td>{}</td></tr>", id, escape_html(name));
    }
    body.push_str("</tbody>\n</table>\n");

    let _ = write!(
        body,
        r#"<h2>Register</h2>
<form method="post" action="{path}/register">
<label>Name <input name="name" maxlength="{max}" required></label>
<button type="submit">Register</button>
</form>
<h2>Rename</h2>
<form method="post" action="{path}/rename">
<label>Id <input name="id" inputmode="numeric" required></label>
<label>New name <input name="name" maxlength="{max}" required></label>
<button type="submit">Rename</button>
</form>
"#,
        path = path,
        max = MAX_NAME_LEN,
    );

    layout(title, &body)
}

pub fn brands_page(brands: &[Brand], status: Option<&str>) -> String {
    named_page(
        "Brands",
        "/brands",
        brands.iter().map(|b| (b.id, b.name.as_str())),
        status,
    )
}

pub fn categories_page(categories: &[Category], status: Option<&str>) -> String {
    named_page(
        "Categories",
        "/categories",
        categories.iter().map(|c| (c.id, c.name.as_str())),
        status,
    )
}

/// Page shown when a write was not saved.
pub fn error_page(err: &ApiError) -> String {
    let body = format!(
        "<p class=\"error\" role=\"alert\">{}</p>\n<p><a href=\"javascript:history.back()\">Back</a> | <a href=\"/products\">Products</a></p>\n",
        escape_html(&err.message),
    );
    layout(&format!("Error {}", err.status().as_u16()), &body)
}
