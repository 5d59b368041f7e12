//! Product catalog route handlers.
//!
//! Listing, creation, and deletion of promo products. All routes require
//! an authenticated session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::get,
};
use serde::Deserialize;

use promozap_core::ProductId;

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Product creation form data.
///
/// Field names stay byte-compatible with the legacy panel's Portuguese
/// form; the domain model uses English names.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default, rename = "chamada")]
    pub headline: String,
    #[serde(default, rename = "descricao")]
    pub description: String,
    #[serde(default, rename = "valor")]
    pub price: String,
    /// HTML checkbox: present (any value) means checked.
    #[serde(default, rename = "frete_gratis")]
    pub free_shipping: Option<String>,
    #[serde(default, rename = "link_compra")]
    pub purchase_link: String,
    #[serde(default, rename = "cupom")]
    pub coupon: Option<String>,
    #[serde(default, rename = "variante_nome")]
    pub variant_name: Option<String>,
    #[serde(default, rename = "variante_link")]
    pub variant_link: Option<String>,
}

impl ProductForm {
    /// Convert the form into catalog input, normalizing empty optional
    /// fields to `None`.
    fn into_new_product(self) -> NewProduct {
        NewProduct {
            headline: self.headline,
            description: self.description,
            price: self.price,
            free_shipping: self.free_shipping.is_some(),
            purchase_link: self.purchase_link,
            coupon: normalize(self.coupon),
            variant_name: normalize(self.variant_name),
            variant_link: normalize(self.variant_link),
        }
    }
}

/// Empty form inputs arrive as `Some("")`; store them as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct IndexTemplate {
    pub username: String,
    pub products: Vec<Product>,
}

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/deletar/{id}", get(delete))
}

/// Render the catalog page, newest products first.
///
/// GET /
async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<IndexTemplate, AppError> {
    let products = ProductRepository::new(state.pool())
        .list_all_by_recency()
        .await?;

    Ok(IndexTemplate {
        username: user.username,
        products,
    })
}

/// Create a product from the submitted form and return to the catalog.
///
/// POST /
///
/// `link_compra` is the only required field; the legacy panel relied on
/// the storage layer to reject its absence, here the boundary rejects it
/// with a client error instead.
async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AppError> {
    if form.purchase_link.trim().is_empty() {
        return Err(AppError::BadRequest("link_compra é obrigatório".to_string()));
    }

    let product = ProductRepository::new(state.pool())
        .create(form.into_new_product())
        .await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok(Redirect::to("/"))
}

/// Delete a product by ID and return to the catalog.
///
/// GET /deletar/{id}
async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    ProductRepository::new(state.pool())
        .delete_by_id(ProductId::new(id))
        .await?;
    tracing::info!(product_id = id, "product deleted");

    Ok(Redirect::to("/"))
}
