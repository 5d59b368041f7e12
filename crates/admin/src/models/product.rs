//! Promo product domain types.

use chrono::{DateTime, Utc};

use promozap_core::ProductId;

/// A promotional product in the catalog (domain type).
///
/// Every field except `purchase_link` may be empty or absent. IDs are
/// monotonically increasing, so `id` descending is the recency order the
/// catalog page shows.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Short promotional headline (chamada).
    pub headline: String,
    /// Longer descriptive text (descricao).
    pub description: String,
    /// Price as entered by the operator (valor). Kept verbatim as a string;
    /// there is no numeric validation or currency parsing.
    pub price: String,
    /// Whether the free-shipping banner line is included (frete_gratis).
    pub free_shipping: bool,
    /// Purchase URL (link_compra). Always non-empty; the messaging client
    /// builds its link-preview card from this trailing link.
    pub purchase_link: String,
    /// Optional coupon code (cupom).
    pub coupon: Option<String>,
    /// Optional name of an alternate purchase option. Only rendered when
    /// `variant_link` is also present.
    pub variant_name: Option<String>,
    /// Optional link of the alternate purchase option.
    pub variant_link: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new catalog product.
///
/// `purchase_link` non-empty is a precondition checked at the HTTP
/// boundary; the repository stores whatever it is given verbatim.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub headline: String,
    pub description: String,
    pub price: String,
    pub free_shipping: bool,
    pub purchase_link: String,
    pub coupon: Option<String>,
    pub variant_name: Option<String>,
    pub variant_link: Option<String>,
}
