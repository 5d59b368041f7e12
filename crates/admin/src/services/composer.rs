//! Promo message composer.
//!
//! Pure transformation from catalog products to the text blocks operators
//! paste into messaging apps. No I/O and no error path: composing never
//! fails, it only formats.
//!
//! The layout is byte-exact and its ordering is deliberate: the purchase
//! link comes LAST so the messaging client (WhatsApp and friends) reads it,
//! builds the link-preview card, and anchors that card at the top of the
//! rendered bubble. Reordering the lines breaks that presentation.

use crate::models::Product;

/// Banner line included when the product ships for free.
pub const FREE_SHIPPING_BANNER: &str = "📦 Frete Grátis todo o Brasil";

/// Compose the promo text block for a single product.
///
/// Layout, in order:
/// 1. headline, blank line
/// 2. free-shipping banner (only when `free_shipping`)
/// 3. bulleted description, blank line
/// 4. price line, blank line
/// 5. purchase link (kept last - see module docs)
/// 6. coupon line (only when a coupon is set)
/// 7. variant line (only when BOTH variant name and link are set)
#[must_use]
pub fn compose_message(product: &Product) -> String {
    let shipping_line = if product.free_shipping {
        format!("{FREE_SHIPPING_BANNER}\n\n")
    } else {
        String::new()
    };

    let coupon_line = match non_empty(product.coupon.as_deref()) {
        Some(coupon) => format!("\n➡ Use o cupom: {coupon}"),
        None => String::new(),
    };

    // Partial presence of only one variant field suppresses the whole line.
    let variant_line = match (
        non_empty(product.variant_name.as_deref()),
        non_empty(product.variant_link.as_deref()),
    ) {
        (Some(name), Some(link)) => format!("\n\n{name}: {link}"),
        _ => String::new(),
    };

    format!(
        "{headline}\n\n{shipping_line}• {description}\n\n🔥 R$ {price}\n\n🛒 {link}{coupon_line}{variant_line}",
        headline = product.headline,
        description = product.description,
        price = product.price,
        link = product.purchase_link,
    )
}

/// Compose one message per product, preserving input order.
#[must_use]
pub fn compose_messages(products: &[Product]) -> Vec<String> {
    products.iter().map(compose_message).collect()
}

/// Treat `None` and empty strings alike: both mean "field absent".
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
