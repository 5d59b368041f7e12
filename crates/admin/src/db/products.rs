//! Product catalog repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use promozap_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

const PRODUCT_COLUMNS: &str = "id, headline, description, price, free_shipping, \
     purchase_link, coupon, variant_name, variant_link, created_at";

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    headline: String,
    description: String,
    price: String,
    free_shipping: bool,
    purchase_link: String,
    coupon: Option<String>,
    variant_name: Option<String>,
    variant_link: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            headline: row.headline,
            description: row.description,
            price: row.price,
            free_shipping: row.free_shipping,
            purchase_link: row.purchase_link,
            coupon: row.coupon,
            variant_name: row.variant_name,
            variant_link: row.variant_link,
            created_at: row.created_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new product and return the stored record.
    ///
    /// Fields are stored verbatim; no trimming or length enforcement beyond
    /// the storage layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO product
                (headline, description, price, free_shipping, purchase_link,
                 coupon, variant_name, variant_link, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING id, headline, description, price, free_shipping,
                      purchase_link, coupon, variant_name, variant_link, created_at
            ",
        )
        .bind(input.headline)
        .bind(input.description)
        .bind(input.price)
        .bind(input.free_shipping)
        .bind(input.purchase_link)
        .bind(input.coupon)
        .bind(input.variant_name)
        .bind(input.variant_link)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(Product::from(row))
    }

    /// List every product, most recently created first.
    ///
    /// The full catalog materializes for the caller; these are small
    /// administrative datasets, so there is no pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all_by_recency(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Fetch the products whose IDs appear in `ids`, in catalog (id) order.
    ///
    /// Filtered-join semantics: IDs with no matching product are silently
    /// skipped, never an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM product WHERE id IN ("
        ));
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(id.as_i64());
        }
        query.push(") ORDER BY id");

        let rows: Vec<ProductRow> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product with that ID exists;
    /// the delete never silently succeeds.
    pub async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?1")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;

    fn sample(headline: &str) -> NewProduct {
        NewProduct {
            headline: headline.to_string(),
            description: "desc".to_string(),
            price: "10,00".to_string(),
            free_shipping: false,
            purchase_link: "http://x.test/p".to_string(),
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_list_returns_newest_first() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let first = repo.create(sample("first")).await.unwrap();
        let second = repo.create(sample("second")).await.unwrap();
        assert!(second.id > first.id);

        let listed = repo.list_all_by_recency().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].headline, "second");
        assert_eq!(listed[1].headline, "first");
    }

    #[tokio::test]
    async fn test_optional_fields_roundtrip() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo
            .create(NewProduct {
                coupon: Some("PROMO5".to_string()),
                variant_name: Some("Kit 2un".to_string()),
                variant_link: Some("http://x.test/kit".to_string()),
                free_shipping: true,
                ..sample("full")
            })
            .await
            .unwrap();

        let listed = repo.list_all_by_recency().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].coupon.as_deref(), Some("PROMO5"));
        assert_eq!(listed[0].variant_name.as_deref(), Some("Kit 2un"));
        assert!(listed[0].free_shipping);
    }

    #[tokio::test]
    async fn test_get_by_ids_skips_absent_ids() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let p1 = repo.create(sample("p1")).await.unwrap();
        let p2 = repo.create(sample("p2")).await.unwrap();
        repo.delete_by_id(p2.id).await.unwrap();
        let p3 = repo.create(sample("p3")).await.unwrap();

        let found = repo.get_by_ids(&[p1.id, p2.id, p3.id]).await.unwrap();
        let headlines: Vec<_> = found.iter().map(|p| p.headline.as_str()).collect();
        assert_eq!(headlines, ["p1", "p3"]);
    }

    #[tokio::test]
    async fn test_get_by_ids_empty_input() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);
        repo.create(sample("p1")).await.unwrap();

        assert!(repo.get_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let product = repo.create(sample("doomed")).await.unwrap();
        repo.delete_by_id(product.id).await.unwrap();
        assert!(repo.list_all_by_recency().await.unwrap().is_empty());

        let err = repo.delete_by_id(product.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
