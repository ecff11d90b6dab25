//! Repository for the `products` table.

use lookbook_core::types::ResourceId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::product::{CreateProduct, Product};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, description, image_url, created_at, updated_at";

/// Read access to products, plus inserts for seeding.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product under a freshly generated id.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        Self::create_with_id(pool, &ResourceId::generate(), input).await
    }

    /// Insert a product under a caller-chosen id.
    pub async fn create_with_id(
        pool: &PgPool,
        id: &ResourceId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let product = Self::insert_in_tx(&mut tx, id, input).await?;
        tx.commit().await?;
        Ok(product)
    }

    /// Insert a product inside a caller-owned transaction.
    pub async fn insert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: &ResourceId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (id, name, price, description, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &ResourceId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY name, id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Delete every product. Looks referencing them must be gone first.
    pub async fn delete_all_in_tx(tx: &mut Transaction<'_, Postgres>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products").execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }
}
