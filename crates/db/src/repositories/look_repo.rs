//! Repository for the `looks`, `look_products` and `look_hotspots` tables.

use lookbook_core::types::ResourceId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::look::{CreateLook, Look};

/// Look columns with product ids and hotspots aggregated in.
///
/// Product ids come back in insertion order; hotspots as a JSON array of
/// `{ x, y, productId }`.
const SELECT_LOOK: &str = "SELECT l.id, l.title, l.content_type, l.media_url, \
        COALESCE( \
            (SELECT ARRAY_AGG(lp.product_id ORDER BY lp.position) \
             FROM look_products lp WHERE lp.look_id = l.id), \
            '{}'::text[] \
        ) AS product_ids, \
        COALESCE( \
            (SELECT json_agg(json_build_object('x', h.x, 'y', h.y, 'productId', h.product_id) \
                             ORDER BY h.position) \
             FROM look_hotspots h WHERE h.look_id = l.id), \
            '[]'::json \
        ) AS hotspots, \
        l.created_at, l.updated_at \
    FROM looks l";

/// Read access to looks, plus inserts for seeding.
pub struct LookRepo;

impl LookRepo {
    /// List all looks in feed order (oldest first, id as tie-break).
    pub async fn list(pool: &PgPool) -> Result<Vec<Look>, sqlx::Error> {
        let query = format!("{SELECT_LOOK} ORDER BY l.created_at, l.id");
        sqlx::query_as::<_, Look>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &ResourceId) -> Result<Option<Look>, sqlx::Error> {
        let query = format!("{SELECT_LOOK} WHERE l.id = $1");
        sqlx::query_as::<_, Look>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Insert a look under a freshly generated id.
    ///
    /// The look row, its product references and its hotspots are written in
    /// one transaction. Input is expected to have passed [`CreateLook::check`].
    pub async fn create(pool: &PgPool, input: &CreateLook) -> Result<Look, sqlx::Error> {
        Self::create_with_id(pool, &ResourceId::generate(), input).await
    }

    pub async fn create_with_id(
        pool: &PgPool,
        id: &ResourceId,
        input: &CreateLook,
    ) -> Result<Look, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let look = Self::insert_in_tx(&mut tx, id, input).await?;
        tx.commit().await?;
        Ok(look)
    }

    /// Insert a look inside a caller-owned transaction.
    pub async fn insert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: &ResourceId,
        input: &CreateLook,
    ) -> Result<Look, sqlx::Error> {
        sqlx::query(
            "INSERT INTO looks (id, title, content_type, media_url)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id.as_str())
        .bind(&input.title)
        .bind(input.content_type.as_str())
        .bind(&input.media_url)
        .execute(&mut **tx)
        .await?;

        for (position, product_id) in input.product_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO look_products (look_id, product_id, position)
                 VALUES ($1, $2, $3)",
            )
            .bind(id.as_str())
            .bind(product_id.as_str())
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }

        for (position, hotspot) in input.hotspots.iter().enumerate() {
            sqlx::query(
                "INSERT INTO look_hotspots (look_id, product_id, x, y, position)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id.as_str())
            .bind(hotspot.product_id.as_str())
            .bind(hotspot.x)
            .bind(hotspot.y)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }

        let query = format!("{SELECT_LOOK} WHERE l.id = $1");
        sqlx::query_as::<_, Look>(&query)
            .bind(id.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete every look along with its references and hotspots.
    pub async fn delete_all_in_tx(tx: &mut Transaction<'_, Postgres>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM looks").execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }
}
