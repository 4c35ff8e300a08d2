//! Repository for the `sliders` table.

use sqlx::PgPool;

use heroslide_core::types::DbId;

use crate::models::slider::{Slider, SliderInput};

const COLUMNS: &str = "id, page_id, effect, loop_enabled, speed, pagination, navigation, \
     scrollbar, lazy_loading, autoplay, autoplay_delay, created_at, updated_at";

/// CRUD operations for per-page slider configuration.
pub struct SliderRepo;

impl SliderRepo {
    /// Insert a new slider for a page. Creation defaults apply here, once;
    /// later edits never re-apply them.
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        input: &SliderInput,
    ) -> Result<Slider, sqlx::Error> {
        let query = format!(
            "INSERT INTO sliders \
                (page_id, effect, loop_enabled, speed, pagination, navigation, \
                 scrollbar, lazy_loading, autoplay, autoplay_delay) \
             VALUES ($1, COALESCE($2, 'slide'), COALESCE($3, true), COALESCE($4, 600), \
                     COALESCE($5, true), COALESCE($6, true), COALESCE($7, false), \
                     COALESCE($8, false), COALESCE($9, true), COALESCE($10, 5000)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(page_id)
            .bind(&input.effect)
            .bind(input.loop_enabled)
            .bind(input.speed)
            .bind(input.pagination)
            .bind(input.navigation)
            .bind(input.scrollbar)
            .bind(input.lazy_loading)
            .bind(input.autoplay)
            .bind(input.autoplay_delay)
            .fetch_one(pool)
            .await
    }

    /// Find the slider attached to a page.
    pub async fn find_by_page(pool: &PgPool, page_id: DbId) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sliders WHERE page_id = $1");
        sqlx::query_as::<_, Slider>(&query)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a page's slider. Only non-`None` fields are applied.
    pub async fn update_by_page(
        pool: &PgPool,
        page_id: DbId,
        input: &SliderInput,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET \
                effect = COALESCE($2, effect), \
                loop_enabled = COALESCE($3, loop_enabled), \
                speed = COALESCE($4, speed), \
                pagination = COALESCE($5, pagination), \
                navigation = COALESCE($6, navigation), \
                scrollbar = COALESCE($7, scrollbar), \
                lazy_loading = COALESCE($8, lazy_loading), \
                autoplay = COALESCE($9, autoplay), \
                autoplay_delay = COALESCE($10, autoplay_delay), \
                updated_at = now() \
             WHERE page_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(page_id)
            .bind(&input.effect)
            .bind(input.loop_enabled)
            .bind(input.speed)
            .bind(input.pagination)
            .bind(input.navigation)
            .bind(input.scrollbar)
            .bind(input.lazy_loading)
            .bind(input.autoplay)
            .bind(input.autoplay_delay)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page's slider, cascading to its slides and links. Returns
    /// whether a row was removed.
    pub async fn delete_by_page(pool: &PgPool, page_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sliders WHERE page_id = $1")
            .bind(page_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
