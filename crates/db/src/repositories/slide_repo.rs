//! Repository for the `slides` table.
//!
//! Write-time normalization lives here so no write path can skip it: the
//! overlay opacity is clamped to [0, 100] and an inverted date window has
//! its end silently forced to the start on every insert and update.

use chrono::NaiveDate;
use sqlx::PgPool;

use heroslide_core::schedule;
use heroslide_core::slide::clamp_overlay_opacity;
use heroslide_core::types::DbId;

use crate::models::slide::{Slide, SlideInput};

const COLUMNS: &str = "id, slider_id, name, content, theme, alignment, overlay_opacity, \
     start_date, end_date, sort_order, media_type, image_path, mobile_image_path, \
     video_mp4_path, video_webm_path, video_poster_path, clip_start_secs, clip_end_secs, \
     created_at, updated_at";

/// CRUD and schedule-filtered queries for slides.
pub struct SlideRepo;

impl SlideRepo {
    /// Insert a new slide under a slider, returning the created row.
    pub async fn create(
        pool: &PgPool,
        slider_id: DbId,
        input: &SlideInput,
    ) -> Result<Slide, sqlx::Error> {
        let end_date = schedule::clamp_end_date(input.start_date, input.end_date);
        let overlay = clamp_overlay_opacity(input.overlay_opacity.unwrap_or(0));

        let query = format!(
            "INSERT INTO slides \
                (slider_id, name, content, theme, alignment, overlay_opacity, \
                 start_date, end_date, sort_order, media_type, image_path, \
                 mobile_image_path, video_mp4_path, video_webm_path, \
                 video_poster_path, clip_start_secs, clip_end_secs) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'dark'), \
                     COALESCE($5, 'left'), $6, $7, $8, COALESCE($9, 0), \
                     COALESCE($10, 'image'), $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(slider_id)
            .bind(&input.name)
            .bind(&input.content)
            .bind(&input.theme)
            .bind(&input.alignment)
            .bind(overlay)
            .bind(input.start_date)
            .bind(end_date)
            .bind(input.sort_order)
            .bind(&input.media_type)
            .bind(&input.image_path)
            .bind(&input.mobile_image_path)
            .bind(&input.video_mp4_path)
            .bind(&input.video_webm_path)
            .bind(&input.video_poster_path)
            .bind(input.clip_start_secs)
            .bind(input.clip_end_secs)
            .fetch_one(pool)
            .await
    }

    /// Find a slide by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slides WHERE id = $1");
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a slider's slides in display order, regardless of schedule.
    pub async fn list_for_slider(pool: &PgPool, slider_id: DbId) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides WHERE slider_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(slider_id)
            .fetch_all(pool)
            .await
    }

    /// List the slides active on `today`, in display order. The predicate
    /// is the bulk form of `heroslide_core::schedule::is_active` and must
    /// agree with it on every row.
    pub async fn list_active_for_slider(
        pool: &PgPool,
        slider_id: DbId,
        today: NaiveDate,
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides \
             WHERE slider_id = $1 AND {} \
             ORDER BY sort_order, id",
            schedule::active_filter_sql("$2")
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(slider_id)
            .bind(today)
            .fetch_all(pool)
            .await
    }

    /// Whether a slider has at least one slide, independent of schedule.
    pub async fn exists_for_slider(pool: &PgPool, slider_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM slides WHERE slider_id = $1)",
        )
        .bind(slider_id)
        .fetch_one(pool)
        .await
    }

    /// Replace a slide's editable fields. The editing form submits the
    /// whole record, so this is a full replace, not a patch.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SlideInput,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let end_date = schedule::clamp_end_date(input.start_date, input.end_date);
        let overlay = clamp_overlay_opacity(input.overlay_opacity.unwrap_or(0));

        let query = format!(
            "UPDATE slides SET \
                name = $2, \
                content = COALESCE($3, ''), \
                theme = COALESCE($4, 'dark'), \
                alignment = COALESCE($5, 'left'), \
                overlay_opacity = $6, \
                start_date = $7, \
                end_date = $8, \
                sort_order = COALESCE($9, 0), \
                media_type = COALESCE($10, 'image'), \
                image_path = $11, \
                mobile_image_path = $12, \
                video_mp4_path = $13, \
                video_webm_path = $14, \
                video_poster_path = $15, \
                clip_start_secs = $16, \
                clip_end_secs = $17, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.content)
            .bind(&input.theme)
            .bind(&input.alignment)
            .bind(overlay)
            .bind(input.start_date)
            .bind(end_date)
            .bind(input.sort_order)
            .bind(&input.media_type)
            .bind(&input.image_path)
            .bind(&input.mobile_image_path)
            .bind(&input.video_mp4_path)
            .bind(&input.video_webm_path)
            .bind(&input.video_poster_path)
            .bind(input.clip_start_secs)
            .bind(input.clip_end_secs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
