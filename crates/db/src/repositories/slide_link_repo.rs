//! Repository for the `slide_links` table.
//!
//! The API surface deals in the `CallToAction` tagged union; rows store the
//! cover-vs-button split in the `kind` column with a partial unique index
//! guaranteeing at most one cover per slide.

use sqlx::PgPool;

use heroslide_core::slide::{CallToAction, LinkRef};
use heroslide_core::types::DbId;

use crate::models::slide_link::{SlideLink, KIND_BUTTON, KIND_COVER};

const COLUMNS: &str = "id, slide_id, kind, label, url, sort_order, created_at";

/// Storage for slide call-to-action links.
pub struct SlideLinkRepo;

impl SlideLinkRepo {
    /// List a slide's link rows, cover first, buttons in display order.
    pub async fn list_for_slide(pool: &PgPool, slide_id: DbId) -> Result<Vec<SlideLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slide_links WHERE slide_id = $1 ORDER BY kind, sort_order, id"
        );
        sqlx::query_as::<_, SlideLink>(&query)
            .bind(slide_id)
            .fetch_all(pool)
            .await
    }

    /// Assemble a slide's call-to-action from its stored rows.
    ///
    /// A slide holding both a cover and buttons violates the exclusivity
    /// rule (possible only in legacy data, since writes go through
    /// [`SlideLinkRepo::set_call_to_action`]); the cover wins and the
    /// conflict is logged.
    pub async fn call_to_action(pool: &PgPool, slide_id: DbId) -> Result<CallToAction, sqlx::Error> {
        let rows = Self::list_for_slide(pool, slide_id).await?;

        let cover = rows.iter().find(|r| r.kind == KIND_COVER);
        let buttons: Vec<LinkRef> = rows
            .iter()
            .filter(|r| r.kind == KIND_BUTTON)
            .map(|r| LinkRef {
                label: r.label.clone(),
                url: r.url.clone(),
            })
            .collect();

        match cover {
            Some(cover) => {
                if !buttons.is_empty() {
                    tracing::warn!(
                        slide_id,
                        button_count = buttons.len(),
                        "Slide has both a cover link and buttons; serving the cover link"
                    );
                }
                Ok(CallToAction::Cover {
                    link: LinkRef {
                        label: cover.label.clone(),
                        url: cover.url.clone(),
                    },
                })
            }
            None if buttons.is_empty() => Ok(CallToAction::None),
            None => Ok(CallToAction::Buttons { buttons }),
        }
    }

    /// Replace a slide's links with the given call-to-action, atomically.
    /// The tagged union makes cover/buttons exclusivity structural.
    pub async fn set_call_to_action(
        pool: &PgPool,
        slide_id: DbId,
        cta: &CallToAction,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM slide_links WHERE slide_id = $1")
            .bind(slide_id)
            .execute(&mut *tx)
            .await?;

        match cta {
            CallToAction::None => {}
            CallToAction::Cover { link } => {
                sqlx::query(
                    "INSERT INTO slide_links (slide_id, kind, label, url) VALUES ($1, $2, $3, $4)",
                )
                .bind(slide_id)
                .bind(KIND_COVER)
                .bind(&link.label)
                .bind(&link.url)
                .execute(&mut *tx)
                .await?;
            }
            CallToAction::Buttons { buttons } => {
                for (position, button) in buttons.iter().enumerate() {
                    sqlx::query(
                        "INSERT INTO slide_links (slide_id, kind, label, url, sort_order) \
                         VALUES ($1, $2, $3, $4, $5)",
                    )
                    .bind(slide_id)
                    .bind(KIND_BUTTON)
                    .bind(&button.label)
                    .bind(&button.url)
                    .bind(position as i32)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await
    }
}
