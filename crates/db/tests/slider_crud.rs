//! Integration tests for slider configuration CRUD.
//!
//! Exercises the repository layer against a real database: creation
//! defaults, partial updates, the one-slider-per-page constraint, and
//! cascade deletion of owned slides.

use sqlx::PgPool;

use heroslide_db::models::slide::SlideInput;
use heroslide_db::models::slider::SliderInput;
use heroslide_db::repositories::{SlideRepo, SliderRepo};

fn image_slide(name: &str) -> SlideInput {
    SlideInput {
        name: name.to_string(),
        image_path: Some("slides/hero.jpg".to_string()),
        ..SlideInput::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_applies_creation_defaults(pool: PgPool) {
    let slider = SliderRepo::create(&pool, 1, &SliderInput::default())
        .await
        .unwrap();

    assert_eq!(slider.page_id, 1);
    assert_eq!(slider.effect, "slide");
    assert!(slider.loop_enabled);
    assert_eq!(slider.speed, 600);
    assert!(slider.pagination);
    assert!(slider.navigation);
    assert!(!slider.scrollbar);
    assert!(!slider.lazy_loading);
    assert!(slider.autoplay);
    assert_eq!(slider.autoplay_delay, 5000);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_keeps_explicit_overrides(pool: PgPool) {
    let input = SliderInput {
        effect: Some("fade".to_string()),
        speed: Some(350),
        autoplay: Some(false),
        ..SliderInput::default()
    };
    let slider = SliderRepo::create(&pool, 7, &input).await.unwrap();

    assert_eq!(slider.effect, "fade");
    assert_eq!(slider.speed, 350);
    assert!(!slider.autoplay);
    // Untouched fields still get creation defaults.
    assert!(slider.pagination);
}

#[sqlx::test(migrations = "./migrations")]
async fn one_slider_per_page(pool: PgPool) {
    SliderRepo::create(&pool, 1, &SliderInput::default())
        .await
        .unwrap();
    let duplicate = SliderRepo::create(&pool, 1, &SliderInput::default()).await;

    match duplicate {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.constraint(), Some("uq_sliders_page_id"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    SliderRepo::create(&pool, 1, &SliderInput::default())
        .await
        .unwrap();

    let updated = SliderRepo::update_by_page(
        &pool,
        1,
        &SliderInput {
            scrollbar: Some(true),
            autoplay_delay: Some(3000),
            ..SliderInput::default()
        },
    )
    .await
    .unwrap()
    .expect("slider should exist");

    assert!(updated.scrollbar);
    assert_eq!(updated.autoplay_delay, 3000);
    // Fields not named in the update keep their stored values; creation
    // defaults are not re-applied.
    assert_eq!(updated.effect, "slide");
    assert_eq!(updated.speed, 600);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_slider_returns_none(pool: PgPool) {
    let updated = SliderRepo::update_by_page(&pool, 99, &SliderInput::default())
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_cascades_to_slides(pool: PgPool) {
    let slider = SliderRepo::create(&pool, 1, &SliderInput::default())
        .await
        .unwrap();
    let slide = SlideRepo::create(&pool, slider.id, &image_slide("Hero"))
        .await
        .unwrap();

    assert!(SliderRepo::delete_by_page(&pool, 1).await.unwrap());
    assert!(SliderRepo::find_by_page(&pool, 1).await.unwrap().is_none());
    assert!(SlideRepo::find_by_id(&pool, slide.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_missing_slider_reports_false(pool: PgPool) {
    assert!(!SliderRepo::delete_by_page(&pool, 42).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn has_slides_independent_of_schedule(pool: PgPool) {
    let slider = SliderRepo::create(&pool, 1, &SliderInput::default())
        .await
        .unwrap();
    assert!(!SlideRepo::exists_for_slider(&pool, slider.id).await.unwrap());

    // A slide far in the past still counts: existence ignores the schedule.
    let expired = SlideInput {
        start_date: Some("2001-01-01".parse().unwrap()),
        end_date: Some("2001-12-31".parse().unwrap()),
        ..image_slide("Old campaign")
    };
    SlideRepo::create(&pool, slider.id, &expired).await.unwrap();
    assert!(SlideRepo::exists_for_slider(&pool, slider.id).await.unwrap());
}
