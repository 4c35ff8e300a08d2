//! HTTP-level integration tests for slider configuration and its rendered
//! outputs (options object, embed script).

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, delete, get, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: PUT creates with defaults, then updates partially
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_creates_then_updates(pool: PgPool) {
    let response = put_json(build_test_app(pool.clone()), "/api/v1/pages/1/slider", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["data"]["effect"], "slide");
    assert_eq!(created["data"]["loop"], true);
    assert_eq!(created["data"]["speed"], 600);
    assert_eq!(created["data"]["autoplay_delay"], 5000);

    let response = put_json(
        build_test_app(pool),
        "/api/v1/pages/1/slider",
        json!({"effect": "fade", "speed": 350}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["data"]["effect"], "fade");
    assert_eq!(updated["data"]["speed"], 350);
    // Untouched fields keep their stored values.
    assert_eq!(updated["data"]["autoplay_delay"], 5000);
}

// ---------------------------------------------------------------------------
// Test: out-of-set effect is rejected at the boundary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_effect_rejected(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/api/v1/pages/1/slider",
        json!({"effect": "spin"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: GET reports has_slides
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_reports_has_slides(pool: PgPool) {
    put_json(build_test_app(pool.clone()), "/api/v1/pages/1/slider", json!({})).await;

    let response = get(build_test_app(pool.clone()), "/api/v1/pages/1/slider").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["has_slides"], false);

    common::post_json(
        build_test_app(pool.clone()),
        "/api/v1/pages/1/slider/slides",
        json!({"name": "Hero", "image_path": "slides/hero.jpg"}),
    )
    .await;

    let json = body_json(get(build_test_app(pool), "/api/v1/pages/1/slider").await).await;
    assert_eq!(json["data"]["has_slides"], true);
}

// ---------------------------------------------------------------------------
// Test: options object shape and fallbacks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn options_reflect_flags_and_fallbacks(pool: PgPool) {
    put_json(
        build_test_app(pool.clone()),
        "/api/v1/pages/1/slider",
        json!({
            "scrollbar": true,
            "lazy": true,
            "navigation": false,
            "autoplay": true,
            "autoplay_delay": 0
        }),
    )
    .await;

    let response = get(build_test_app(pool), "/api/v1/pages/1/slider/options").await;
    assert_eq!(response.status(), StatusCode::OK);

    let options = body_json(response).await;
    let obj = options.as_object().unwrap();

    // Mandatory keys.
    assert_eq!(options["effect"], "slide");
    assert_eq!(options["loop"], true);
    assert_eq!(options["speed"], 600);

    // Optional groups follow their flags.
    assert!(obj.contains_key("pagination"));
    assert!(!obj.contains_key("navigation"));
    assert_eq!(options["scrollbar"]["el"], ".swiper-scrollbar");
    assert_eq!(options["scrollbar"]["hide"], false);
    assert_eq!(options["lazy"]["loadPrevNext"], true);

    // Zero delay falls back to the documented default.
    assert_eq!(options["autoplay"]["delay"], 5000);
    assert_eq!(options["autoplay"]["disableOnInteraction"], false);
    assert_eq!(options["autoplay"]["pauseOnMouseEnter"], true);
}

// ---------------------------------------------------------------------------
// Test: embed script is idempotent and timing-safe
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn embed_script_served_with_guards(pool: PgPool) {
    put_json(build_test_app(pool.clone()), "/api/v1/pages/9/slider", json!({})).await;

    let response = get(build_test_app(pool), "/api/v1/pages/9/slider/embed.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/javascript; charset=utf-8"
    );

    let script = body_text(response).await;
    assert!(script.contains("getElementById('slider-9')"));
    assert!(script.contains("el.__swiperInit"));
    assert!(script.contains("document.readyState === 'loading'"));
    assert!(script.contains(r#""effect":"slide""#));
}

// ---------------------------------------------------------------------------
// Test: delete cascades and later reads 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_reads_404(pool: PgPool) {
    put_json(build_test_app(pool.clone()), "/api/v1/pages/1/slider", json!({})).await;

    let response = delete(build_test_app(pool.clone()), "/api/v1/pages/1/slider").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for uri in [
        "/api/v1/pages/1/slider",
        "/api/v1/pages/1/slider/options",
        "/api/v1/pages/1/slider/embed.js",
    ] {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
