//! End-to-end tests for the admin panel.
//!
//! Runs the full router in-process against an in-memory `SQLite`
//! database, carrying the session cookie between requests by hand.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use promozap_admin::config::AppConfig;
use promozap_admin::db::{self, UserRepository};
use promozap_admin::middleware::create_session_layer;
use promozap_admin::state::AppState;
use promozap_core::PasswordHash;

const ADMIN_PASSWORD: &str = "s3nh4-de-teste";

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3001".to_string(),
        session_secret: "0123456789abcdef0123456789abcdef".into(),
        admin_initial_password: ADMIN_PASSWORD.into(),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Build the app over a fresh in-memory database with the admin user
/// already seeded.
async fn test_app() -> Router {
    // One connection so every query sees the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();

    let hash = PasswordHash::generate(ADMIN_PASSWORD).unwrap();
    UserRepository::new(&pool)
        .ensure_default_admin(&hash)
        .await
        .unwrap();

    let config = test_config();
    let session_layer = create_session_layer(&pool, &config).await.unwrap();
    promozap_admin::app(AppState::new(config, pool), session_layer)
}

fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in as the seeded admin and return the session cookie to attach
/// to subsequent requests.
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(&[
                    ("username", "admin"),
                    ("password", ADMIN_PASSWORD),
                ])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    // Keep only the name=value part.
    set_cookie
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn create_product(app: &Router, cookie: &str, fields: &[(&str, &str)]) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(fields)))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn catalog_requires_login() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn generate_requires_login_with_json_rejection() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/gerar_mensagem")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"ids":[1]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_wrong_password_shows_error() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(&[
                    ("username", "admin"),
                    ("password", "errada"),
                ])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Dados incorretos"));
}

#[tokio::test]
async fn login_succeeds_and_catalog_renders() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("admin"));
}

#[tokio::test]
async fn logout_invalidates_session() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn create_product_then_listed_on_catalog() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let status = create_product(
        &app,
        &cookie,
        &[
            ("chamada", "Oferta X"),
            ("descricao", "Produto ótimo"),
            ("valor", "49,90"),
            ("frete_gratis", "on"),
            ("link_compra", "http://x.test/a"),
            ("cupom", "PROMO5"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Oferta X"));
    assert!(body.contains("49,90"));
    assert!(body.contains("/deletar/1"));
}

#[tokio::test]
async fn create_product_without_purchase_link_is_rejected() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let status = create_product(
        &app,
        &cookie,
        &[("chamada", "Sem link"), ("link_compra", "   ")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_composes_exact_message_and_skips_absent_ids() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let status = create_product(
        &app,
        &cookie,
        &[
            ("chamada", "Oferta X"),
            ("descricao", "Produto ótimo"),
            ("valor", "49,90"),
            ("frete_gratis", "on"),
            ("link_compra", "http://x.test/a"),
            ("cupom", "PROMO5"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/gerar_mensagem")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"ids":[1,999]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let mensagens = body["mensagens"].as_array().unwrap();
    assert_eq!(mensagens.len(), 1);
    assert_eq!(
        mensagens[0].as_str().unwrap(),
        "Oferta X\n\n📦 Frete Grátis todo o Brasil\n\n• Produto ótimo\n\n🔥 R$ 49,90\n\n🛒 http://x.test/a\n➡ Use o cupom: PROMO5"
    );
}

#[tokio::test]
async fn delete_product_then_second_delete_is_not_found() {
    let app = test_app().await;
    let cookie = login(&app).await;

    let status = create_product(&app, &cookie, &[("link_compra", "http://x.test/a")]).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let delete = |app: Router, cookie: String| async move {
        app.oneshot(
            Request::builder()
                .uri("/deletar/1")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    };

    assert_eq!(
        delete(app.clone(), cookie.clone()).await,
        StatusCode::SEE_OTHER
    );
    assert_eq!(delete(app, cookie).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
