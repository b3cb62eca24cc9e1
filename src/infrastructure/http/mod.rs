pub mod json;

pub use json::ApiJson;

use axum::{
    extract::Request,
    middleware,
    routing::{delete, get, post},
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{
        feed::FeedController, feed_follow::FeedFollowController, health, user::UserController,
    },
    domain::{feed::FeedService, feed_follow::FeedFollowService, user::UserService},
    infrastructure::{
        auth::{auth_middleware, request_id_middleware, RequestId},
        repositories::{FeedFollowRepository, FeedRepository, UserRepository},
    },
};

/// Wire repositories, services and controllers onto a router
pub fn build_app(pool: Arc<DbPool>) -> Router {
    // 1. Repositories
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let feed_repo = Arc::new(FeedRepository::new(pool.clone()));
    let feed_follow_repo = Arc::new(FeedFollowRepository::new(pool.clone()));

    // 2. Services
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let feed_service = Arc::new(FeedService::new(feed_repo));
    let feed_follow_service = Arc::new(FeedFollowService::new(feed_follow_repo));

    // 3. Controllers
    let user_controller = Arc::new(UserController::new(user_service));
    let feed_controller = Arc::new(FeedController::new(feed_service));
    let feed_follow_controller = Arc::new(FeedFollowController::new(feed_follow_service));

    // Registration is public, reading yourself back needs a key
    let user_routes = Router::new()
        .route(
            "/v1/users",
            post(UserController::create_user).merge(get(UserController::get_me).route_layer(
                middleware::from_fn_with_state(user_repo.clone(), auth_middleware),
            )),
        )
        .with_state(user_controller);

    // Listing feeds is public, registering one needs a key
    let feed_routes = Router::new()
        .route(
            "/v1/feeds",
            get(FeedController::list_feeds).merge(post(FeedController::create_feed).route_layer(
                middleware::from_fn_with_state(user_repo.clone(), auth_middleware),
            )),
        )
        .with_state(feed_controller);

    // Feed follow routes (require authentication)
    let feed_follow_routes = Router::new()
        .route(
            "/v1/feed_follows",
            get(FeedFollowController::list_feed_follows)
                .post(FeedFollowController::create_feed_follow),
        )
        .route(
            "/v1/feed_follows/",
            get(FeedFollowController::list_feed_follows),
        )
        .route(
            "/v1/feed_follows/:feedFollowID",
            delete(FeedFollowController::delete_feed_follow),
        )
        .with_state(feed_follow_controller)
        .route_layer(middleware::from_fn_with_state(user_repo, auth_middleware));

    Router::new()
        .route("/v1/healthz", get(health::healthz))
        .route("/v1/err", get(health::err))
        .route("/v1/readyz", get(health::readyz))
        .with_state(pool)
        .merge(user_routes)
        .merge(feed_routes)
        .merge(feed_follow_routes)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(|id| id.0.as_str())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

/// Bind the listening socket for the configured host and port
pub async fn bind_listener(config: &Config) -> anyhow::Result<TcpListener> {
    let addr = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(pool: Arc<DbPool>, config: Arc<Config>) -> anyhow::Result<()> {
    let app = build_app(pool);

    let listener = bind_listener(&config).await?;

    tracing::info!("Serving on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
