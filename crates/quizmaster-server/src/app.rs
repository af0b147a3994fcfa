use crate::{AppConfig, routes};
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// The api routes with their shared state, without docs, metrics or cors.
pub(crate) fn create_router(app_config: AppConfig, conn: DatabaseConnection) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest("/status", routes::api::status::create_router())
                .nest("/quizzes", routes::api::quizzes::create_router()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(app_config))
                .layer(Extension(conn)),
        )
        .with_state(())
}

pub(crate) fn create_app(app_config: AppConfig, origins: &[String], conn: DatabaseConnection) -> anyhow::Result<Router> {
    // installs the global recorder, so this may only run once per process
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    if !origins.is_empty() {
        tracing::info!(?origins, "allowing origins");
    }

    let cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .merge(create_router(app_config, conn).layer(cors))
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer),
        );
    Ok(app)
}
