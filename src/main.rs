use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratebook::config::Config;
use ratebook::middleware::{AdminKeyAuth, RequestId};
use ratebook::modules::distance_rates::controllers::distance_rate_controller;
use ratebook::modules::distance_rates::services::DistanceRateService;
use ratebook::modules::policies::repositories::{MySqlPolicyRepository, PolicyRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ratebook=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Ratebook policy administration service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool and apply migrations
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let policy_repo: Arc<dyn PolicyRepository> =
        Arc::new(MySqlPolicyRepository::new(db_pool.clone()));
    let rate_service = Arc::new(DistanceRateService::new(policy_repo));

    let bind_address = config.server.bind_address();
    let admin_key_hash = config.security.admin_key_hash.clone();

    // Start HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(AdminKeyAuth::new(admin_key_hash.clone()))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            // registered last so preflight requests are handled before auth;
            // the admin console is served from a separate origin
            .wrap(Cors::permissive())
            .app_data(web::Data::new(rate_service.clone()))
            .configure(distance_rate_controller::configure)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server error")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ratebook"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Ratebook Policy Administration",
        "version": "0.1.0",
        "status": "running"
    }))
}
