use actix_web::{web, HttpServer};
use anyhow::Context;
use portfolio_api::{
    constants::START_TIME,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::build_app,
    settings::AppConfig,
    shared_repos::SharedRepositories,
    telemetry::init_tracing,
    use_cases::seed::{SeedHandler, SeedOutcome},
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    once_cell::sync::Lazy::force(&START_TIME);

    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database schema")?;

    let repos = SharedRepositories::new(pool);

    // Seeding finishes before the listener binds, so no request can observe
    // a half-empty store mid-seed.
    if config.seed_on_startup {
        let seeder = SeedHandler::new(repos.portfolio_repo.clone());
        match seeder.seed_if_empty().await {
            Ok(SeedOutcome::Seeded(summary)) => tracing::info!(?summary, "Fixture data inserted"),
            Ok(SeedOutcome::AlreadySeeded) => {}
            Err(e) => tracing::error!("Seeding incomplete, serving partial fixtures: {}", e),
        }
    } else {
        tracing::info!("Seeding disabled by configuration");
    }

    let app_state = web::Data::new(AppState::new(&repos));
    let cors_origins = config.cors_origins();
    let server_addr = config.server_addr();

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        build_app(app_state.clone(), portfolio_api::web::cors(&cors_origins))
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res.context("HTTP server error")?,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            tracing::info!("Server stopped");
        }
    }

    Ok(())
}
