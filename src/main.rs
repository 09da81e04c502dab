use library_inventory::{
    adapters::{
        SystemClock,
        mock::{
            CheckableRepository as InMemoryCheckableRepository,
            LibraryRepository as InMemoryLibraryRepository,
        },
        postgres::{PostgresCheckableRepository, PostgresLibraryRepository, run_migrations},
    },
    api::{handlers::AppState, router::create_router},
    config::Config,
    ports::{CheckableRepository, LibraryRepository},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "library_inventory=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Initialize adapters
    let (library_repository, checkable_repository) = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Using PostgreSQL store");

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            run_migrations(&pool)
                .await
                .expect("Failed to run migrations");

            let library_repository: Arc<dyn LibraryRepository> =
                Arc::new(PostgresLibraryRepository::new(pool.clone()));
            let checkable_repository: Arc<dyn CheckableRepository> =
                Arc::new(PostgresCheckableRepository::new(pool));
            (library_repository, checkable_repository)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            let library_repository: Arc<dyn LibraryRepository> =
                Arc::new(InMemoryLibraryRepository::new());
            let checkable_repository: Arc<dyn CheckableRepository> =
                Arc::new(InMemoryCheckableRepository::new());
            (library_repository, checkable_repository)
        }
    };

    // Create application state
    let app_state = Arc::new(AppState::new(
        library_repository,
        checkable_repository,
        Arc::new(SystemClock),
    ));

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
