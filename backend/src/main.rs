use staffboard_backend::{app::build_router, config::Config, state::AppState, store::DirectoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffboard_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        data_path = %config.data_path.display(),
        cors_allow_origin = config.cors_allow_origin.as_deref().unwrap_or("*"),
        "Loaded configuration from environment/.env"
    );

    let store = DirectoryStore::load(&config.data_path)?;
    tracing::info!(
        holidays = store.holiday_count(),
        employees = store.employee_count(),
        projects = store.projects().len(),
        "Directory data loaded"
    );

    let addr = config.bind_addr;
    let app = build_router(AppState::new(store, config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
