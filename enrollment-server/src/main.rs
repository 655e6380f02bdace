use color_eyre::eyre::Result;
use enrollment::{
    EnrollmentService, EnrollmentSetting, HashMapUserStore, init_tracing, shutdown_signal,
};

/// Standalone registration/login server backed by the in-memory store
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let config = EnrollmentSetting::load()?;
    init_tracing(&config.log.filter)?;

    let user_store = HashMapUserStore::new();
    let service = EnrollmentService::new(user_store);

    let allowed_origins = config.server.allowed_origins();

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting enrollment service...");

    service
        .run_standalone(listener, allowed_origins, shutdown_signal())
        .await?;

    tracing::info!("Enrollment service stopped");
    Ok(())
}
