mod config;
mod routes;

use std::process::ExitCode;

use config::FolioConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the environment may be set by the host.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "folio failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = FolioConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
