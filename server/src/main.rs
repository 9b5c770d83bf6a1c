mod config;
mod routes;
mod services;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };
    let addr = config.bind_addr();
    let environment = config.environment.clone();
    let production = config.is_production();

    let state = state::AppState::with_placeholder_auth(config);
    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");

    tracing::info!(%addr, %environment, production, "revx listening");
    axum::serve(listener, app).await.expect("server failed");
}
