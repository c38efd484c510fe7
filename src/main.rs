//! Tokengate: a stateless bearer-token authentication gate.
//! Used by: binary entrypoint.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);
    let state = state::build_state(config);
    tracing::info!("starting tokengate on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
