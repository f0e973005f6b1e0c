use filebin_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();

    filebin_api::telemetry::init_telemetry();

    let config = Config::from_env()?;

    // Initialize the application (stores, routes)
    let (_state, router) = filebin_api::setup::initialize_app(&config).await?;

    // Start the server
    filebin_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
