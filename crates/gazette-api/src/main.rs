use gazette_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    gazette_api::setup::init_telemetry();

    // Initialize the application (store, auth, routes)
    let (_state, router) = gazette_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    gazette_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
