use anyhow::Context;
use tempe_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config);

    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        "Tempe server starting..."
    );

    // 2. Database, migrations, admin seed
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 3. Serve until Ctrl-C
    Server::with_state(config, state)
        .run()
        .await
        .context("server stopped with an error")?;

    Ok(())
}
