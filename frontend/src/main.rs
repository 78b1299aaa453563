//! Main entry point for the MediDesk client.
//!
//! This file initializes logging, loads the configuration, builds the HTTP
//! gateway and the token store, and drives the screen navigation loop until
//! the user quits.

use gateway::HttpRegistry;
use tracing_subscriber::EnvFilter;

use frontend::config::Config;
use frontend::screens::{self, Route};
use frontend::session::TokenStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::debug!(api_url = %config.api_url, "starting");

    let api = HttpRegistry::new(&config.api_url);
    let store = TokenStore::new(config.token_path);

    let mut route = Route::Home;
    loop {
        route = match route {
            Route::Home => screens::home::run()?,
            Route::Login => screens::login::run(&api, &store).await?,
            Route::Patients => screens::patients::run(&api, &store).await?,
            Route::Todo => screens::todo::run()?,
            Route::Exit => break,
        };
    }

    Ok(())
}
