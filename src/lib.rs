use anyhow::Context;
use config::Config;
use startup::Application;

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod model;
pub mod routes;
pub mod startup;
pub mod state;
pub mod telemetry;

pub async fn run() -> Result<(), anyhow::Error> {
    let config = Config::new().context("Failed to read configuration.")?;
    let application = Application::build(config).await?;

    application.run_until_stopped().await?;

    Ok(())
}
