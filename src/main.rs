mod cli;

use anyhow::Context;
use clap::{Parser, crate_version};
use tracing::info;

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut api = args.connection.new_api();
    let mut api = api.scoped()?;

    match args.command {
        Command::Login => {
            api.authenticate().await.context("failed to log in")?;
            info!("credentials are accepted");
        }
        Command::Battery => {
            let battery_data =
                api.get_battery_data().await.context("failed to fetch the battery data")?;
            println!("{}", serde_json::to_string_pretty(&battery_data)?);
        }
    }

    info!("done!");
    Ok(())
}
