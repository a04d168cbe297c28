use std::time::Duration;

use bytewatt::{Api, BASE_URL, Credentials};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and check that the credentials are accepted.
    #[clap(name = "login")]
    Login,

    /// Fetch the latest power data of all the systems and print it as JSON.
    #[clap(name = "battery")]
    Battery,
}

#[derive(Parser)]
pub struct ConnectionArgs {
    #[clap(long, env = "BYTEWATT_USERNAME")]
    pub username: String,

    #[clap(long, env = "BYTEWATT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Pre-computed `authsignature` as sent by the web app.
    #[clap(long, env = "BYTEWATT_AUTH_SIGNATURE")]
    pub auth_signature: String,

    /// Pre-computed `authtimestamp` matching the signature.
    #[clap(long, env = "BYTEWATT_AUTH_TIMESTAMP")]
    pub auth_timestamp: String,

    /// Timeout of every single request, for example: `5s` or `1500ms`.
    #[clap(
        long,
        env = "BYTEWATT_TIMEOUT",
        default_value = "5s",
        value_parser = humantime::parse_duration,
    )]
    pub timeout: Duration,

    #[clap(long, env = "BYTEWATT_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
}

impl ConnectionArgs {
    pub fn new_api(self) -> Api {
        let credentials = Credentials::builder()
            .username(self.username)
            .password(self.password)
            .auth_signature(self.auth_signature)
            .auth_timestamp(self.auth_timestamp)
            .build();
        Api::builder()
            .credentials(credentials)
            .timeout(self.timeout)
            .base_url(self.base_url.trim_end_matches('/'))
            .build()
    }
}
