//! Client for the [Byte-Watt](https://monitor.byte-watt.com) monitoring API.
//!
//! Logs in with a username, a password, and a pre-computed signature and timestamp pair,
//! and fetches the latest battery telemetry of all the registered systems:
//!
//! ```no_run
//! # async fn run() -> bytewatt::Result {
//! use bytewatt::{Api, Credentials};
//!
//! let credentials = Credentials::builder()
//!     .username("user")
//!     .password("secret")
//!     .auth_signature("signature")
//!     .auth_timestamp("1700000000")
//!     .build();
//! let mut api = Api::new(credentials);
//! let mut api = api.scoped()?;
//! for system in api.get_battery_data().await? {
//!     println!("{system}");
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod prelude;

pub use self::{
    api::{AccessToken, Api, BASE_URL, BatteryData, Credentials, DEFAULT_TIMEOUT, ScopedSession},
    error::{Error, Result, UPSTREAM_NETWORK_ERROR},
};
