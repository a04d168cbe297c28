mod credentials;
mod models;
mod response;
mod session;

use std::time::Duration;

use bon::Builder;
use http::{
    HeaderValue,
    StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

pub use self::{
    credentials::Credentials,
    models::{AccessToken, BatteryData},
    session::ScopedSession,
};
use self::response::Response;
use crate::prelude::*;

pub const BASE_URL: &str = "https://monitor.byte-watt.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const LOGIN_PATH: &str = "api/Account/Login";

const BATTERY_DATA_PATH: &str = "api/ESS/GetLastPowerDataBySN";

/// Byte-Watt monitoring API client.
///
/// The HTTP session is opened on the first call and kept until [`Api::close`].
/// The access token is obtained lazily and renewed once when the API rejects it.
#[must_use]
#[derive(Builder)]
pub struct Api {
    credentials: Credentials,

    /// Timeout of every single request.
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,

    /// Scheme and host, the trailing slash is optional.
    #[builder(into, default = BASE_URL.to_owned())]
    base_url: String,

    #[builder(skip)]
    session: Option<Client>,

    #[builder(skip)]
    access_token: Option<AccessToken>,
}

impl Api {
    pub fn new(credentials: Credentials) -> Self {
        Self::builder().credentials(credentials).build()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Open the session, and close it when the returned guard gets dropped.
    pub fn scoped(&mut self) -> Result<ScopedSession<'_>> {
        self.session()?;
        Ok(ScopedSession::new(self))
    }

    /// Close the session, if any. The access token stays cached.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            debug!("Session closed");
        }
    }

    /// Log in and remember the access token.
    #[instrument(skip_all, fields(username = self.credentials.username()))]
    pub async fn authenticate(&mut self) -> Result<&AccessToken> {
        #[derive(Serialize)]
        struct LoginQuery<'a> {
            #[serde(rename = "authsignature")]
            auth_signature: &'a str,

            #[serde(rename = "authtimestamp")]
            auth_timestamp: &'a str,
        }

        #[derive(Serialize)]
        struct LoginRequest<'a> {
            #[serde(rename = "userName")]
            username: &'a str,

            #[serde(rename = "password")]
            password: &'a str,
        }

        info!("Logging in…");
        let response = self
            .session()?
            .post(self.url(LOGIN_PATH))
            .query(&LoginQuery {
                auth_signature: self.credentials.auth_signature(),
                auth_timestamp: self.credentials.auth_timestamp(),
            })
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&LoginRequest {
                username: self.credentials.username(),
                password: self.credentials.password(),
            })
            .send()
            .await?;
        // The body contains the token, so it does not get logged:
        let body: Response = serde_json::from_value(read(LOGIN_PATH, response).await?)?;
        let access_token = Result::<AccessToken>::from(body)?;
        info!("Logged in");
        Ok(&*self.access_token.insert(access_token))
    }

    /// Get the latest power data of all the registered systems.
    ///
    /// Logs in first when there is no access token yet.
    /// If the token got expired, logs in again and retries once.
    #[instrument(skip_all)]
    pub async fn get_battery_data(&mut self) -> Result<BatteryData> {
        let session = self.session()?;
        let access_token = match self.access_token.clone() {
            Some(access_token) => access_token,
            None => self.authenticate().await?.clone(),
        };

        info!("Fetching…");
        let response = session
            .get(self.url(BATTERY_DATA_PATH))
            .query(&[("sys_sn", "All"), ("noLoading", "true")])
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("authtimestamp", HeaderValue::from_str(self.credentials.auth_timestamp())?)
            .header("authsignature", HeaderValue::from_str(self.credentials.auth_signature())?)
            .header(AUTHORIZATION, access_token.to_bearer()?)
            .send()
            .await?;

        let response = if response.status() == StatusCode::UNAUTHORIZED {
            warn!("The access token has expired");
            let authorization = self.authenticate().await?.to_bearer()?;
            // FIXME: the retry goes without the query and the signature headers, same as the
            // vendor's own client does. A stricter server would reject it.
            session
                .get(self.url(BATTERY_DATA_PATH))
                .header(AUTHORIZATION, authorization)
                .send()
                .await?
        } else {
            response
        };

        let body = read(BATTERY_DATA_PATH, response).await?;
        debug!(?body, "Call succeeded");
        let battery_data = Result::<BatteryData>::from(serde_json::from_value::<Response>(body)?)?;
        info!(n_systems = battery_data.len(), "Fetched");
        Ok(battery_data)
    }

    /// Get the open session, or open a new one.
    fn session(&mut self) -> Result<Client> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }
        debug!(timeout = ?self.timeout, "Opening a session…");
        let session = Client::builder().user_agent("bytewatt").timeout(self.timeout).build()?;
        Ok(self.session.insert(session).clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Check the status and read the body as JSON.
#[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
async fn read(path: &'static str, response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Http { path, status, body });
    }
    Ok(serde_json::from_str(&body)?)
}
