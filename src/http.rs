//! Request value object and the HTTP transport behind the API backends.
//!
//! - Blocking client using `ureq` (no async).
//! - Performs OAuth2 password grant against Tado auth, manages refresh
//!   automatically and retries a request once after a 401.
//! - Resolves the account's home id and API generation at login; backends
//!   above this layer never see a URL, only [`TadoRequest`] values.

use http::Method;
use log::{debug, info};
use serde_json::Value;
use std::cell::RefCell;
use std::time::{Duration, Instant};

use crate::error::TadoApiError;
use crate::models::{HomeId, User};
use crate::utils::from_value;

const OAUTH_TOKEN_URL: &str = "https://auth.tado.com/oauth/token";
const OAUTH_CLIENT_ID: &str = "tado-web-app";
const OAUTH_CLIENT_SECRET: &str = "wZaRN7rpjn3FoNyF5IFuxg9uMzYJcvOoQ8QWiIqS3hfk6gLhVlG57j5YNoZL2Rtc";
const OAUTH_SCOPE: &str = "home.user";

/// Which API host a request is addressed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Legacy REST API, also serves home-level endpoints for X-line accounts.
    MyApi,
    /// Room/device API of X-line ("hops") accounts.
    Hops,
    /// Energy IQ (tariffs, meter readings).
    Eiq,
    /// Minder (running times).
    Minder,
}

impl Endpoint {
    fn base_url(self) -> &'static str {
        match self {
            Endpoint::MyApi => "https://my.tado.com/api/v2/",
            Endpoint::Hops => "https://hops.tado.com/",
            Endpoint::Eiq => "https://energy-insights.tado.com/api/",
            Endpoint::Minder => "https://minder.tado.com/v1/",
        }
    }
}

/// URL scope a command is rooted under.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Domain {
    /// `homes/{home_id}` — the default for almost everything.
    Home,
    /// `devices/{serial}` — legacy device-keyed endpoints.
    Devices,
    /// `me` — the authenticated user.
    Me,
    /// `homeByBridge/{bridge}` — installer endpoints keyed by bridge id.
    HomeByBridge,
}

/// One API call: command path, HTTP action, optional payload and query
/// parameters. Built by a backend, consumed by the transport, immutable in
/// between.
#[derive(Debug, Clone, PartialEq)]
pub struct TadoRequest {
    pub endpoint: Endpoint,
    pub domain: Domain,
    pub command: Option<String>,
    pub action: Method,
    pub payload: Option<Value>,
    pub params: Vec<(String, String)>,
    /// Device serial or bridge id filling the `Devices`/`HomeByBridge` scope.
    pub device: Option<String>,
}

impl Default for TadoRequest {
    fn default() -> Self {
        TadoRequest {
            endpoint: Endpoint::MyApi,
            domain: Domain::Home,
            command: None,
            action: Method::GET,
            payload: None,
            params: Vec::new(),
            device: None,
        }
    }
}

impl TadoRequest {
    pub fn get(command: impl Into<String>) -> Self {
        TadoRequest {
            command: Some(command.into()),
            ..TadoRequest::default()
        }
    }

    pub fn put(command: impl Into<String>, payload: Value) -> Self {
        TadoRequest {
            command: Some(command.into()),
            action: Method::PUT,
            payload: Some(payload),
            ..TadoRequest::default()
        }
    }

    pub fn post(command: impl Into<String>) -> Self {
        TadoRequest {
            command: Some(command.into()),
            action: Method::POST,
            ..TadoRequest::default()
        }
    }

    pub fn delete(command: impl Into<String>) -> Self {
        TadoRequest {
            command: Some(command.into()),
            action: Method::DELETE,
            ..TadoRequest::default()
        }
    }

    pub fn via(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn for_device(mut self, serial: &str) -> Self {
        self.domain = Domain::Devices;
        self.device = Some(serial.to_string());
        self
    }

    pub fn for_bridge(mut self, bridge: &str, auth_key: &str) -> Self {
        self.domain = Domain::HomeByBridge;
        self.device = Some(bridge.to_string());
        self.params.push(("authKey".to_string(), auth_key.to_string()));
        self
    }
}

/// The only call-out point of the client: everything above this trait is pure
/// request construction and response normalization.
pub trait Transport {
    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError>;
}

#[derive(Debug, Clone)]
struct OAuthToken {
    access_token: String,
    expires_at: Instant,
    refresh_token: Option<String>,
}

#[derive(Debug)]
struct OAuthState {
    token: Option<OAuthToken>,
    username: String,
    password: String,
}

/// Authenticated HTTP transport against the Tado cloud.
pub struct Http {
    agent: ureq::Agent,
    oauth: RefCell<OAuthState>,
    home_id: HomeId,
    x_line: bool,
}

impl Http {
    /// Log in with account credentials, resolve the account's home and probe
    /// which API generation serves it.
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Result<Self, TadoApiError> {
        let agent = ureq::AgentBuilder::new().build();

        let mut state = OAuthState {
            token: None,
            username: username.into(),
            password: password.into(),
        };
        let token = Self::oauth_password_grant(&agent, &state)?;
        state.token = Some(token);

        let mut http = Http {
            agent,
            oauth: RefCell::new(state),
            home_id: HomeId(0),
            x_line: false,
        };

        // Resolve the home id from the user profile, then probe the home's
        // generation to pick the backend family for this session.
        let me: User = from_value(http.request(&TadoRequest {
            domain: Domain::Me,
            ..TadoRequest::default()
        })?)?;
        http.home_id = me
            .homes
            .as_deref()
            .and_then(|homes| homes.first())
            .and_then(|home| home.id)
            .ok_or_else(|| TadoApiError::Auth("account has no homes".to_string()))?;

        let home = http.request(&TadoRequest::default())?;
        http.x_line = home.get("generation").and_then(Value::as_str) == Some("LINE_X");
        info!(
            "Authenticated home {} ({} generation)",
            http.home_id.0,
            if http.x_line { "X line" } else { "pre-X" }
        );

        Ok(http)
    }

    /// Whether the account was classified as an X-line ("hops") home.
    pub fn is_x_line(&self) -> bool {
        self.x_line
    }

    pub fn home_id(&self) -> HomeId {
        self.home_id
    }

    fn oauth_password_grant(agent: &ureq::Agent, state: &OAuthState) -> Result<OAuthToken, TadoApiError> {
        let resp = agent
            .post(OAUTH_TOKEN_URL)
            .set("Accept", "application/json")
            .send_form(&[
                ("client_id", OAUTH_CLIENT_ID),
                ("client_secret", OAUTH_CLIENT_SECRET),
                ("grant_type", "password"),
                ("scope", OAUTH_SCOPE),
                ("username", state.username.as_str()),
                ("password", state.password.as_str()),
            ]);
        Self::parse_token_response(resp)
    }

    fn oauth_refresh_grant(agent: &ureq::Agent, refresh: &str) -> Result<OAuthToken, TadoApiError> {
        let resp = agent
            .post(OAUTH_TOKEN_URL)
            .set("Accept", "application/json")
            .send_form(&[
                ("client_id", OAUTH_CLIENT_ID),
                ("client_secret", OAUTH_CLIENT_SECRET),
                ("grant_type", "refresh_token"),
                ("scope", OAUTH_SCOPE),
                ("refresh_token", refresh),
            ]);
        Self::parse_token_response(resp)
    }

    fn parse_token_response(resp: Result<ureq::Response, ureq::Error>) -> Result<OAuthToken, TadoApiError> {
        #[derive(serde::Deserialize)]
        struct R {
            access_token: String,
            expires_in: u64,
            #[serde(default)]
            refresh_token: Option<String>,
        }
        match resp {
            Ok(r) => {
                let R {
                    access_token,
                    expires_in,
                    refresh_token,
                } = serde_json::from_reader(r.into_reader())?;
                Ok(OAuthToken {
                    access_token,
                    expires_at: Instant::now() + Duration::from_secs(expires_in),
                    refresh_token,
                })
            }
            Err(ureq::Error::Transport(t)) => Err(TadoApiError::Transport(t.to_string())),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_else(|_| String::from("<no body>"));
                Err(TadoApiError::Auth(format!("http {}: {}", status, body)))
            }
        }
    }

    fn bearer(&self) -> Result<String, TadoApiError> {
        let mut s = self.oauth.borrow_mut();
        let needs_refresh = match &s.token {
            None => true,
            // Refresh slightly early so in-flight requests don't race expiry.
            Some(t) => Instant::now() + Duration::from_secs(30) >= t.expires_at,
        };
        if needs_refresh {
            let new_token = match s.token.as_ref().and_then(|t| t.refresh_token.clone()) {
                Some(r) => Self::oauth_refresh_grant(&self.agent, &r),
                None => Self::oauth_password_grant(&self.agent, &s),
            }?;
            s.token = Some(new_token);
        }
        Ok(s.token.as_ref().map(|t| t.access_token.clone()).unwrap_or_default())
    }

    fn force_refresh(&self) -> Result<(), TadoApiError> {
        let mut s = self.oauth.borrow_mut();
        let new_token = match s.token.as_ref().and_then(|t| t.refresh_token.clone()) {
            Some(r) => Self::oauth_refresh_grant(&self.agent, &r),
            None => Self::oauth_password_grant(&self.agent, &s),
        }?;
        s.token = Some(new_token);
        Ok(())
    }

    fn send(&self, req: &TadoRequest, url: &str) -> Result<Value, TadoApiError> {
        let token = self.bearer()?;
        let mut r = self
            .agent
            .request(req.action.as_str(), url)
            .set("Accept", "application/json")
            .set("Authorization", &format!("Bearer {}", token));
        for (k, v) in &req.params {
            r = r.query(k, v);
        }

        let result = match &req.payload {
            Some(body) => r.send_json(body),
            None => r.call(),
        };
        match result {
            Ok(resp) => Self::parse_body(resp),
            Err(ureq::Error::Transport(t)) => Err(TadoApiError::Transport(t.to_string())),
            Err(ureq::Error::Status(status, resp)) => {
                let message = resp.into_string().unwrap_or_else(|_| String::from("<no body>"));
                Err(TadoApiError::Http { status, message })
            }
        }
    }

    fn parse_body(resp: ureq::Response) -> Result<Value, TadoApiError> {
        let body = resp.into_string().map_err(|e| TadoApiError::Transport(e.to_string()))?;
        if body.trim().is_empty() {
            // DELETE/PUT endpoints answer 204 with no body.
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_str(&body)?)
        }
    }
}

impl Transport for Http {
    fn request(&self, req: &TadoRequest) -> Result<Value, TadoApiError> {
        let url = build_url(self.home_id, req);
        debug!("{} {}", req.action, url);
        match self.send(req, &url) {
            // Token may have been revoked server-side; refresh and retry once.
            Err(TadoApiError::Http { status: 401, .. }) => {
                self.force_refresh()?;
                self.send(req, &url)
            }
            other => other,
        }
    }
}

fn build_url(home_id: HomeId, req: &TadoRequest) -> String {
    let base = req.endpoint.base_url();
    let scope = match req.domain {
        Domain::Home => format!("homes/{}", home_id.0),
        Domain::Devices => format!("devices/{}", req.device.as_deref().unwrap_or_default()),
        Domain::Me => "me".to_string(),
        Domain::HomeByBridge => format!("homeByBridge/{}", req.device.as_deref().unwrap_or_default()),
    };
    match req.command.as_deref() {
        Some(command) if !command.is_empty() => format!("{}{}/{}", base, scope, command),
        _ => format!("{}{}", base, scope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_domain_urls_include_home_id() {
        let req = TadoRequest::get("zones/1/state");
        assert_eq!(
            build_url(HomeId(1234), &req),
            "https://my.tado.com/api/v2/homes/1234/zones/1/state"
        );
    }

    #[test]
    fn bare_home_domain_has_no_trailing_slash() {
        let req = TadoRequest::default();
        assert_eq!(build_url(HomeId(1234), &req), "https://my.tado.com/api/v2/homes/1234");
    }

    #[test]
    fn device_domain_urls_are_serial_keyed() {
        let req = TadoRequest::put("temperatureOffset", serde_json::json!({"celsius": 2.0})).for_device("VA1234567890");
        assert_eq!(
            build_url(HomeId(1234), &req),
            "https://my.tado.com/api/v2/devices/VA1234567890/temperatureOffset"
        );
    }

    #[test]
    fn device_domain_without_command_addresses_the_device() {
        let req = TadoRequest {
            domain: Domain::Devices,
            device: Some("VA1234567890".to_string()),
            ..TadoRequest::default()
        };
        assert_eq!(
            build_url(HomeId(1234), &req),
            "https://my.tado.com/api/v2/devices/VA1234567890"
        );
    }

    #[test]
    fn hops_endpoint_urls_use_the_hops_host() {
        let req = TadoRequest::get("rooms/1").via(Endpoint::Hops);
        assert_eq!(build_url(HomeId(1234), &req), "https://hops.tado.com/homes/1234/rooms/1");
    }

    #[test]
    fn bridge_scope_carries_the_auth_key_param() {
        let req = TadoRequest::get("boilerMaxOutputTemperature").for_bridge("IB123456789", "authcode");
        assert_eq!(
            build_url(HomeId(1234), &req),
            "https://my.tado.com/api/v2/homeByBridge/IB123456789/boilerMaxOutputTemperature"
        );
        assert_eq!(req.params, vec![("authKey".to_string(), "authcode".to_string())]);
    }

    #[test]
    fn eiq_and_minder_endpoints_resolve() {
        assert_eq!(
            build_url(HomeId(1), &TadoRequest::get("tariffs").via(Endpoint::Eiq)),
            "https://energy-insights.tado.com/api/homes/1/tariffs"
        );
        assert_eq!(
            build_url(HomeId(1), &TadoRequest::get("runningTimes/2023-08-01").via(Endpoint::Minder)),
            "https://minder.tado.com/v1/homes/1/runningTimes/2023-08-01"
        );
    }
}
