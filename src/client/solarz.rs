//! SolarZ API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde_json::{Value, json};
use tokio::sync::RwLock;

use super::api::{AccountApi, AuthApi, PlantApi, UnitApi};
use super::models::{DateRange, LoginRequest, LoginResponse, Period, PlantRef, flag, parse_date};
use super::session::Session;
use crate::error::{ApiError, ConfigError, Result};

/// SolarZ web API base URL
pub const API_BASE_URL: &str = "https://app.solarz.com.br";

/// The web app rejects requests without a browser-like agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`SolarZClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientOptions {
    /// Default options with an optional base URL override.
    pub fn with_host(api_host: Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(host) = api_host {
            options.base_url = host;
        }
        options
    }
}

/// SolarZ API client
///
/// One client owns one session. Clone the `Arc` around it to share the
/// session between tasks.
pub struct SolarZClient {
    http: HttpClient,
    base_url: String,
    session: Arc<RwLock<Session>>,
}

impl SolarZClient {
    /// Create a new client. No request is made until [`AuthApi::authenticate`].
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = options.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API host must start with http:// or https://, got '{}'",
                options.base_url
            ))
            .into());
        }

        let user_agent = HeaderValue::from_str(&options.user_agent)
            .map_err(|e| ConfigError::Invalid(format!("Invalid user agent: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            session: Arc::new(RwLock::new(Session::default())),
        })
    }

    /// Create a client with default options and an optional host override.
    pub fn with_host(api_host: Option<String>) -> Result<Self> {
        Self::new(ClientOptions::with_host(api_host))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a login has succeeded on this client.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Plant captured by the last client context call.
    pub async fn plant(&self) -> Option<PlantRef> {
        self.session.read().await.plant().cloned()
    }

    /// `Authorization` header value, or `NotAuthenticated`.
    async fn bearer(&self) -> Result<String> {
        let session = self.session.read().await;
        session
            .bearer()
            .ok_or_else(|| ApiError::NotAuthenticated.into())
    }

    /// Authenticated session with a captured plant.
    async fn require_plant(&self) -> Result<PlantRef> {
        let session = self.session.read().await;
        if !session.is_authenticated() {
            return Err(ApiError::NotAuthenticated.into());
        }
        session
            .plant()
            .cloned()
            .ok_or_else(|| ApiError::PlantNotLoaded.into())
    }

    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.send(Method::GET, path, query, None).await?;
        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            } else {
                // body cut off or timed out mid-read
                ApiError::from(e).into()
            }
        })
    }

    /// Send an authenticated request and check its status.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let auth = self.bearer().await?;

        debug!("{} {}", method, path);
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, auth);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        check_status(response).await
    }
}

/// Map non-success statuses to API errors.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("Request failed with status {}: {}", status, body);

    let err = match status {
        StatusCode::UNAUTHORIZED => {
            ApiError::Unauthorized("Session token rejected or expired".to_string())
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(non_empty(body, "Resource not found")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(non_empty(body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(non_empty(body, &format!("Server error: {}", status)))
        }
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };
    Err(err.into())
}

fn non_empty(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[async_trait]
impl AuthApi for SolarZClient {
    async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(
                ApiError::InvalidInput("Username and password are required".to_string()).into(),
            );
        }

        debug!("POST /cliente/authenticate as {}", username);
        let url = format!("{}/cliente/authenticate", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        let login = serde_json::from_str::<LoginResponse>(&text).ok();

        if status.is_success() {
            let token = login
                .and_then(|l| l.token)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    ApiError::InvalidResponse("Login response has no token".to_string())
                })?;

            self.session.write().await.start(token);
            info!("Authenticated as {}", username);
            return Ok(());
        }

        let err = match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let message = login
                    .and_then(|l| l.error)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Invalid username or password".to_string());
                ApiError::Unauthorized(message)
            }
            status if status.is_server_error() => {
                ApiError::ServerError(non_empty(text, &format!("Server error: {}", status)))
            }
            status => ApiError::InvalidResponse(format!(
                "Unexpected status code {}: {}",
                status, text
            )),
        };
        Err(err.into())
    }
}

#[async_trait]
impl PlantApi for SolarZClient {
    async fn get_client_context(&self) -> Result<Value> {
        let token = self
            .session
            .read()
            .await
            .token()
            .map(str::to_string)
            .ok_or(ApiError::NotAuthenticated)?;
        let context = self.get_json("/cliente/context", &[]).await?;

        match PlantRef::first_in_context(&context) {
            Some(plant) => {
                let (id, uuid) = (plant.id.clone(), plant.uuid.clone());
                if self.session.write().await.set_plant_for(&token, plant) {
                    info!(
                        "Selected plant {} (uuid {})",
                        id,
                        uuid.as_deref().unwrap_or("-")
                    );
                } else {
                    warn!("Session changed while loading the client context, plant not kept");
                }
            }
            None => warn!("No plants found for this account"),
        }

        Ok(context)
    }

    async fn get_last_status(&self) -> Result<Value> {
        let plant = self.require_plant().await?;
        self.get_json("/shareable/currently/usina", &[("id", plant.id)])
            .await
    }

    async fn get_last_report(&self) -> Result<Value> {
        let plant = self.require_plant().await?;
        let uuid = plant.uuid.ok_or(ApiError::PlantNotLoaded)?;
        let path = format!("/api-sz/app/cliente/plant/{}/lastReport", uuid);
        self.get_json(&path, &[]).await
    }

    async fn get_generation_day(&self, date: &str, unite_portals: bool) -> Result<Value> {
        let plant = self.require_plant().await?;
        let day = parse_date(date)?;

        let query = [
            ("usinaId", plant.id),
            ("day", day.to_string()),
            ("unitePortals", flag(unite_portals)),
        ];
        self.get_json("/api-sz/generation/day", &query).await
    }

    async fn get_generation_period(
        &self,
        start_date: &str,
        end_date: &str,
        period: Period,
        unite_months: bool,
        unite_portals: bool,
    ) -> Result<Value> {
        let plant = self.require_plant().await?;
        let [start, end] = DateRange::parse(start_date, end_date)?.to_query();

        let query = [
            ("usinaId", plant.id),
            start,
            end,
            ("uniteMonths", flag(unite_months)),
            ("unitePortals", flag(unite_portals)),
            ("period", period.as_str().to_string()),
        ];
        self.get_json("/api-sz/generation/period", &query).await
    }
}

#[async_trait]
impl UnitApi for SolarZClient {
    async fn get_unidade_sums(&self) -> Result<Value> {
        self.get_json("/api-sz/app/cliente/unidades/sums", &[])
            .await
    }

    async fn get_unidade_credit(&self) -> Result<Value> {
        self.get_json("/api-sz/app/cliente/unidades/credit", &[])
            .await
    }

    async fn get_unidade_by_period(&self, start_date: &str, end_date: &str) -> Result<Value> {
        self.bearer().await?;
        let range = DateRange::parse(start_date, end_date)?;
        self.get_json("/api-sz/app/cliente/unidades", &range.to_query())
            .await
    }
}

#[async_trait]
impl AccountApi for SolarZClient {
    async fn get_economized(&self) -> Result<Value> {
        self.get_json("/api-sz/app/cliente/home/economizados", &[])
            .await
    }

    async fn get_notifications(&self, page: u32) -> Result<Value> {
        let path = format!("/cliente/notifications/page/{}", page);
        self.get_json(&path, &[]).await
    }

    async fn mark_all_notifications_seen(&self) -> Result<()> {
        self.send(
            Method::POST,
            "/cliente/notifications/seenAll",
            &[],
            Some(&json!({})),
        )
        .await?;
        info!("Marked all notifications as seen");
        Ok(())
    }
}
