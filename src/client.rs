//! Main Spotify client: token handling, request dispatch and session
//! lifecycle.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;

use reqwest::header;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::decode::{decode, ApiResponse};
use crate::error::{Result, SpotifyError};
use crate::response::{classify, ClassifiedResponse};

const DEFAULT_BASE_URL: &str = "https://api.spotify.com";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ACCEPT: &str = "application/json, text/plain, */*";

type TokenFuture = Pin<Box<dyn Future<Output = String> + Send>>;

/// Callback that produces a fresh bearer token. Awaited once at the start of
/// every outbound request.
pub type TokenRefreshFn = Box<dyn Fn() -> TokenFuture + Send + Sync>;

/// Client for the Spotify Web API.
///
/// The client is reentrant: concurrent calls share one connection pool. It
/// holds no state beyond the bearer token and the lazily created session.
///
/// # Example
///
/// ```no_run
/// use spotify_client::SpotifyClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SpotifyClient::new();
/// client.authenticate("token");
///
/// if let Some(state) = client.get_playback().await? {
///     println!("playing: {}", state.playing.is_playing);
/// }
///
/// client.close();
/// # Ok(())
/// # }
/// ```
pub struct SpotifyClient {
    base_url: String,
    request_timeout: Duration,
    user_agent: String,
    token: RwLock<Option<String>>,
    session: Mutex<Session>,
    refresh: Option<TokenRefreshFn>,
}

/// The connection pool and whether this client created it. Only sessions the
/// client created itself are torn down on [`SpotifyClient::close`].
#[derive(Default)]
struct Session {
    http: Option<Client>,
    owned: bool,
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotifyClient {
    /// Create a client against the public Spotify API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("spotify-client/{}", env!("CARGO_PKG_VERSION")),
            token: RwLock::new(None),
            session: Mutex::new(Session::default()),
            refresh: None,
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use an externally supplied session. The client will never close it.
    pub fn with_session(mut self, http: Client) -> Self {
        self.session = Mutex::new(Session {
            http: Some(http),
            owned: false,
        });
        self
    }

    /// Override the per-request timeout (default 10 seconds).
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Register a callback that refreshes the bearer token. It is awaited
    /// before every request and its result replaces the current token.
    pub fn with_token_refresh<F, Fut>(mut self, refresh: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        self.refresh = Some(Box::new(move || Box::pin(refresh())));
        self
    }

    /// Set the bearer token used for subsequent requests.
    pub fn authenticate(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Refresh the token with the registered callback. Without a callback
    /// this is a no-op and the current token is left untouched.
    pub async fn refresh_token(&self) {
        if let Some(refresh) = &self.refresh {
            let token = refresh().await;
            self.authenticate(token);
        }
    }

    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the current session, creating and adopting one on first use.
    fn http(&self) -> Client {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(http) = &session.http {
            return http.clone();
        }
        let http = Client::new();
        session.http = Some(http.clone());
        session.owned = true;
        http
    }

    /// Release the session if this client created it. Externally supplied
    /// sessions stay untouched.
    pub fn close(&self) {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if session.owned {
            session.http = None;
            session.owned = false;
        }
    }

    /// Perform one request and classify the outcome.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ClassifiedResponse> {
        let url = format!("{}/{}", self.base_url, path);

        self.refresh_token().await;
        let token = self.token().unwrap_or_default();
        let http = self.http();

        debug!(method = %method, url = %url, "Sending request to Spotify");

        let mut builder = http
            .request(method, &url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, ACCEPT)
            .bearer_auth(token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let send = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if status == StatusCode::NO_CONTENT {
                // Nothing to decode; the body is never read.
                return Ok((status, content_type, String::new()));
            }
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, content_type, text))
        };

        let (status, content_type, text) = tokio::time::timeout(self.request_timeout, send)
            .await
            .map_err(|_| {
                SpotifyError::Connection("timeout occurred while connecting to Spotify".to_string())
            })?
            .map_err(|err| SpotifyError::Connection(err.to_string()))?;

        classify(status, &content_type, path, text)
    }

    /// GET a typed response.
    pub(crate) async fn get_json<T: ApiResponse>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        match self.request(Method::GET, path, query, None).await? {
            ClassifiedResponse::Empty => decode::<T>(""),
            ClassifiedResponse::Body(body) => decode::<T>(&body),
        }
    }

    /// GET a typed response from an endpoint that legitimately answers 204.
    pub(crate) async fn get_optional_json<T: ApiResponse>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        match self.request(Method::GET, path, query, None).await? {
            ClassifiedResponse::Empty => Ok(None),
            ClassifiedResponse::Body(body) => decode::<T>(&body).map(Some),
        }
    }

    /// Fire a request whose response body is irrelevant.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<()> {
        self.request(method, path, query, body).await.map(|_| ())
    }
}
