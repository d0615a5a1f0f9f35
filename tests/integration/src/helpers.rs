//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use bot_api::{create_app, create_memory_app_state, serve};
use bot_common::AppConfig;
use bot_db::MemoryStore;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Credentials of the seeded administrator
pub const SEED_ADMIN: (&str, &str) = ("admin@example.com", "admin123");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Store behind the server, for arranging data no endpoint creates
    pub store: MemoryStore,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over an empty store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(false)?).await
    }

    /// Start a server whose store holds the demo seed (admin, viewer, sample bot)
    pub async fn start_seeded() -> Result<Self> {
        Self::start_with_config(test_config(true)?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let store = MemoryStore::new();
        let state = create_memory_app_state(config, &store).await?;
        let app = create_app(state)?;

        // Ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the API
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a body-less POST request with auth token
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Register a fresh viewer and log in as them
    pub async fn register_and_login(&self) -> Result<(UserResponse, String)> {
        let request = RegisterRequest::unique();
        let response = self.post("/auth/register", &request).await?;
        assert_status(response, StatusCode::CREATED).await?;
        self.login(&request.email, &request.password).await
    }

    /// Log in and return the user and token
    pub async fn login(&self, email: &str, password: &str) -> Result<(UserResponse, String)> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post("/auth/login", &request).await?;
        let login: LoginResponse = assert_json(response, StatusCode::OK).await?;
        Ok((login.user, login.token))
    }
}

/// Configuration for an in-memory test server
pub fn test_config(seed: bool) -> Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("APP_ENV", "development".to_string()),
        ("DATABASE_URL", "postgres://unused/in-memory".to_string()),
        ("JWT_SECRET", "integration-test-secret".to_string()),
        ("SEED_DATABASE", seed.to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string()),
        ("RATE_LIMIT_BURST", "1000".to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
