use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::feed::{EXPLORE_PATH, FeedSource};
use crate::models::ExploreResponse;

#[derive(Debug, Clone)]
/// HTTP-клиент для backend API маркетплейса (нативная сборка).
pub struct HttpClient {
    config: ClientConfig,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент с заданной конфигурацией.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| ClientError::InvalidConfig(format!("failed to build http client: {err}")))?;

        Ok(Self { config, client })
    }

    async fn decode_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.ok();
        ClientError::from_status(status, body)
    }

    /// Загружает ленту объявлений `GET /explore`.
    pub async fn explore(&self) -> ClientResult<ExploreResponse> {
        let url = self.config.endpoint(EXPLORE_PATH);
        debug!(%url, "fetching explore feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<ExploreResponse>()
            .await
            .map_err(from_reqwest)
    }
}

#[async_trait(?Send)]
impl FeedSource for HttpClient {
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse> {
        self.explore().await
    }
}

fn from_reqwest(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        return ClientError::Decode(err.to_string());
    }
    if let Some(status) = err.status() {
        return ClientError::from_status(status.as_u16(), None);
    }
    ClientError::Transport(err.to_string())
}
