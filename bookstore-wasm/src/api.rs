use async_trait::async_trait;
use bookstore_client::{ClientConfig, ClientError, ClientResult, EXPLORE_PATH, ExploreResponse, FeedSource};
use gloo_net::http::{Request, Response};

/// Источник ленты поверх `fetch` браузера.
#[derive(Debug, Clone)]
pub(crate) struct BrowserFeed {
    config: ClientConfig,
}

impl BrowserFeed {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

async fn parse_error_body(response: Response) -> ClientError {
    let status = response.status();
    let text = response.text().await.ok();
    ClientError::from_status(status, text)
}

#[async_trait(?Send)]
impl FeedSource for BrowserFeed {
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse> {
        let url = self.config.endpoint(EXPLORE_PATH);
        tracing::debug!(%url, "fetching explore feed");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(parse_error_body(response).await);
        }

        response
            .json::<ExploreResponse>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}
