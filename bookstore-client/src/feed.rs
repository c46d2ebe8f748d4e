use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::models::{ExploreResponse, Post};

/// Путь ленты объявлений относительно базового URL API.
pub const EXPLORE_PATH: &str = "/explore";

/// Текст, который показывается вместо ленты при ошибке загрузки.
pub const ERROR_MESSAGE: &str = "Could not retrieve blog posts.";

/// Текст пустой ленты.
pub const EMPTY_MESSAGE: &str = "There are no posts.";

/// Подпись индикатора загрузки (для экранных дикторов).
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние загрузки ленты за время одного монтирования списка.
///
/// Переходы только `Loading -> {Error | Empty | Populated}`, повторных
/// запросов нет.
pub enum LoadState {
    /// Запрос ещё не завершился.
    Loading,
    /// Запрос завершился ошибкой; пользователю показывается [`ERROR_MESSAGE`].
    Error(ClientError),
    /// Сервер вернул пустой список; показывается [`EMPTY_MESSAGE`].
    Empty,
    /// Непустой список объявлений в порядке ответа.
    Populated(Vec<Post>),
}

impl LoadState {
    /// Выбирает итоговое состояние по результату запроса.
    pub fn from_result(result: ClientResult<ExploreResponse>) -> Self {
        match result {
            Ok(response) if response.data.is_empty() => Self::Empty,
            Ok(response) => Self::Populated(response.data),
            Err(err) => Self::Error(err),
        }
    }

    /// `true`, пока запрос не завершился.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Фиксированное сообщение для состояний без списка.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Error(_) => Some(ERROR_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Loading | Self::Populated(_) => None,
        }
    }

    /// Объявления для отрисовки; пусто во всех состояниях, кроме `Populated`.
    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Populated(posts) => posts,
            _ => &[],
        }
    }
}

/// Источник ленты `/explore`.
///
/// Реализуется транспортами: `reqwest` в нативном клиенте и `gloo-net` в
/// браузере. Футуры не обязаны быть `Send`, так как браузерный fetch
/// однопоточный.
#[async_trait(?Send)]
pub trait FeedSource {
    /// Выполняет один `GET {base}/explore` без параметров и повторов.
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse>;
}

/// Загружает ленту ровно одним запросом и возвращает итоговое состояние.
pub async fn load_feed<S>(source: &S) -> LoadState
where
    S: FeedSource + ?Sized,
{
    let state = LoadState::from_result(source.fetch_explore().await);
    match &state {
        LoadState::Error(err) => warn!(error = %err, "could not retrieve explore feed"),
        LoadState::Empty => debug!("explore feed is empty"),
        LoadState::Populated(posts) => debug!(count = posts.len(), "explore feed loaded"),
        LoadState::Loading => {}
    }
    state
}
