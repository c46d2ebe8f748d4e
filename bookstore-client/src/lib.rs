//! Клиентская библиотека маркетплейса книг.
//!
//! Содержит модели ленты `/explore`, явную машину состояний загрузки
//! ([`LoadState`]) и конфигурацию адреса API. Транспорт подключается через
//! трейт [`FeedSource`]:
//! - нативный HTTP (`reqwest`) — [`HttpClient`];
//! - браузерный fetch (`gloo-net`) — в крейте `bookstore-wasm`.
#![warn(missing_docs)]

mod config;
mod error;
mod feed;
#[cfg(not(target_arch = "wasm32"))]
mod http_client;
mod models;

pub use config::{API_BASE_URL_ENV, ClientConfig, DEFAULT_API_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use feed::{
    EMPTY_MESSAGE, ERROR_MESSAGE, EXPLORE_PATH, FeedSource, LOADING_LABEL, LoadState, load_feed,
};
#[cfg(not(target_arch = "wasm32"))]
pub use http_client::HttpClient;
pub use models::{Author, ExploreResponse, Post};
