use crate::error::{ClientError, ClientResult};

/// Базовый URL API по умолчанию (локальный backend).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Переменная окружения с базовым URL API.
pub const API_BASE_URL_ENV: &str = "BOOKSTORE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Конфигурация клиента: адрес backend API.
///
/// Передаётся явно (в браузере через контекст Leptos, в нативном клиенте
/// через конструктор), а не читается из глобального состояния.
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Проверяет и нормализует базовый URL.
    ///
    /// Пустое значение и схемы, отличные от `http`/`https`, отклоняются.
    pub fn new(api_base_url: impl AsRef<str>) -> ClientResult<Self> {
        let raw = api_base_url.as_ref().trim();
        if raw.is_empty() {
            return Err(ClientError::InvalidConfig(
                "api base url must not be empty".to_string(),
            ));
        }
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "api base url must start with http:// or https://, got `{raw}`"
            )));
        }

        Ok(Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Читает базовый URL из `BOOKSTORE_API_BASE_URL`, иначе берёт значение
    /// по умолчанию.
    pub fn from_env() -> ClientResult<Self> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Базовый URL без завершающего `/`.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Полный URL для пути API.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
