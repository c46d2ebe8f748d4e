use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки клиентской библиотеки `bookstore-client`.
///
/// Варианты хранят только строки, чтобы ошибку можно было класть в сигналы
/// Leptos и сравнивать в тестах независимо от транспорта.
pub enum ClientError {
    /// Запрос не дошёл до сервера или соединение оборвалось.
    #[error("transport error: {0}")]
    Transport(String),

    /// Сервер ответил статусом вне диапазона 2xx.
    #[error("http status {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Тело ответа или текст по умолчанию для статуса.
        message: String,
    },

    /// Тело ответа не удалось разобрать как ожидаемый JSON.
    #[error("decode error: {0}")]
    Decode(String),

    /// Некорректная конфигурация клиента (например, базовый URL).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Результат операций `bookstore-client`.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Строит ошибку статуса, подставляя текст по умолчанию для пустого тела.
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let message = body
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| default_status_message(status));

        Self::Status { status, message }
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        400 => "bad request".to_string(),
        401 => "authorization required".to_string(),
        403 => "forbidden".to_string(),
        404 => "not found".to_string(),
        500..=599 => "server error".to_string(),
        _ => format!("http status {status}"),
    }
}
