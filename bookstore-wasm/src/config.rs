use bookstore_client::ClientConfig;

/// Конфигурация, зашитая при сборке: `BOOKSTORE_API_BASE_URL` читается один
/// раз через `option_env!`.
pub fn build_config() -> ClientConfig {
    config_from(option_env!("BOOKSTORE_API_BASE_URL"))
}

/// Максимальный уровень логов в консоли: DEBUG для отладочной сборки,
/// INFO для релиза.
pub fn log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn config_from(raw: Option<&str>) -> ClientConfig {
    let Some(raw) = raw else {
        return ClientConfig::default();
    };

    ClientConfig::new(raw).unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid BOOKSTORE_API_BASE_URL, using default");
        ClientConfig::default()
    })
}
