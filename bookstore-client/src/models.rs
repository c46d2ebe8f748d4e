use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Автор объявления.
pub struct Author {
    /// Логин автора.
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Объявление о продаже книги из ленты `/explore`.
///
/// Все текстовые поля, кроме `id`, необязательны: отсутствующее или `null`
/// значение превращается в пустую строку и отображается как пустой текст.
pub struct Post {
    /// Идентификатор объявления, используется как ключ в списке.
    pub id: i64,
    /// Название книги.
    #[serde(default, alias = "post_title", deserialize_with = "null_as_default")]
    pub title: String,
    /// Описание.
    #[serde(default, alias = "descriprion", deserialize_with = "null_as_default")]
    pub description: String,
    /// Цена в виде текста для отображения (сервер может прислать число).
    #[serde(default, deserialize_with = "price_as_text")]
    pub price: String,
    /// Время публикации в виде готовой строки ("a minute ago").
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Автор объявления.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ответ `GET /explore`.
pub struct ExploreResponse {
    /// Объявления в порядке, заданном сервером.
    pub data: Vec<Post>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceDto {
    Text(String),
    Number(serde_json::Number),
}

fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Option::<PriceDto>::deserialize(deserializer)? {
        Some(PriceDto::Text(text)) => text,
        Some(PriceDto::Number(number)) => number.to_string(),
        None => String::new(),
    };
    Ok(price)
}
