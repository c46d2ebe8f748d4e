use bookstore_client::ClientConfig;
use leptos::prelude::*;

use crate::api::BrowserFeed;
use crate::components::post_list::PostList;

#[component]
pub fn ExplorePage() -> impl IntoView {
    // Конфигурацию кладёт в контекст App; без неё берём адрес по умолчанию.
    let config = use_context::<ClientConfig>().unwrap_or_default();

    view! {
        <div class="container Content">
            <PostList source=BrowserFeed::new(config) />
        </div>
    }
}
