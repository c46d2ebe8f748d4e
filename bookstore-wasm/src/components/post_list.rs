use bookstore_client::{FeedSource, LOADING_LABEL, LoadState, load_feed};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::post_item::PostItem;

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="spinner-border" role="status">
            <span class="visually-hidden">{LOADING_LABEL}</span>
        </div>
    }
}

/// Лента объявлений: один запрос при монтировании, затем одно из состояний
/// [`LoadState`].
#[component]
pub fn PostList<S>(source: S) -> impl IntoView
where
    S: FeedSource + 'static,
{
    let state = RwSignal::new(LoadState::Loading);

    spawn_local(async move {
        let loaded = load_feed(&source).await;
        // Сигнал уже уничтожен, если список размонтировали до ответа.
        if state.try_set(loaded).is_some() {
            tracing::debug!("post list unmounted before the feed arrived, result dropped");
        }
    });

    move || {
        let current = state.get();
        if current.is_loading() {
            return view! { <LoadingIndicator /> }.into_any();
        }
        if let Some(message) = current.message() {
            return view! { <p>{message}</p> }.into_any();
        }

        let posts = current.posts().to_vec();
        view! {
            <For
                each=move || posts.clone()
                key=|post| post.id
                children=|post| view! { <PostItem post=post /> }
            />
        }
        .into_any()
    }
}
