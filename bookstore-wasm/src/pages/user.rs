use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница пользователя. Имя из `/user/:username` не проверяется.
#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params_map();
    let username = move || params.with(|params| params.get("username")).unwrap_or_default();

    view! {
        <div class="container Content">
            <h1>{username}</h1>
            <p>"TODO"</p>
        </div>
    }
}
