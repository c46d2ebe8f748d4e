use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container Content">
            <h1>"Welcome to BOOKSTORE"</h1>
        </div>
    }
}
