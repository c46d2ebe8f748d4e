use leptos::prelude::*;

#[component]
fn Placeholder(title: &'static str) -> impl IntoView {
    view! {
        <div class="container Content">
            <h1>{title}</h1>
        </div>
    }
}

#[component]
pub fn SellPage() -> impl IntoView {
    view! { <Placeholder title="Sell" /> }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! { <Placeholder title="Account" /> }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! { <Placeholder title="Messages" /> }
}
