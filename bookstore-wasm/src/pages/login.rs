use leptos::prelude::*;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="container Content">
            <LoginForm />
        </div>
    }
}
