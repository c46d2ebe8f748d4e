use bookstore_client::ClientConfig;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::{
    AccountPage, ExplorePage, HomePage, LoginPage, MessagesPage, SellPage, UserPage,
};
use crate::routes::AppRoute;

/// Корень приложения: конфигурация в контекст, шапка один раз, таблица
/// маршрутов. Любой неизвестный путь перенаправляется на `/`.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div class="container-fluid App">
            <Router>
                <Header />
                <main>
                    <Routes fallback=|| view! { <Redirect path=AppRoute::Home.path() /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/explore") view=ExplorePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/user/:username") view=UserPage />
                        <Route path=path!("/sell") view=SellPage />
                        <Route path=path!("/account") view=AccountPage />
                        <Route path=path!("/messages") view=MessagesPage />
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
