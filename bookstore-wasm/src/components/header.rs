use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, NavItem, NavTarget, nav_items};

fn nav_entry(item: NavItem, pathname: Memo<String>) -> AnyView {
    let label = item.label;
    let href = item.href();

    match item.target {
        NavTarget::Route(_) => {
            let class = move || {
                if item.is_active(&pathname.get()) {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! {
                <li class="nav-item">
                    <A href=href attr:class=class>
                        {label}
                    </A>
                </li>
            }
            .into_any()
        }
        NavTarget::Placeholder => view! {
            <li class="nav-item">
                <a class="nav-link" href=href>
                    {label}
                </a>
            </li>
        }
        .into_any(),
    }
}

/// Шапка: бренд, поиск (пока без обработчика) и навигация.
#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar sticky-top bg-info Header">
            <div class="container">
                <A href=AppRoute::Home.path() attr:class="navbar-brand">
                    "BOOKSTORE"
                </A>
                <form class="d-flex" role="search">
                    <input
                        class="form-control form-control-sm me-2"
                        type="search"
                        placeholder="Search"
                        aria-label="Search"
                    />
                    <button class="btn btn-outline-dark btn-sm" type="button">
                        "Search"
                    </button>
                </form>
                <ul class="nav nav-underline justify-content-end">
                    {nav_items()
                        .into_iter()
                        .map(|item| nav_entry(item, pathname))
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
