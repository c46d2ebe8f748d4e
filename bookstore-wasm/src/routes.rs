//! Таблица маршрутов приложения в типизированном виде.
//!
//! Сами маршруты объявляются в `app.rs` через `leptos_router`; этот модуль
//! даёт ссылки для шапки и определяет активный пункт навигации.

/// Адрес-заглушка для пунктов меню без своей страницы.
pub const PLACEHOLDER_HREF: &str = "#link";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Explore,
    Login,
    User(String),
    Sell,
    Account,
    Messages,
}

impl AppRoute {
    /// Сопоставляет путь с маршрутом. `None` означает неизвестный путь,
    /// который приложение перенаправляет на [`AppRoute::Home`].
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["explore"] => Some(Self::Explore),
            ["login"] => Some(Self::Login),
            ["user", username] => Some(Self::User((*username).to_string())),
            ["sell"] => Some(Self::Sell),
            ["account"] => Some(Self::Account),
            ["messages"] => Some(Self::Messages),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Explore => "/explore".to_string(),
            Self::Login => "/login".to_string(),
            Self::User(username) => format!("/user/{username}"),
            Self::Sell => "/sell".to_string(),
            Self::Account => "/account".to_string(),
            Self::Messages => "/messages".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Route(AppRoute),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub fn href(&self) -> String {
        match &self.target {
            NavTarget::Route(route) => route.path(),
            NavTarget::Placeholder => PLACEHOLDER_HREF.to_string(),
        }
    }

    /// Пункт активен, если ведёт на маршрут текущей страницы.
    pub fn is_active(&self, current_path: &str) -> bool {
        match &self.target {
            NavTarget::Route(route) => AppRoute::resolve(current_path).as_ref() == Some(route),
            NavTarget::Placeholder => false,
        }
    }
}

/// Пункты навигации шапки в порядке отображения.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            target: NavTarget::Route(AppRoute::Home),
        },
        NavItem {
            label: "Explore",
            target: NavTarget::Route(AppRoute::Explore),
        },
        NavItem {
            label: "Sell",
            target: NavTarget::Placeholder,
        },
        NavItem {
            label: "Account",
            target: NavTarget::Placeholder,
        },
        NavItem {
            label: "Messages",
            target: NavTarget::Placeholder,
        },
    ]
}
