//! Фронтенд маркетплейса книг на Leptos (CSR).
//!
//! Модули без DOM (`config`, `routes`) собираются и тестируются на хосте,
//! компоненты только под `wasm32`.

pub mod config;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod pages;
