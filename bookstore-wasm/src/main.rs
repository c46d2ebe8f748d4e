#[cfg(target_arch = "wasm32")]
fn main() {
    use bookstore_wasm::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(bookstore_wasm::config::log_level())
            .build(),
    );

    let config = bookstore_wasm::config::build_config();
    tracing::info!(api_base_url = config.api_base_url(), "mounting bookstore app");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Пустой main нужен только чтобы `cargo build --workspace` на хосте проходил.
}
