#![cfg(target_arch = "wasm32")]

use async_trait::async_trait;
use bookstore_client::{
    Author, ClientConfig, ClientError, ClientResult, ExploreResponse, FeedSource, Post,
};
use bookstore_wasm::app::App;
use bookstore_wasm::components::post_list::PostList;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

struct StaticFeed(ClientResult<ExploreResponse>);

#[async_trait(?Send)]
impl FeedSource for StaticFeed {
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse> {
        self.0.clone()
    }
}

struct DelayedFeed {
    delay_ms: u32,
    response: ExploreResponse,
}

#[async_trait(?Send)]
impl FeedSource for DelayedFeed {
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(self.response.clone())
    }
}

struct PendingFeed;

#[async_trait(?Send)]
impl FeedSource for PendingFeed {
    async fn fetch_explore(&self) -> ClientResult<ExploreResponse> {
        std::future::pending().await
    }
}

fn sample_post(id: i64, title: &str, username: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        description: "desc".to_string(),
        price: "25".to_string(),
        timestamp: "a minute ago".to_string(),
        author: Author {
            username: username.to_string(),
        },
    }
}

fn container() -> HtmlElement {
    let document = web_sys::window()
        .expect("window must exist")
        .document()
        .expect("document must exist");
    let element = document
        .create_element("div")
        .expect("div must be created")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("body must exist")
        .append_child(&element)
        .expect("container must be attached");
    element
}

fn navigate_to(path: &str) {
    web_sys::window()
        .expect("window must exist")
        .history()
        .expect("history must exist")
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .expect("push_state must succeed");
}

fn current_path() -> String {
    web_sys::window()
        .expect("window must exist")
        .location()
        .pathname()
        .expect("pathname must exist")
}

fn text_of(root: &HtmlElement, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .expect("selector must be valid")
        .and_then(|element| element.text_content())
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn shows_only_loading_indicator_before_response() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <PostList source=PendingFeed /> }
    });
    settle().await;

    assert!(root.query_selector(".spinner-border").expect("valid selector").is_some());
    assert_eq!(root.text_content().as_deref(), Some("Loading..."));
    assert!(root.query_selector("p").expect("valid selector").is_none());
}

#[wasm_bindgen_test]
async fn renders_one_entry_per_post_in_order() {
    let root = container();
    let feed = StaticFeed(Ok(ExploreResponse {
        data: vec![sample_post(2, "Zog!", "susan"), sample_post(1, "Book2", "jane")],
    }));
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <PostList source=feed /> }
    });
    settle().await;

    let entries = root.query_selector_all("p").expect("valid selector");
    assert_eq!(entries.length(), 2);

    let first = entries
        .item(0)
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    let second = entries
        .item(1)
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    assert_eq!(first, "susan — a minute agoZog!desc25");
    assert_eq!(second, "jane — a minute agoBook2desc25");
    assert_eq!(text_of(&root, "p b").as_deref(), Some("susan"));
}

#[wasm_bindgen_test]
async fn renders_empty_message_for_empty_feed() {
    let root = container();
    let feed = StaticFeed(Ok(ExploreResponse { data: vec![] }));
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <PostList source=feed /> }
    });
    settle().await;

    assert_eq!(root.text_content().as_deref(), Some("There are no posts."));
}

#[wasm_bindgen_test]
async fn renders_error_message_for_failed_feed() {
    let root = container();
    let feed = StaticFeed(Err(ClientError::from_status(503, None)));
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <PostList source=feed /> }
    });
    settle().await;

    assert_eq!(
        root.text_content().as_deref(),
        Some("Could not retrieve blog posts.")
    );
    assert!(root.query_selector("p b").expect("valid selector").is_none());
}

#[wasm_bindgen_test]
async fn late_response_after_unmount_is_dropped() {
    let root = container();
    let feed = DelayedFeed {
        delay_ms: 30,
        response: ExploreResponse {
            data: vec![sample_post(1, "Zog!", "susan")],
        },
    };
    let handle = leptos::mount::mount_to(root.clone(), move || {
        view! { <PostList source=feed /> }
    });
    settle().await;
    assert_eq!(root.text_content().as_deref(), Some("Loading..."));

    drop(handle);
    TimeoutFuture::new(60).await;

    assert!(root.query_selector("p").expect("valid selector").is_none());
    assert_eq!(root.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
async fn user_page_shows_username_heading() {
    navigate_to("/user/alice");
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <App config=ClientConfig::default() /> }
    });
    settle().await;

    assert_eq!(text_of(&root, "main h1").as_deref(), Some("alice"));
    assert_eq!(text_of(&root, "main p").as_deref(), Some("TODO"));
}

#[wasm_bindgen_test]
async fn unknown_path_redirects_home() {
    navigate_to("/does-not-exist");
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <App config=ClientConfig::default() /> }
    });
    settle().await;
    settle().await;

    assert_eq!(current_path(), "/");
    assert_eq!(
        text_of(&root, "main h1").as_deref(),
        Some("Welcome to BOOKSTORE")
    );
}

#[wasm_bindgen_test]
async fn header_marks_current_route_active() {
    navigate_to("/login");
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <App config=ClientConfig::default() /> }
    });
    settle().await;

    assert_eq!(text_of(&root, ".nav-link.active"), None);
    assert_eq!(text_of(&root, ".navbar-brand").as_deref(), Some("BOOKSTORE"));
    assert!(root.query_selector("input[type=password]").expect("valid selector").is_some());

    navigate_to("/");
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <App config=ClientConfig::default() /> }
    });
    settle().await;

    assert_eq!(text_of(&root, ".nav-link.active").as_deref(), Some("Home"));
}
