use bookstore_client::Post;
use leptos::prelude::*;

#[component]
pub fn PostItem(post: Post) -> impl IntoView {
    let Post {
        title,
        description,
        price,
        timestamp,
        author,
        ..
    } = post;

    view! {
        <p>
            <b>{author.username}</b>
            " — "
            {timestamp}
            <br />
            {title}
            <br />
            {description}
            <br />
            {price}
            <br />
        </p>
    }
}
