use front_shared::detail::DetailState;
use leptos::prelude::*;
use shared::models::find_user;

use super::{author_name, style};

#[component]
pub fn GalleryTab(state: RwSignal<DetailState>) -> impl IntoView {
    let is_empty = move || state.with(|s| s.gallery_posts.is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class=style::muted>"No screenshots shared yet."</p> }
        >
            <div class=style::gallery_grid>
                <For
                    each=move || state.with(|s| s.gallery_posts.clone())
                    key=|post| post.id
                    let(post)
                >
                    <figure class=style::gallery_item>
                        <img class=style::gallery_image src=post.image_url.clone() loading="lazy" />
                        <figcaption>
                            {post.caption.clone().unwrap_or_default()}
                            <span class=style::muted>
                                {move || {
                                    state.with(|s| author_name(find_user(&s.users, post.user_id)))
                                }}
                            </span>
                        </figcaption>
                    </figure>
                </For>
            </div>
        </Show>
    }
}
