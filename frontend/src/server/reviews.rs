use front_shared::detail::DetailState;
use leptos::prelude::*;
use shared::models::{find_user, Rating, Review};

use super::{
    author_name,
    review_form::{ReviewForm, ReviewSubmission},
    style,
};
use crate::app::LoginStatusSignal;

/// Out-of-range stored ratings saturate to the 0..=5 star scale.
fn stars(rating: u8) -> String {
    let filled = rating.min(Rating::MAX) as usize;
    let empty = Rating::MAX as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[component]
fn ReviewItem(review: Review, state: RwSignal<DetailState>) -> impl IntoView {
    let user_id = review.user_id;
    let date = review
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    view! {
        <li class=style::review>
            <div class=style::review_header>
                <span class=style::review_author>
                    {move || state.with(|s| author_name(find_user(&s.users, user_id)))}
                </span>
                <span class=style::review_stars>{stars(review.rating)}</span>
                <span class=style::muted>{date}</span>
            </div>
            <p>{review.comment}</p>
        </li>
    }
}

#[component]
pub fn ReviewsTab(
    state: RwSignal<DetailState>,
    #[prop(into)] on_submit: Callback<ReviewSubmission>,
    #[prop(into)] on_summarize: Callback<()>,
) -> impl IntoView {
    let login_status = use_context::<LoginStatusSignal>().expect("LoginStatus context not found");
    let summarizing = move || state.with(|s| s.summarizing);

    view! {
        <div class=style::reviews_layout>
            <div class=style::reviews_main>
                <h3 class=style::section_title>
                    {move || format!("Player reviews ({})", state.with(|s| s.reviews.len()))}
                </h3>
                <Show
                    when=move || state.with(|s| !s.reviews.is_empty())
                    fallback=|| view! { <p class=style::muted>"No reviews yet."</p> }
                >
                    <ul class=style::review_list>
                        <For
                            each=move || state.with(|s| s.reviews.clone())
                            key=|review| review.id
                            let(review)
                        >
                            <ReviewItem review=review state=state />
                        </For>
                    </ul>
                </Show>
            </div>

            <aside class=style::reviews_side>
                <div class=style::panel>
                    <h4 class=style::panel_title>"AI review summary"</h4>
                    <button
                        class=style::summary_button
                        disabled=move || !state.with(DetailState::can_summarize)
                        on:click=move |_| on_summarize.run(())
                    >
                        {move || if summarizing() { "Generating..." } else { "Generate summary" }}
                    </button>
                    <Show when=summarizing>
                        <p class=style::muted>"Thinking..."</p>
                    </Show>
                    <Show when=move || state.with(|s| !s.summary.is_empty())>
                        <p class=style::summary>{move || state.with(|s| s.summary.clone())}</p>
                    </Show>
                    <Show when=move || state.with(|s| s.summary_error.is_some())>
                        <p class=style::error>
                            {move || state.with(|s| s.summary_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                </div>

                <Show
                    when=move || login_status.with(|status| status.user().is_some())
                    fallback=|| {
                        view! {
                            <div class=style::panel>
                                <p>"You need to log in to write a review."</p>
                            </div>
                        }
                    }
                >
                    <ReviewForm on_submit=on_submit />
                </Show>
            </aside>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn stars_saturate_out_of_range_ratings() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
