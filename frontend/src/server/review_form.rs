use leptos::html::{Select, Textarea};
use leptos::prelude::*;
use shared::models::Rating;

use super::style;

/// Validates raw form input into a rating and a trimmed comment.
fn parse_review(rating: &str, comment: &str) -> Result<(Rating, String), String> {
    let rating: u8 = rating
        .trim()
        .parse()
        .map_err(|_| format!("Invalid rating: {:?}", rating))?;
    let rating = Rating::try_from(rating).map_err(|e| e.to_string())?;
    let comment = comment.trim();
    if comment.is_empty() {
        return Err("Please write a comment.".to_string());
    }
    Ok((rating, comment.to_string()))
}

/// A validated review. `on_created` resets the form once the service stored it.
pub struct ReviewSubmission {
    pub rating: Rating,
    pub comment: String,
    pub on_created: Callback<()>,
}

#[component]
pub fn ReviewForm(#[prop(into)] on_submit: Callback<ReviewSubmission>) -> impl IntoView {
    let rating_ref: NodeRef<Select> = NodeRef::new();
    let comment_ref: NodeRef<Textarea> = NodeRef::new();
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let clear_comment = Callback::new(move |_: ()| {
        if let Some(comment_input) = comment_ref.get_untracked() {
            comment_input.set_value("");
        }
    });

    let submit = move || {
        let (Some(rating_input), Some(comment_input)) = (rating_ref.get(), comment_ref.get()) else {
            return;
        };
        match parse_review(&rating_input.value(), &comment_input.value()) {
            Ok((rating, comment)) => {
                set_form_error.set(None);
                on_submit.run(ReviewSubmission {
                    rating,
                    comment,
                    on_created: clear_comment,
                });
            }
            Err(message) => set_form_error.set(Some(message)),
        }
    };

    view! {
        <form
            class=style::panel
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <h4 class=style::panel_title>"Write a review"</h4>
            <label class=style::field>
                "Rating"
                <select node_ref=rating_ref>
                    {(Rating::MIN..=Rating::MAX)
                        .rev()
                        .map(|value| {
                            view! { <option value=value.to_string()>{format!("{} ★", value)}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <textarea
                class=style::comment_input
                node_ref=comment_ref
                rows="4"
                placeholder="How was your time on this server?"
            ></textarea>
            <Show when=move || form_error.get().is_some()>
                <p class=style::error>{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class=style::submit_button>
                "Submit review"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_trimmed() {
        let (rating, comment) = parse_review("4", "  friendly staff \n").unwrap();
        assert_eq!(rating.get(), 4);
        assert_eq!(comment, "friendly staff");
    }

    #[test]
    fn rejects_bad_rating_and_blank_comment() {
        assert!(parse_review("0", "ok").is_err());
        assert!(parse_review("six", "ok").is_err());
        assert_eq!(
            parse_review("5", "   "),
            Err("Please write a comment.".to_string())
        );
    }
}
