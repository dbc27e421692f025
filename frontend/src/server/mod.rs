mod community;
mod details;
mod gallery;
mod review_form;
mod reviews;

use std::rc::Rc;

use front_shared::detail::{
    DetailState, DetailStore, ServerDetailController, SubmitOutcome, SummaryOutcome, Tab,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::models::{Server, User};
use strum::IntoEnumIterator;

use crate::{app::LoginStatusSignal, service::HostDataService, utils::banner_image};
use community::CommunityTab;
use details::DetailsTab;
use gallery::GalleryTab;
use review_form::ReviewSubmission;
use reviews::ReviewsTab;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/server/server.module.css"
);

/// Detail state lives in a signal so the view follows every controller write.
pub struct SignalStore(pub RwSignal<DetailState>);

impl DetailStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&DetailState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut DetailState)) {
        self.0.try_update(f);
    }
}

type Controller = ServerDetailController<HostDataService, SignalStore>;

/// Only a stored review clears the form; on failure the draft stays for a retry.
fn review_stored(outcome: &SubmitOutcome) -> bool {
    matches!(outcome, SubmitOutcome::Created(_))
}

fn author_name(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.username.is_empty() => user.username.clone(),
        _ => "Unknown player".to_string(),
    }
}

#[component]
fn TabButton(active: Signal<bool>, on_click: impl Fn() + 'static, children: Children) -> impl IntoView {
    view! {
        <button
            class=move || if active.get() { style::tab_active } else { style::tab }
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}

#[component]
pub fn ServerDetail(
    #[prop(into)] server: Signal<Server>,
    on_back: impl Fn() + 'static,
) -> impl IntoView {
    let login_status = use_context::<LoginStatusSignal>().expect("LoginStatus context not found");
    let state = RwSignal::new(DetailState::default());
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        ServerDetailController::new(HostDataService, SignalStore(state)),
    ));

    let lifecycle = controller.with_value(|c| c.lifecycle_token());
    on_cleanup(move || lifecycle.cancel());

    // Reload whenever the displayed server changes identity.
    let server_id = Memo::new(move |_| server.with(|s| s.id));
    Effect::new(move || {
        let id = server_id.get();
        let controller = controller.get_value();
        spawn_local(async move {
            controller.load(id).await;
        });
    });

    let active_tab = Memo::new(move |_| state.with(|s| s.active_tab));

    let submit_review = Callback::new(move |submission: ReviewSubmission| {
        let controller = controller.get_value();
        let user = login_status.with_untracked(|status| status.user().cloned());
        let ReviewSubmission {
            rating,
            comment,
            on_created,
        } = submission;
        spawn_local(async move {
            let outcome = controller.submit_review(user, rating, comment).await;
            if review_stored(&outcome) {
                on_created.run(());
            }
            match outcome {
                SubmitOutcome::Created(id) => log!("Created review {}", id),
                SubmitOutcome::NotLoggedIn => log!("Log in to submit a review"),
                _ => {}
            }
        });
    });

    let generate_summary = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move {
            if let SummaryOutcome::Skipped = controller.generate_summary().await {
                log!("Summary skipped: no reviews or already generating");
            }
        });
    });

    view! {
        <div class=style::detail_container>
            <button class=style::back_button on:click=move |_| on_back()>
                "← Back to the list"
            </button>

            <div class=style::detail_card>
                <div
                    class=style::detail_banner
                    style:background-image=move || server.with(|s| banner_image(&s.banner_url))
                >
                    <div class=style::detail_banner_shade></div>
                    <div class=style::detail_heading>
                        <h1 class=style::detail_name>{move || server.with(|s| s.name.clone())}</h1>
                        <p class=style::detail_ip>{move || server.with(|s| s.ip.clone())}</p>
                    </div>
                </div>

                <nav class=style::tab_bar>
                    {Tab::iter()
                        .map(|tab| {
                            view! {
                                <TabButton
                                    active=Signal::derive(move || active_tab.get() == tab)
                                    on_click=move || controller.with_value(|c| c.select_tab(tab))
                                >
                                    {tab.to_string()}
                                </TabButton>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class=style::tab_content>
                    {move || match active_tab.get() {
                        Tab::Details => view! { <DetailsTab server=server /> }.into_any(),
                        Tab::Gallery => view! { <GalleryTab state=state /> }.into_any(),
                        Tab::Reviews => {
                            view! {
                                <ReviewsTab
                                    state=state
                                    on_submit=submit_review
                                    on_summarize=generate_summary
                                />
                            }
                                .into_any()
                        }
                        Tab::Community => {
                            view! { <CommunityTab server_id=server_id /> }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use front_shared::Error;
    use shared::models::{ReviewId, UserId};

    use super::*;

    #[test]
    fn only_a_created_review_clears_the_form() {
        assert!(review_stored(&SubmitOutcome::Created(ReviewId(1))));
        assert!(!review_stored(&SubmitOutcome::Failed(Error::Service("down".to_string()))));
        assert!(!review_stored(&SubmitOutcome::Cancelled));
        assert!(!review_stored(&SubmitOutcome::NotLoggedIn));
    }

    #[test]
    fn nameless_authors_fall_back() {
        let named = User::new(UserId(1), "alex");
        assert_eq!(author_name(Some(&named)), "alex");
        assert_eq!(author_name(Some(&User::new(UserId(2), ""))), "Unknown player");
        assert_eq!(author_name(None), "Unknown player");
    }
}
