use leptos::prelude::*;
use shared::models::ServerId;

use super::style;
use crate::app::LoginStatusSignal;

/// Discussion board of a server. Posting is not wired to the data service yet.
#[component]
pub fn CommunityTab(#[prop(into)] server_id: Signal<ServerId>) -> impl IntoView {
    let login_status = use_context::<LoginStatusSignal>().expect("LoginStatus context not found");
    let greeting = move || {
        login_status.with(|status| match status.user() {
            Some(user) => format!("Welcome, {}!", user.username),
            None => "Log in to join the discussion.".to_string(),
        })
    };

    view! {
        <div class=style::panel>
            <h3 class=style::section_title>"Community"</h3>
            <p>{greeting}</p>
            <p class=style::muted>
                {move || format!("The board for server #{} has no threads yet.", server_id.get())}
            </p>
        </div>
    }
}
