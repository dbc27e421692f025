use leptos::prelude::*;
use shared::models::Server;

use super::style;

#[component]
pub fn DetailsTab(server: Signal<Server>) -> impl IntoView {
    view! {
        <div class=style::details_layout>
            <div class=style::details_main>
                <h3 class=style::section_title>"Server details"</h3>
                <p class=style::description>{move || server.with(|s| s.description.clone())}</p>
                <div class=style::tag_list>
                    <For
                        each=move || server.with(|s| s.tags.as_slice().to_vec())
                        key=|tag| tag.clone()
                        let(tag)
                    >
                        <span class=style::tag>{tag}</span>
                    </For>
                </div>
            </div>
            <aside class=style::panel>
                <p class=style::players>
                    {move || server.with(|s| format!("{} / {} online", s.online_players, s.max_players))}
                </p>
                <p class=style::muted>{move || server.with(|s| format!("Version: {}", s.version))}</p>
            </aside>
        </div>
    }
}
