mod server_card;

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::models::{Server, ServerId};

use crate::service::HostDataService;
use front_shared::DataService;
pub use server_card::ServerCard;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.module.css"
);

/// Server listing. Selecting a card hands the full record to `on_select`.
#[component]
pub fn Home(#[prop(into)] on_select: Callback<Server>) -> impl IntoView {
    let (servers, set_servers) = signal(Vec::<Server>::new());
    let (status, set_status) = signal(Some("Loading servers..."));

    spawn_local(async move {
        match HostDataService.fetch_servers().await {
            Ok(fetched) => {
                log!("Fetched {} servers", fetched.len());
                set_status.set(fetched.is_empty().then_some("No servers listed yet."));
                set_servers.set(fetched);
            }
            Err(e) => {
                error!("Failed to fetch servers: {}", e);
                set_status.set(Some("Failed to load servers."));
            }
        }
    });

    let select = Callback::new(move |id: ServerId| {
        let server = servers.with_untracked(|list| list.iter().find(|s| s.id == id).cloned());
        if let Some(server) = server {
            on_select.run(server);
        }
    });

    view! {
        <section class=style::home_container>
            <h1 class=style::title>"Servers"</h1>
            <Show when=move || status.get().is_some()>
                <p class=style::status>{move || status.get().unwrap_or_default()}</p>
            </Show>
            <div class=style::server_grid>
                <For
                    each=move || servers.get()
                    key=|server| server.id
                    let(server)
                >
                    <ServerCard server=server on_select=select />
                </For>
            </div>
        </section>
    }
}
