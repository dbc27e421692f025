use crate::home::Home;
use crate::server::ServerDetail;
use crate::service::HostDataService;
use crate::utils::create_listener;

use front_shared::{config::LOGIN_STATUS_EVENT, DataService, LoginStatus};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::models::Server;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/app.module.css"
);

pub type LoginStatusSignal = RwSignal<LoginStatus>;

#[component]
pub fn App() -> impl IntoView {
    let login_status: LoginStatusSignal = RwSignal::new(LoginStatus::LoggedOut);
    let selected = RwSignal::new(Option::<Server>::None);

    spawn_local(async move {
        match HostDataService.current_user().await {
            Ok(user) => login_status.set(user.into()),
            Err(e) => {
                error!("Failed to check login status: {}", e);
                login_status.set(LoginStatus::LoggedOut);
            }
        }
    });

    create_listener(LOGIN_STATUS_EVENT, move |status: LoginStatus| {
        log!("Login status changed: {:?}", status);
        login_status.set(status);
    });

    provide_context(login_status);

    // Holds on to the last selection while the detail view unmounts.
    let shown = Memo::new(move |previous: Option<&Server>| {
        selected
            .get()
            .or_else(|| previous.cloned())
            .unwrap_or_default()
    });

    view! {
        <main class=style::app>
            <Show
                when=move || selected.with(Option::is_some)
                fallback=move || view! { <Home on_select=Callback::new(move |server: Server| selected.set(Some(server))) /> }
            >
                <ServerDetail
                    server=shown
                    on_back=move || selected.set(None)
                />
            </Show>
        </main>
    }
}
