mod app;
mod home;
mod server;
mod service;
pub mod utils;

use app::*;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    utils::logging::init_logging();
    mount_to_body(|| {
        view! { <App /> }
    })
}
