use front_shared::config::CARD_TAG_LIMIT;
use leptos::prelude::*;
use shared::models::{Server, ServerId};

use crate::utils::banner_image;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.module.css"
);

fn occupancy_label(server: &Server) -> String {
    match server.occupancy_percent() {
        Some(percent) => format!("{:.0}% full", percent),
        None => "No player slots".to_string(),
    }
}

/// Summary tile of one server. Clicking it reports the server id.
#[component]
pub fn ServerCard(server: Server, #[prop(into)] on_select: Callback<ServerId>) -> impl IntoView {
    let id = server.id;
    let banner = banner_image(&server.banner_url);
    let bar_width = format!("{}%", server.occupancy_bar_width());
    let occupancy = occupancy_label(&server);
    let players = format!("{} / {}", server.online_players, server.max_players);
    let rank = format!("#{}", server.rank);
    let tags = server.tags.first(CARD_TAG_LIMIT).to_vec();

    view! {
        <div class=style::card on:click=move |_| on_select.run(id)>
            <div class=style::card_banner style:background-image=banner>
                <div class=style::card_banner_shade></div>
            </div>
            <div class=style::card_body>
                <div class=style::card_header>
                    <div class=style::card_identity>
                        <span class=style::card_rank>{rank}</span>
                        <div>
                            <h3 class=style::card_name>{server.name}</h3>
                            <p class=style::card_ip>{server.ip}</p>
                        </div>
                    </div>
                    <div class=style::card_meta>
                        <span class=style::card_players>{players}</span>
                        <span class=style::card_version>{server.version}</span>
                    </div>
                </div>
                <div class=style::occupancy_track title=occupancy>
                    <div class=style::occupancy_bar style:width=bar_width></div>
                </div>
                <div class=style::tag_list>
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class=style::tag>{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
