use dioxus::prelude::*;

use player_bar::components::Player;
use player_bar::config::PlayerSettings;
use player_bar::store::AppStore;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_context_provider(PlayerSettings::load);
    use_context_provider(|| AppStore::new(settings.tracks.clone(), settings.autoplay));

    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: PLAYER_CSS }

        Player {}
    }
}
