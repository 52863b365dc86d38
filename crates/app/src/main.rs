use dioxus::prelude::*;

mod auth;
mod clock;
mod components;
mod config;
mod guard;
mod logging;
mod routes;
mod storage;

use auth::SessionContext;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = config::app_config();
    logging::init(&config.logging.level);
    tracing::info!(brand = %config.site.brand, "starting");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The session mirror is hydrated from the store once, before any route renders.
    use_context_provider(SessionContext::new);

    rsx! {
        document::Title { "{config::app_config().site.brand}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
