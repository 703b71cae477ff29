use dioxus::prelude::*;

mod assistant;
mod chat;
mod completion;
mod effects;
mod home;
mod login;
mod message;
mod settings;

use home::Home;
use login::Login;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

/// Root component. Expects an [`crate::client::HttpBackend`] in the root context.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
