use dioxus::prelude::*;
use ui::{SignupConfig, SignupService, DEFAULT_SIGNUP_ENDPOINT};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Endpoint and token come from the build environment, e.g.
/// `SIGNUP_API_TOKEN=... dx serve`
fn signup_config() -> SignupConfig {
    SignupConfig::new(
        option_env!("SIGNUP_API_ENDPOINT").unwrap_or(DEFAULT_SIGNUP_ENDPOINT),
        option_env!("SIGNUP_API_TOKEN").unwrap_or_default(),
    )
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Create User" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let mut user_was_created = use_signal(|| false);

    rsx! {
        main {
            class: "page",
            if user_was_created() {
                div {
                    class: "created-notice",
                    h2 { "User created" }
                    p { "Your account is ready." }
                }
            } else {
                SignupService {
                    config: signup_config(),
                    on_user_created: move |created: bool| user_was_created.set(created)
                }
            }
        }
    }
}
