use dioxus::prelude::*;
use ui::{use_auth_provider, AuthContext, LoginPage, TheoryOfChange};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Session holder for every page below
    use_auth_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Theory of Change" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:from")]
    Login { from: String },
}

/// The form, for signed-in users only. Everyone else is sent to sign in and
/// brought back here afterwards.
#[component]
fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let signed_in = auth.is_signed_in();
    let nav = navigator();

    use_effect(move || {
        if !auth.is_signed_in() {
            nav.replace(Route::Login {
                from: Route::Home {}.to_string(),
            });
        }
    });

    if signed_in {
        rsx! {
            TheoryOfChange {}
        }
    } else {
        rsx! {}
    }
}

#[component]
fn Login(from: String) -> Element {
    let nav = navigator();

    rsx! {
        LoginPage {
            from: from,
            on_navigate: move |path: String| {
                nav.replace(path);
            }
        }
    }
}
