use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::features::auth::redirect_target;

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Path the user asked for before being sent to sign in
    pub from: Option<String>,
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    let redirect_to = redirect_target(props.from.as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        LoginForm {
            redirect_to: redirect_to,
            on_navigate: props.on_navigate,
        }
    }
}
