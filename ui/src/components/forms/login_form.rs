use dioxus::prelude::*;

use crate::app::AuthContext;
use crate::components::input::{InputType, ValidatedInput};
use crate::features::auth::*;
use crate::{console_error_with_dispatch, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Path to open once signed in
    pub redirect_to: String,
    /// Performs the redirect
    pub on_navigate: EventHandler<String>,
}

/// Sign in / create account panel
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut state = use_signal(LoginState::default);
    let auth = use_context::<AuthContext>();
    let on_navigate = props.on_navigate;
    let redirect_to = props.redirect_to.clone();

    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let set_field = move |field: CredentialField| {
        move |value: String| dispatch.call(LoginAction::SetField(field, value))
    };

    let mode = state().mode;

    rsx! {
        div {
            class: "login-container",

            div {
                class: "mode-toggle",
                button {
                    r#type: "button",
                    disabled: mode == AuthMode::Login,
                    onclick: move |_| dispatch.call(LoginAction::SetMode(AuthMode::Login)),
                    "Sign In"
                }
                button {
                    r#type: "button",
                    disabled: mode == AuthMode::Register,
                    onclick: move |_| dispatch.call(LoginAction::SetMode(AuthMode::Register)),
                    "Create Account"
                }
            }

            h1 { "{mode.heading()}" }

            form {
                class: "login-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();

                    let current = state();
                    match check_submit(&current) {
                        SubmitCheck::Busy => return,
                        SubmitCheck::Invalid(problem) => {
                            dispatch.call(LoginAction::SetError(problem));
                            return;
                        }
                        SubmitCheck::Ready => {}
                    }

                    dispatch.call(LoginAction::SetError(String::new()));
                    dispatch.call(LoginAction::SetLoading(true));

                    let auth = auth.clone();
                    let redirect_to = redirect_to.clone();
                    spawn(async move {
                        let navigator = move |path: &str| on_navigate.call(path.to_string());
                        let outcome = submit(
                            current.mode,
                            &current.credentials,
                            auth.api.as_ref(),
                            &auth,
                            &navigator,
                            &redirect_to,
                        )
                        .await;

                        match outcome {
                            Ok(()) => {
                                console_info!("[Login] Signed in, redirected to {}", redirect_to);
                            }
                            Err(message) => {
                                console_error_with_dispatch!(dispatch, message);
                                dispatch.call(LoginAction::SetLoading(false));
                            }
                        }
                    });
                },

                if mode.is_register() {
                    ValidatedInput {
                        name: "firstName".to_string(),
                        value: state().credentials.first_name,
                        placeholder: "First name".to_string(),
                        input_type: InputType::Text,
                        on_change: set_field(CredentialField::FirstName),
                    }
                    ValidatedInput {
                        name: "lastName".to_string(),
                        value: state().credentials.last_name,
                        placeholder: "Last name".to_string(),
                        input_type: InputType::Text,
                        on_change: set_field(CredentialField::LastName),
                    }
                }

                ValidatedInput {
                    name: "email".to_string(),
                    value: state().credentials.email,
                    placeholder: "you@domain.com".to_string(),
                    input_type: InputType::Email,
                    on_change: set_field(CredentialField::Email),
                }

                if mode.is_register() {
                    ValidatedInput {
                        name: "organisation".to_string(),
                        value: state().credentials.organisation,
                        placeholder: "Organisation".to_string(),
                        input_type: InputType::Text,
                        on_change: set_field(CredentialField::Organisation),
                    }
                }

                ValidatedInput {
                    name: "password".to_string(),
                    value: state().credentials.password,
                    placeholder: "Password".to_string(),
                    input_type: InputType::password(state().show_password),
                    on_change: set_field(CredentialField::Password),
                }

                if mode.is_register() {
                    ValidatedInput {
                        name: "confirm".to_string(),
                        value: state().credentials.confirm,
                        placeholder: "Confirm password".to_string(),
                        input_type: InputType::password(state().show_password),
                        on_change: set_field(CredentialField::Confirm),
                    }
                }

                label {
                    class: "show-password",
                    input {
                        r#type: "checkbox",
                        checked: state().show_password,
                        onchange: move |_| {
                            let show = !state().show_password;
                            dispatch.call(LoginAction::SetShowPassword(show));
                        }
                    }
                    "Show password"
                }

                button {
                    r#type: "submit",
                    disabled: state().is_loading,
                    "{state().submit_text()}"
                }

                if !state().error.is_empty() {
                    p {
                        class: "auth-error",
                        "{state().error}"
                    }
                }

                if mode == AuthMode::Login {
                    p {
                        a { href: "/password", "Forgot Password?" }
                    }
                }
            }
        }
    }
}
