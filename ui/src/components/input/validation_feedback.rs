use dioxus::prelude::*;

use crate::features::project::field_warning;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub error: Option<String>,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            span {
                class: "error-text",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CharLimitWarningProps {
    pub value: String,
    pub warning_threshold: usize,
    pub max_chars: usize,
}

#[component]
pub fn CharLimitWarning(props: CharLimitWarningProps) -> Element {
    match field_warning(&props.value, props.warning_threshold, props.max_chars) {
        Some(warning) => rsx! {
            span {
                class: "warning-text",
                "{warning}"
            }
        },
        None => rsx! {},
    }
}
