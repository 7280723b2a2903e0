use dioxus::prelude::*;

use crate::components::{
    display::ProgressDisplay,
    input::{CharLimitWarning, FieldError, InputType, ValidatedInput, ValidatedTextArea},
};
use crate::features::project::*;
use crate::services::config::get_global_config;
use crate::utils::field_class;

#[derive(Props, PartialEq, Clone)]
pub struct FormPanelProps {
    /// The project record, owned by the caller
    pub data: ProjectData,
    /// Called on every keystroke with the field and its new (capped) value
    pub update_field: EventHandler<(ProjectField, String)>,
}

/// Sidebar with one input per editable project attribute
#[component]
pub fn FormPanel(props: FormPanelProps) -> Element {
    let mut panel = use_signal(FormPanelState::default);
    let limits = get_global_config().form;
    let update_field = props.update_field;

    let dispatch = EventHandler::new(move |action: FormPanelAction| {
        panel.with_mut(|s| s.reduce_in_place(action));
    });

    // Report upward first, then validate locally
    let on_field_change = move |field: ProjectField, raw: String| {
        let value = enforce_char_limit(&raw, limits.max_chars);
        update_field.call((field, value.clone()));
        dispatch.call(FormPanelAction::ValidateField(field, value));
    };

    let progress = completion_percent(&props.data);

    rsx! {
        div {
            class: "{panel().sidebar_class()}",

            button {
                class: "toggle-btn",
                onclick: move |_| dispatch.call(FormPanelAction::ToggleSidebar),
                "{panel().toggle_icon()}"
            }

            div {
                class: "sidebar-content",

                // Read-only project title
                div {
                    class: "form-header",
                    h1 { class: "main-title", "Theory of Change Form" }
                    p { class: "project-title", "{props.data.display_title()}" }
                }

                ProgressDisplay { percent: progress }

                for field in ProjectField::ALL {
                    div {
                        key: "{field.key()}",
                        class: "form-group",
                        id: "step-{field.key()}",

                        label {
                            r#for: "field-{field.key()}",
                            class: "form-label",
                            "{field.label()}"
                        }
                        p { class: "helper-text", "{field.example()}" }

                        if field.is_single_line() {
                            ValidatedInput {
                                id: format!("field-{}", field.key()),
                                name: field.key().to_string(),
                                value: props.data.get(field).to_string(),
                                placeholder: field.placeholder(),
                                input_type: InputType::Text,
                                input_class: field_class(panel().errors.get(field)).to_string(),
                                max_length: limits.max_chars,
                                on_change: move |value: String| on_field_change(field, value),
                            }
                        } else {
                            ValidatedTextArea {
                                id: format!("field-{}", field.key()),
                                value: props.data.get(field).to_string(),
                                placeholder: field.placeholder(),
                                input_class: field_class(panel().errors.get(field)).to_string(),
                                max_length: limits.max_chars,
                                on_change: move |value: String| on_field_change(field, value),
                            }
                        }

                        CharLimitWarning {
                            value: props.data.get(field).to_string(),
                            warning_threshold: limits.warning_threshold,
                            max_chars: limits.max_chars,
                        }

                        FieldError { error: panel().errors.get(field).map(str::to_string) }
                    }
                }
            }
        }
    }
}
