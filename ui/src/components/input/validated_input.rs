use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    /// Password inputs switch to plain text while "Show password" is ticked
    pub fn password(show: bool) -> Self {
        if show {
            InputType::Text
        } else {
            InputType::Password
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: Option<String>,
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub input_class: String,
    pub max_length: Option<usize>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: props.id.clone(),
            name: "{props.name}",
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            maxlength: props.max_length.map(|n| n.to_string()),
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedTextAreaProps {
    pub id: Option<String>,
    pub value: String,
    pub placeholder: String,
    #[props(default)]
    pub input_class: String,
    pub max_length: Option<usize>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedTextArea(props: ValidatedTextAreaProps) -> Element {
    rsx! {
        textarea {
            id: props.id.clone(),
            class: "{props.input_class}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            maxlength: props.max_length.map(|n| n.to_string()),
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
